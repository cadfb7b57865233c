// Builds the configured reading source
use crate::application::reading_source::ReadingSource;
use crate::infrastructure::config::{SourceKind, SourceSettings};
use crate::infrastructure::csv_source::CsvFileSource;
use crate::infrastructure::embedded_source::EmbeddedSource;
use crate::infrastructure::json_source::JsonFileSource;
use std::sync::Arc;

pub fn build_source(settings: &SourceSettings) -> anyhow::Result<Arc<dyn ReadingSource>> {
    let source: Arc<dyn ReadingSource> = match settings.kind {
        SourceKind::Embedded => Arc::new(EmbeddedSource),
        SourceKind::Json | SourceKind::Csv => {
            let Some(path) = settings.path.clone() else {
                anyhow::bail!("source.path is required for {:?} sources", settings.kind);
            };
            if settings.kind == SourceKind::Json {
                Arc::new(JsonFileSource::new(path))
            } else {
                Arc::new(CsvFileSource::new(path))
            }
        }
    };

    Ok(source)
}

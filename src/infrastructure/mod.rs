// Infrastructure layer - External dependencies and adapters
pub mod chart_mapper;
pub mod config;
pub mod csv_source;
pub mod embedded_source;
pub mod float_record;
pub mod json_renderer;
pub mod json_source;
pub mod source_factory;

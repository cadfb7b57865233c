// Immutable set of readings loaded once per session
use super::reading::Reading;
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct ReadingSet {
    readings: Arc<[Reading]>,
}

impl ReadingSet {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self {
            readings: readings.into(),
        }
    }

    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}


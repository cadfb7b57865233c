// Domain layer - Readings, aggregations and view models
pub mod aggregation;
pub mod dashboard;
pub mod error;
pub mod palette;
pub mod reading;
pub mod reading_set;
pub mod view;

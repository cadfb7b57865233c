//! Float dashboard - aggregation and view sync for oceanographic float readings
//!
//! The library exposes the layers for the binary and for integration tests.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

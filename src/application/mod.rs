// Application layer - Use cases and the traits they depend on
pub mod dashboard_service;
pub mod reading_source;
pub mod renderer;
pub mod view_sync;

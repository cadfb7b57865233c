// Presentation layer - Console control surface
pub mod console;
pub mod handlers;

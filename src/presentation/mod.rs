// Presentation layer - Command line surface and rendering
pub mod app_state;
pub mod cli;
pub mod handlers;
pub mod report;

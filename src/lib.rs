pub mod app;
pub mod config;
pub mod docs;
pub mod errors;
pub mod generator;
pub mod html;
pub mod models;
pub mod routes;

// Re-export commonly used items for tests
pub use app::create_app;
pub use docs::build_document;
pub use generator::{produce_demo, Artifacts, DemoReport};

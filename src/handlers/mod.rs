pub mod classifier;
pub mod framework;
pub mod raised;
#[cfg(test)]
pub mod testing;

// Re-exports for the later usage in main.rs
pub use crate::handlers::classifier::{ErrorClassifier, TracingSink};
pub use crate::handlers::framework::{command_check, on_error};

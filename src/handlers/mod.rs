pub mod analytics;
pub mod cattle;
pub mod common;
pub mod health;
pub mod milk;
pub mod records;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

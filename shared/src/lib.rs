//! FitQuest Shared Library
//!
//! This crate contains the domain model, the progress engine, and the API
//! types used across the backend and WASM modules.

pub mod models;
pub mod progress;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use models::*;
pub use progress::*;
pub use types::*;

//! FitQuest Backend Library
//!
//! Exposes the backend internals for integration tests and the binary.

pub mod config;
pub mod error;
pub mod generation;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod stores;

//! AI plan generation
//!
//! The backend asks an external model for a structured weekly plan. The
//! [`PlanGenerator`] trait abstracts the provider; [`OllamaPlanGenerator`]
//! is the shipped implementation, talking to a local Ollama server.

mod ollama;
mod prompt;

pub use ollama::OllamaPlanGenerator;
pub use prompt::build_prompt;

use async_trait::async_trait;
use fitquest_shared::models::{GeneratedPlan, PlanSchemaError, UserProfile};
use thiserror::Error;

/// Failures while producing a plan
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("plan generation is disabled in configuration")]
    Disabled,

    #[error("plan service request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("plan service returned malformed content: {0}")]
    Malformed(String),

    #[error("generated plan failed validation: {0}")]
    InvalidPlan(#[from] PlanSchemaError),
}

/// A provider that turns a user profile into a validated weekly plan
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    async fn generate(&self, profile: &UserProfile) -> Result<GeneratedPlan, GenerationError>;
}

/// Stand-in generator used when AI is disabled; every request fails with
/// [`GenerationError::Disabled`].
pub struct DisabledPlanGenerator;

#[async_trait]
impl PlanGenerator for DisabledPlanGenerator {
    async fn generate(&self, _profile: &UserProfile) -> Result<GeneratedPlan, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

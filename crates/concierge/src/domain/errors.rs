//! Domain Errors
//!
//! Error types for the routing pipeline and its collaborators.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// The classifier returned a value the dispatcher does not recognize.
    /// Defensive: the current keyword heuristic cannot produce this.
    #[error("could not determine message intent: {0}")]
    ClassificationAmbiguous(String),

    /// A generative-model or agent invocation failed (transient).
    #[error("model invocation failed: {0}")]
    ModelInvocation(String),

    /// A malformed task record reached the synthesizer.
    #[error("unexpected task record shape: {0}")]
    UnexpectedRecordShape(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("external service error: {0}")]
    ExternalService(String),
}

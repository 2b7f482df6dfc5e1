//! Intake error types.

use thiserror::Error;
use trace_core::errors::CoreError;

#[derive(Debug, Error)]
pub enum IntakeError {
    /// The stakeholder event form failed its shape checks.
    #[error("invalid event: {}", .0.join("; "))]
    InvalidEvent(Vec<String>),

    /// Only intermediaries log handling events.
    #[error("role '{0}' cannot log handling events")]
    UnsupportedRole(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

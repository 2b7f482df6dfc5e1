//! Cross-cutting error types for Harvest Trace.
//!
//! Domain-specific errors (`ConfigError`, `ValidatorError`, `IntakeError`) live
//! in their respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Harvest Trace crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed a local shape or format check.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The OS random source could not be read.
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),
}

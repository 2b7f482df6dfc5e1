//! # trace-validator
//!
//! Validation services for harvest records.
//!
//! A [`ValidationService`] turns a [`HarvestRecord`] into a
//! [`ValidationVerdict`]. Two implementations exist:
//! - [`LlmValidator`]: prompts a language model over an OpenAI-compatible
//!   chat completions API and enforces the verdict schema on its reply
//! - [`RuleValidator`]: deterministic offline checks mirroring the prompt
//!
//! [`Validator`] selects between them at runtime from configuration.

mod error;
mod http;
mod llm;
pub mod prompt;
mod rules;
pub mod schema;

pub use error::ValidatorError;
pub use llm::LlmValidator;
pub use rules::RuleValidator;

use std::future::Future;

use trace_config::ValidatorConfig;
use trace_core::entities::{HarvestRecord, ValidationVerdict};

/// Something that can judge a harvest record.
///
/// Implementations make at most one external call per invocation and never
/// retry.
pub trait ValidationService {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce a verdict for one record.
    fn validate(
        &self,
        record: &HarvestRecord,
    ) -> impl Future<Output = Result<ValidationVerdict, ValidatorError>> + Send;
}

impl ValidationService for LlmValidator {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn validate(&self, record: &HarvestRecord) -> Result<ValidationVerdict, ValidatorError> {
        self.request_verdict(record).await
    }
}

impl ValidationService for RuleValidator {
    fn name(&self) -> &'static str {
        "rules"
    }

    async fn validate(&self, record: &HarvestRecord) -> Result<ValidationVerdict, ValidatorError> {
        Ok(self.evaluate(record))
    }
}

/// Runtime choice of validation service.
pub enum Validator {
    Llm(LlmValidator),
    Rules(RuleValidator),
}

impl Validator {
    /// Pick the LLM validator when it is configured, otherwise the offline
    /// rules. `offline` forces the rules.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError`] when the LLM section is configured but the
    /// client cannot be built from it.
    pub fn from_config(config: &ValidatorConfig, offline: bool) -> Result<Self, ValidatorError> {
        if offline {
            tracing::debug!("offline mode requested; using rule validator");
            return Ok(Self::Rules(RuleValidator::new()));
        }
        if !config.is_configured() {
            tracing::warn!(
                "LLM validator is not configured (set HARVEST_VALIDATOR__API_KEY); using offline rules"
            );
            return Ok(Self::Rules(RuleValidator::new()));
        }
        LlmValidator::from_config(config).map(Self::Llm)
    }
}

impl ValidationService for Validator {
    fn name(&self) -> &'static str {
        match self {
            Self::Llm(inner) => inner.name(),
            Self::Rules(inner) => inner.name(),
        }
    }

    async fn validate(&self, record: &HarvestRecord) -> Result<ValidationVerdict, ValidatorError> {
        match self {
            Self::Llm(inner) => inner.validate(record).await,
            Self::Rules(inner) => inner.validate(record).await,
        }
    }
}

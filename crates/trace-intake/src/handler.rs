//! The harvest submission handler.
//!
//! ```text
//! form ── shape checks ──✗──> failure(field errors)        (no service call)
//!            │
//!            ✓
//!            └─> validation service ──✗ verdict──> failure(verdict errors)
//!                        │           ──error─────> failure(generic message)
//!                        └── ✓ verdict ─────────> success(placeholder id)
//! ```

use trace_core::ids::new_produce_id;
use trace_core::responses::SubmissionResult;
use trace_validator::ValidationService;

use crate::form::HarvestForm;

pub const MSG_INVALID_INPUT: &str = "Invalid data provided.";
pub const MSG_VALIDATION_FAILED: &str =
    "Data validation failed. Please check the format of your input.";
pub const MSG_SUCCESS: &str = "Harvest data submitted and validated successfully!";
pub const MSG_UNEXPECTED: &str =
    "An unexpected error occurred on the server. Please try again later.";

/// Runs one submission end to end against a validation service.
pub struct SubmissionHandler<V> {
    validator: V,
    next_id: fn() -> String,
}

impl<V: ValidationService> SubmissionHandler<V> {
    #[must_use]
    pub fn new(validator: V) -> Self {
        Self {
            validator,
            next_id: new_produce_id,
        }
    }

    /// Replace the placeholder id source.
    #[must_use]
    pub fn with_id_source(mut self, next_id: fn() -> String) -> Self {
        self.next_id = next_id;
        self
    }

    #[must_use]
    pub const fn validator(&self) -> &V {
        &self.validator
    }

    /// Submit a harvest form.
    ///
    /// Never fails: every outcome, including service errors, is a
    /// [`SubmissionResult`]. The service is called at most once.
    pub async fn submit(&self, form: &HarvestForm) -> SubmissionResult {
        let record = match form.check() {
            Ok(record) => record,
            Err(errors) => {
                tracing::debug!(?errors, "harvest form rejected before validation");
                return SubmissionResult::failed(MSG_INVALID_INPUT, Some(errors));
            }
        };

        tracing::debug!(
            service = self.validator.name(),
            crop = %record.crop_name,
            date = %record.harvest_date,
            "validating harvest record"
        );

        match self.validator.validate(&record).await {
            Ok(verdict) if verdict.is_valid => {
                let produce_id = (self.next_id)();
                tracing::info!(%produce_id, "harvest record accepted");
                SubmissionResult::succeeded(MSG_SUCCESS, produce_id)
            }
            Ok(verdict) => {
                tracing::debug!(errors = ?verdict.validation_errors, "harvest record rejected");
                SubmissionResult::failed(MSG_VALIDATION_FAILED, Some(verdict.validation_errors))
            }
            Err(error) => {
                tracing::error!(service = self.validator.name(), %error, "harvest validation failed");
                SubmissionResult::failed(MSG_UNEXPECTED, None)
            }
        }
    }
}

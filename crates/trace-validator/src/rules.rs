//! Deterministic offline validation.
//!
//! Applies the same rules the model is asked to enforce, without a network
//! call. Used when no LLM is configured or when offline mode is forced.

use chrono::{NaiveDate, Utc};
use trace_core::dates::{format_iso, is_strict_iso_date};
use trace_core::entities::{HarvestRecord, ValidationVerdict};

/// Rule-based validation service.
#[derive(Debug, Clone)]
pub struct RuleValidator {
    today: NaiveDate,
}

impl Default for RuleValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleValidator {
    /// Rules evaluated against today's UTC date.
    #[must_use]
    pub fn new() -> Self {
        Self {
            today: Utc::now().date_naive(),
        }
    }

    /// Rules evaluated against a fixed date.
    #[must_use]
    pub const fn as_of(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Evaluate every rule, collecting errors in field order.
    #[must_use]
    pub fn evaluate(&self, record: &HarvestRecord) -> ValidationVerdict {
        let mut errors = Vec::new();

        if record.crop_name.trim().is_empty() {
            errors.push("Crop name must not be empty.".to_string());
        }

        let date = format_iso(record.harvest_date);
        if !is_strict_iso_date(&date) {
            errors.push(format!(
                "Harvest date '{date}' must be in ISO format (YYYY-MM-DD)."
            ));
        } else if record.harvest_date > self.today {
            errors.push(format!(
                "Harvest date {date} is in the future (today is {}).",
                format_iso(self.today)
            ));
        }

        let mut metrics = 0usize;
        for entry in record.metric_entries() {
            metrics += 1;
            if let Some((name, value)) = entry.split_once(':')
                && value.trim().is_empty()
            {
                errors.push(format!("Quality metric '{}' has no value.", name.trim()));
            }
        }
        if metrics == 0 {
            errors.push("At least one quality metric must be present.".to_string());
        }

        ValidationVerdict::from_errors(errors)
    }
}

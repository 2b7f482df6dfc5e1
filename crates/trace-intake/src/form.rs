//! Local shape checks on the harvest form.
//!
//! These run before any external call. Length rules are declared with
//! `garde`; the date is parsed by hand. Every failing field contributes one
//! message, in form order.

use garde::Validate;
use serde::{Deserialize, Serialize};
use trace_core::dates::{DateError, parse_harvest_date};
use trace_core::entities::HarvestRecord;

use crate::rules::{failed_fields, has_failed};

pub const CROP_NAME_TOO_SHORT: &str = "Crop name must be at least 2 characters.";
pub const HARVEST_DATE_REQUIRED: &str = "A harvest date is required.";
pub const HARVEST_DATE_INVALID: &str = "Harvest date must be a valid date.";
pub const QUALITY_METRICS_REQUIRED: &str = "Please provide quality metrics.";

/// Raw harvest form fields, exactly as entered.
///
/// The `garde` rules apply to trimmed text; [`HarvestForm::check`] trims
/// before validating.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HarvestForm {
    #[garde(length(chars, min = 2))]
    pub crop_name: String,
    #[garde(skip)]
    pub harvest_date: String,
    #[garde(length(min = 1))]
    pub quality_metrics: String,
}

impl HarvestForm {
    #[must_use]
    pub fn new(crop_name: &str, harvest_date: &str, quality_metrics: &str) -> Self {
        Self {
            crop_name: crop_name.to_string(),
            harvest_date: harvest_date.to_string(),
            quality_metrics: quality_metrics.to_string(),
        }
    }

    /// Check field shapes and build the record sent for validation.
    ///
    /// Text fields are trimmed and the date is normalized to `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns every field error found, in form order.
    pub fn check(&self) -> Result<HarvestRecord, Vec<String>> {
        let trimmed = Self::new(
            self.crop_name.trim(),
            &self.harvest_date,
            self.quality_metrics.trim(),
        );
        let failed = failed_fields(&trimmed);
        let mut errors = Vec::new();

        if has_failed(&failed, "crop_name") {
            errors.push(CROP_NAME_TOO_SHORT.to_string());
        }

        let harvest_date = match parse_harvest_date(&trimmed.harvest_date) {
            Ok(date) => Some(date),
            Err(DateError::Missing) => {
                errors.push(HARVEST_DATE_REQUIRED.to_string());
                None
            }
            Err(DateError::Unparseable(_)) => {
                errors.push(HARVEST_DATE_INVALID.to_string());
                None
            }
        };

        if has_failed(&failed, "quality_metrics") {
            errors.push(QUALITY_METRICS_REQUIRED.to_string());
        }

        match harvest_date {
            Some(harvest_date) if errors.is_empty() => Ok(HarvestRecord {
                crop_name: trimmed.crop_name,
                harvest_date,
                quality_metrics: trimmed.quality_metrics,
            }),
            _ => Err(errors),
        }
    }
}

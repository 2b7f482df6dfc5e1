use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One batch of produce at origin, as sent to the validation service.
///
/// Lives for a single submission and is never stored. Serializes with the
/// camelCase field names the validation prompt expects, and the date as
/// `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HarvestRecord {
    pub crop_name: String,
    pub harvest_date: NaiveDate,
    pub quality_metrics: String,
}

impl HarvestRecord {
    /// Quality metrics split on commas, trimmed, blanks dropped.
    pub fn metric_entries(&self) -> impl Iterator<Item = &str> {
        self.quality_metrics
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
    }
}

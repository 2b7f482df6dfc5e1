use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A produce batch as shown on the trace page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Produce {
    pub id: String,
    pub name: String,
    pub harvest_date: NaiveDate,
    pub image_url: String,
    pub quality_metrics: Vec<String>,
}

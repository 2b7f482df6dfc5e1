//! Prompt text sent to the language model.

use trace_core::dates::format_iso;
use trace_core::entities::HarvestRecord;

/// Name attached to the structured-output schema in requests.
pub const VERDICT_SCHEMA_NAME: &str = "harvest_validation_verdict";

/// Instructions framing the model as a harvest-data validator.
pub const SYSTEM_PROMPT: &str = "\
You are an expert data validator for agricultural harvest data.
You will receive crop name, harvest date, and quality metrics.
Your task is to validate the format of the data and identify any inconsistencies.

Respond with a JSON object indicating whether the data is valid and a list of validation errors, if any.
The validationErrors field should be an empty array if isValid is true.
The date must be in ISO format (YYYY-MM-DD).
Each quality metric must be present.
Quality metrics describe the crop, such as weight, size, and color, separated by commas.";

/// Render the per-submission user message.
#[must_use]
pub fn render_user_prompt(record: &HarvestRecord) -> String {
    format!(
        "Crop Name: {}\nHarvest Date: {}\nQuality Metrics: {}",
        record.crop_name,
        format_iso(record.harvest_date),
        record.quality_metrics
    )
}

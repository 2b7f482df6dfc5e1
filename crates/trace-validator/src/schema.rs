//! Verdict schema generation and checking of model output.
//!
//! The schema is generated from [`ValidationVerdict`] with schemars, sent
//! to the model as the structured-output contract, and enforced on the
//! reply with jsonschema before deserializing.

use schemars::schema_for;
use trace_core::entities::ValidationVerdict;

use crate::error::ValidatorError;

/// JSON Schema of the verdict object.
///
/// # Errors
///
/// Returns [`ValidatorError::Parse`] if the generated schema cannot be
/// converted to a JSON value.
pub fn verdict_schema() -> Result<serde_json::Value, ValidatorError> {
    serde_json::to_value(schema_for!(ValidationVerdict))
        .map_err(|e| ValidatorError::Parse(format!("failed to render verdict schema: {e}")))
}

/// Parse a model reply into a verdict.
///
/// Tolerates a Markdown code fence around the JSON. The parsed value must
/// satisfy [`verdict_schema`].
///
/// # Errors
///
/// Returns [`ValidatorError::Parse`] for non-JSON content and
/// [`ValidatorError::Schema`] for JSON that does not match the schema.
pub fn parse_verdict(content: &str) -> Result<ValidationVerdict, ValidatorError> {
    let body = strip_code_fence(content);
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ValidatorError::Parse(format!("model reply is not JSON: {e}")))?;

    check_against_schema(&value)?;

    serde_json::from_value(value)
        .map_err(|e| ValidatorError::Parse(format!("model reply is not a verdict: {e}")))
}

/// Validate a JSON value against the verdict schema.
///
/// # Errors
///
/// Returns [`ValidatorError::Schema`] listing every violation.
pub fn check_against_schema(value: &serde_json::Value) -> Result<(), ValidatorError> {
    let schema = verdict_schema()?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| ValidatorError::Parse(format!("verdict schema does not compile: {e}")))?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| format!("{e}"))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidatorError::Schema { errors })
    }
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = match rest.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
        _ => rest,
    };
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

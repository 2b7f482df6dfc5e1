//! Response types rendered by the `harvest` binary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Produce, SupplyChainEvent};

/// Outcome of one harvest submission.
///
/// A failed submission is still a normal value: `success` is false and
/// `errors` carries field or validator messages when there are any.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResult {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub produce_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl SubmissionResult {
    #[must_use]
    pub fn succeeded(message: &str, produce_id: String) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            produce_id: Some(produce_id),
            errors: None,
        }
    }

    #[must_use]
    pub fn failed(message: &str, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            produce_id: None,
            errors,
        }
    }
}

/// Response from `harvest trace` and `harvest scan`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TraceResponse {
    pub requested_id: String,
    pub produce: Produce,
    pub events: Vec<SupplyChainEvent>,
}

/// Response from `harvest event`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventLogResponse {
    pub produce_id: String,
    pub event: SupplyChainEvent,
    pub message: String,
}

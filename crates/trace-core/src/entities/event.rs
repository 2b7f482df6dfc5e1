use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EventType;
use crate::price::Price;

/// One illustrative step in a product's displayed history.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SupplyChainEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub title: String,
    pub location: String,
    pub timestamp: DateTime<Utc>,
    /// A name, company, or wallet address.
    pub actor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_ref: Option<String>,
}

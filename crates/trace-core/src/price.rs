//! Transaction prices held in minor currency units.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// A non-negative price, stored as an integer count of minor units
/// (paise, cents) to keep equality exact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub amount_minor: u64,
    pub currency: String,
}

impl Price {
    /// Parse a decimal amount such as `200`, `200.5` or `200.00`.
    ///
    /// At most two fractional digits are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] for blank, negative, malformed, or
    /// overflowing amounts.
    pub fn parse(raw: &str, currency: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let invalid = || CoreError::Validation(format!("invalid price '{trimmed}'"));

        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if fraction.len() > 2
            || !whole.chars().all(|c| c.is_ascii_digit())
            || !fraction.chars().all(|c| c.is_ascii_digit())
            || (trimmed.contains('.') && fraction.is_empty())
        {
            return Err(invalid());
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let fraction: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        let amount_minor = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(fraction))
            .ok_or_else(invalid)?;

        Ok(Self {
            amount_minor,
            currency: currency.to_string(),
        })
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02} {}",
            self.amount_minor / 100,
            self.amount_minor % 100,
            self.currency
        )
    }
}

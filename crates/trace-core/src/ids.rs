//! Placeholder identifiers.
//!
//! Produce ids are timestamp-derived and carry no uniqueness guarantee; two
//! submissions in the same millisecond get the same id. Transaction
//! references stand in for ledger hashes and are random hex.

use chrono::{DateTime, Utc};

use crate::errors::CoreError;

/// Prefix for produce batch ids.
pub const PRODUCE_PREFIX: &str = "prod";

/// Number of random bytes behind a transaction reference.
const TX_REF_BYTES: usize = 32;

/// Produce id derived from a specific instant: `prod-<unix-millis>`.
#[must_use]
pub fn produce_id_at(at: DateTime<Utc>) -> String {
    format!("{PRODUCE_PREFIX}-{}", at.timestamp_millis())
}

/// Produce id for the current instant.
#[must_use]
pub fn new_produce_id() -> String {
    produce_id_at(Utc::now())
}

/// Fabricate a `0x`-prefixed 64-hex-digit transaction reference.
///
/// # Errors
///
/// Returns [`CoreError::Entropy`] if the OS random source fails.
pub fn new_transaction_ref() -> Result<String, CoreError> {
    let mut bytes = [0u8; TX_REF_BYTES];
    getrandom::fill(&mut bytes)
        .map_err(|e| CoreError::Entropy(format!("failed to generate transaction ref: {e}")))?;
    let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    Ok(format!("0x{hex}"))
}

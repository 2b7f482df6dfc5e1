//! # trace-core
//!
//! Core types shared across the Harvest Trace crates:
//! - Entity structs (harvest records, validation verdicts, produce, supply-chain events)
//! - Event type and stakeholder role enums
//! - Harvest date normalization
//! - Placeholder identifier and transaction reference fabrication
//! - Price parsing in minor currency units
//! - The static sample catalog shown by the trace view
//! - Response types rendered by the `harvest` binary
//! - Cross-cutting error types

pub mod catalog;
pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod price;
pub mod responses;

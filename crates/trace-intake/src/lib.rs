//! # trace-intake
//!
//! Inbound flows of Harvest Trace:
//! - [`SubmissionHandler`]: harvest form → shape checks → validation
//!   service → [`SubmissionResult`](trace_core::responses::SubmissionResult)
//! - [`record_event`]: distributor/retailer handling events
//! - [`simulate_scan`]: the stand-in for QR scanning

pub mod event;
pub mod form;
pub mod handler;
pub mod scan;

mod error;
mod rules;

pub use error::IntakeError;
pub use event::{EventForm, record_event};
pub use form::HarvestForm;
pub use handler::SubmissionHandler;
pub use scan::simulate_scan;

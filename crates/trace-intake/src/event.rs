//! Stakeholder handling events.
//!
//! A distributor or retailer describes where a batch is and what happened
//! to it; the event is stamped, given a fabricated transaction reference,
//! and returned. Nothing is written anywhere.

use std::time::Duration;

use chrono::Utc;
use garde::Validate;
use serde::{Deserialize, Serialize};
use trace_core::entities::SupplyChainEvent;
use trace_core::enums::StakeholderRole;
use trace_core::ids::new_transaction_ref;
use trace_core::price::Price;
use trace_core::responses::EventLogResponse;

use crate::error::IntakeError;
use crate::rules::{failed_fields, has_failed};

pub const LOCATION_REQUIRED: &str = "Current location is required.";
pub const STATUS_REQUIRED: &str = "Status update is required.";

/// Raw stakeholder event fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    #[garde(skip)]
    pub role: StakeholderRole,
    #[garde(length(min = 1))]
    pub location: String,
    #[garde(length(min = 1))]
    pub status: String,
    #[serde(default)]
    #[garde(skip)]
    pub price: Option<String>,
}

impl EventForm {
    /// Check the form and build the event it describes.
    ///
    /// # Errors
    ///
    /// Returns [`IntakeError::UnsupportedRole`] for farmers and consumers and
    /// [`IntakeError::InvalidEvent`] with every field error otherwise.
    pub fn check(&self, currency: &str) -> Result<SupplyChainEvent, IntakeError> {
        let event_type = match self.role {
            StakeholderRole::Distributor | StakeholderRole::Retailer => {
                self.role.recorded_event_type()
            }
            StakeholderRole::Farmer | StakeholderRole::Consumer => None,
        }
        .ok_or_else(|| IntakeError::UnsupportedRole(self.role.to_string()))?;

        let trimmed = Self {
            role: self.role,
            location: self.location.trim().to_string(),
            status: self.status.trim().to_string(),
            price: None,
        };
        let failed = failed_fields(&trimmed);

        let mut errors = Vec::new();
        if has_failed(&failed, "location") {
            errors.push(LOCATION_REQUIRED.to_string());
        }
        if has_failed(&failed, "status") {
            errors.push(STATUS_REQUIRED.to_string());
        }
        let price = match self.price.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => match Price::parse(raw, currency) {
                Ok(price) => Some(price),
                Err(error) => {
                    errors.push(error.to_string());
                    None
                }
            },
        };

        if !errors.is_empty() {
            return Err(IntakeError::InvalidEvent(errors));
        }

        Ok(SupplyChainEvent {
            event_type,
            title: trimmed.status,
            location: trimmed.location,
            timestamp: Utc::now(),
            actor: self.role.title().to_string(),
            price,
            transaction_ref: None,
        })
    }
}

/// Check, simulate the ledger round-trip, and stamp a transaction reference.
///
/// # Errors
///
/// See [`EventForm::check`]; also [`IntakeError::Core`] if no transaction
/// reference can be generated.
pub async fn record_event(
    produce_id: &str,
    form: &EventForm,
    currency: &str,
    latency: Duration,
) -> Result<EventLogResponse, IntakeError> {
    let mut event = form.check(currency)?;

    tokio::time::sleep(latency).await;
    event.transaction_ref = Some(new_transaction_ref()?);

    tracing::info!(
        produce_id,
        role = %form.role,
        event_type = %event.event_type,
        "handling event recorded"
    );

    Ok(EventLogResponse {
        produce_id: produce_id.to_string(),
        message: format!("The {} step has been successfully recorded.", form.role),
        event,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use trace_core::enums::EventType;

    fn form(role: StakeholderRole, price: Option<&str>) -> EventForm {
        EventForm {
            role,
            location: " Central Warehouse, Anytown ".into(),
            status: "In Transit".into(),
            price: price.map(str::to_string),
        }
    }

    #[test]
    fn distributor_records_transport() {
        let event = form(StakeholderRole::Distributor, Some("200.00"))
            .check("INR")
            .unwrap();
        assert_eq!(event.event_type, EventType::Transport);
        assert_eq!(event.location, "Central Warehouse, Anytown");
        assert_eq!(event.actor, "Distributor");
        assert_eq!(event.price.unwrap().amount_minor, 20_000);
    }

    #[test]
    fn retailer_records_retail_without_price() {
        let event = form(StakeholderRole::Retailer, Some("  ")).check("INR").unwrap();
        assert_eq!(event.event_type, EventType::Retail);
        assert!(event.price.is_none());
    }

    #[test]
    fn farmer_and_consumer_are_rejected() {
        for role in [StakeholderRole::Farmer, StakeholderRole::Consumer] {
            let err = form(role, None).check("INR").unwrap_err();
            assert!(matches!(err, IntakeError::UnsupportedRole(_)));
        }
    }

    #[test]
    fn field_errors_are_collected() {
        let bad = EventForm {
            role: StakeholderRole::Distributor,
            location: String::new(),
            status: " ".into(),
            price: Some("-5".into()),
        };
        match bad.check("INR").unwrap_err() {
            IntakeError::InvalidEvent(errors) => {
                assert_eq!(errors.len(), 3);
                assert_eq!(errors[0], LOCATION_REQUIRED);
                assert_eq!(errors[1], STATUS_REQUIRED);
                assert!(errors[2].contains("invalid price"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn sub_cent_price_is_rejected_before_recording() {
        let err = record_event(
            "prod-12345",
            &form(StakeholderRole::Distributor, Some("200.125")),
            "INR",
            Duration::from_millis(2000),
        )
        .await
        .unwrap_err();

        match err {
            IntakeError::InvalidEvent(errors) => {
                assert_eq!(errors, vec!["Validation error: invalid price '200.125'".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn record_event_stamps_transaction_ref() {
        let response = record_event(
            "prod-12345",
            &form(StakeholderRole::Retailer, None),
            "INR",
            Duration::from_millis(2000),
        )
        .await
        .unwrap();

        assert_eq!(response.produce_id, "prod-12345");
        assert_eq!(
            response.message,
            "The retailer step has been successfully recorded."
        );
        let tx = response.event.transaction_ref.unwrap();
        assert!(tx.starts_with("0x"));
        assert_eq!(tx.len(), 66);
    }
}

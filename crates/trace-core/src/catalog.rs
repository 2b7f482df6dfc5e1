//! Static sample data backing the trace view.
//!
//! Every trace lookup resolves to this one batch; there is no ledger to
//! query.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::entities::{Produce, SupplyChainEvent};
use crate::enums::EventType;

/// Id the consumer scan always resolves to.
pub const SAMPLE_PRODUCE_ID: &str = "prod-12345";

/// Trace page URL for a produce id: `{base}/{id}`.
#[must_use]
pub fn trace_url(base: &str, produce_id: &str) -> String {
    format!("{}/{produce_id}", base.trim_end_matches('/'))
}

/// The sample produce batch.
#[must_use]
pub fn sample_produce() -> Produce {
    Produce {
        id: SAMPLE_PRODUCE_ID.to_string(),
        name: "Organic Honeycrisp Apples".to_string(),
        harvest_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap_or_default(),
        image_url: "https://picsum.photos/seed/apple/800/800".to_string(),
        quality_metrics: vec![
            "Weight: 15kg batch".to_string(),
            "Size: Medium to Large".to_string(),
            "Color: Vibrant Red with Yellow hues".to_string(),
            "USDA Grade: U.S. Extra Fancy".to_string(),
        ],
    }
}

/// The sample batch's journey, oldest first.
#[must_use]
pub fn sample_trace() -> Vec<SupplyChainEvent> {
    vec![
        event(
            EventType::Origin,
            "Harvested",
            "Green Valley Orchards, WA",
            at(2024, 7, 15, 8, 0),
            "Farmer John",
        ),
        event(
            EventType::Processing,
            "Washed and Packed",
            "Green Valley Packing House, WA",
            at(2024, 7, 15, 14, 30),
            "Processor Unit 5",
        ),
        event(
            EventType::Transport,
            "In Transit",
            "Interstate 90, en route to Midwest",
            at(2024, 7, 16, 10, 0),
            "FreshHaul Logistics",
        ),
        event(
            EventType::Retail,
            "Received at Retail",
            "Fresh Market, Chicago, IL",
            at(2024, 7, 18, 9, 15),
            "Retail Manager Sarah",
        ),
        event(
            EventType::Purchase,
            "Purchased by Consumer",
            "Fresh Market, Chicago, IL",
            at(2024, 7, 19, 17, 45),
            "A Happy Customer",
        ),
    ]
}

fn event(
    event_type: EventType,
    title: &str,
    location: &str,
    timestamp: DateTime<Utc>,
    actor: &str,
) -> SupplyChainEvent {
    SupplyChainEvent {
        event_type,
        title: title.to_string(),
        location: location.to_string(),
        timestamp,
        actor: actor.to_string(),
        price: None,
        transaction_ref: None,
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

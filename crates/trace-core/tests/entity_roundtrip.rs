//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;
use trace_core::catalog::{sample_produce, sample_trace};
use trace_core::entities::*;
use trace_core::enums::EventType;
use trace_core::price::Price;
use trace_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

roundtrip_and_validate!(
    harvest_record_roundtrip,
    HarvestRecord,
    HarvestRecord {
        crop_name: "Rice".into(),
        harvest_date: NaiveDate::from_ymd_opt(2024, 7, 21).unwrap(),
        quality_metrics: "Grade A".into(),
    }
);

roundtrip_and_validate!(
    verdict_roundtrip,
    ValidationVerdict,
    ValidationVerdict::invalid(vec!["Date is not ISO".into(), "Missing color".into()])
);

roundtrip_and_validate!(produce_roundtrip, Produce, sample_produce());

roundtrip_and_validate!(
    priced_event_roundtrip,
    SupplyChainEvent,
    SupplyChainEvent {
        event_type: EventType::Transport,
        title: "In Transit".into(),
        location: "Central Warehouse, Anytown".into(),
        timestamp: Utc.with_ymd_and_hms(2024, 7, 16, 10, 0, 0).unwrap(),
        actor: "Distributor".into(),
        price: Some(Price::parse("200.00", "INR").unwrap()),
        transaction_ref: Some(format!("0x{}", "ab".repeat(32))),
    }
);

roundtrip_and_validate!(
    submission_success_roundtrip,
    SubmissionResult,
    SubmissionResult::succeeded("ok", "prod-1721520000000".into())
);

roundtrip_and_validate!(
    submission_failure_roundtrip,
    SubmissionResult,
    SubmissionResult::failed("bad", Some(vec!["Crop name must be at least 2 characters.".into()]))
);

roundtrip_and_validate!(
    trace_response_roundtrip,
    TraceResponse,
    TraceResponse {
        requested_id: "prod-999".into(),
        produce: sample_produce(),
        events: sample_trace(),
    }
);

#[test]
fn harvest_record_uses_prompt_field_names() {
    let record = HarvestRecord {
        crop_name: "Rice".into(),
        harvest_date: NaiveDate::from_ymd_opt(2024, 7, 21).unwrap(),
        quality_metrics: "Grade A".into(),
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["cropName"], "Rice");
    assert_eq!(value["harvestDate"], "2024-07-21");
    assert_eq!(value["qualityMetrics"], "Grade A");
}

#[test]
fn verdict_uses_wire_field_names() {
    let verdict: ValidationVerdict =
        serde_json::from_str(r#"{"isValid": true, "validationErrors": []}"#).unwrap();
    assert_eq!(verdict, ValidationVerdict::valid());
}

#[test]
fn event_type_field_is_named_type() {
    let value = serde_json::to_value(&sample_trace()[0]).unwrap();
    assert_eq!(value["type"], "origin");
    assert!(value.get("price").is_none());
    assert!(value.get("transactionRef").is_none());
}

#[test]
fn failed_submission_omits_produce_id() {
    let value = serde_json::to_value(SubmissionResult::failed("nope", None)).unwrap();
    assert_eq!(value["success"], false);
    assert!(value.get("produceId").is_none());
    assert!(value.get("errors").is_none());
}

#[test]
fn metric_entries_split_on_commas() {
    let record = HarvestRecord {
        crop_name: "Apples".into(),
        harvest_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        quality_metrics: "Weight: 15kg, , Size: Large ,Color: Red".into(),
    };
    let entries: Vec<&str> = record.metric_entries().collect();
    assert_eq!(entries, vec!["Weight: 15kg", "Size: Large", "Color: Red"]);
}

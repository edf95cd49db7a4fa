//! Wire JSON projection.
//!
//! A document is the `_aws` metadata block plus every flat value as a
//! top-level sibling key. Serialization is gated on validation: callers
//! either get a complete, schema-valid document or an error and no
//! output.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use crate::constants::METADATA_KEY;
use crate::error::ValidationError;
use crate::log::{MetricDirective, MetricLog};
use crate::validate;

/// The `_aws` block: the timestamp and the directive wrapped in the
/// always-single-element `CloudWatchMetrics` array.
#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Metadata<'a> {
    timestamp: i64,
    cloud_watch_metrics: [&'a MetricDirective; 1],
}

pub(crate) fn to_value(log: &MetricLog) -> Result<JsonValue, ValidationError> {
    validate::validate(log)?;

    let metadata = Metadata {
        timestamp: log.timestamp,
        cloud_watch_metrics: [&log.directive],
    };
    let metadata =
        serde_json::to_value(&metadata).expect("metadata has only string keys and finite numbers");

    // Metadata goes in first; a flat value under the reserved key is
    // dropped so it can never shadow the block.
    let mut doc = Map::with_capacity(log.values.len() + 1);
    doc.insert(METADATA_KEY.to_string(), metadata);
    for (key, value) in &log.values {
        if key == METADATA_KEY {
            continue;
        }
        doc.insert(key.clone(), value.into());
    }

    Ok(JsonValue::Object(doc))
}

pub(crate) fn to_json(log: &MetricLog) -> Result<String, ValidationError> {
    let doc = to_value(log)?;
    Ok(serde_json::to_string(&doc).expect("JsonValue is always valid JSON"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::ValidationError;
    use crate::log::MetricLog;
    use crate::unit::Unit;
    use crate::value::Value;

    fn minimal_log() -> MetricLog {
        let mut log = MetricLog::with_timestamp("N", 1_600_000_000_000);
        log.put_dimension("Service", "API")
            .add_dimension_set(["Service"])
            .put_metric("Count", 1, Unit::Count);
        log
    }

    #[test]
    fn test_minimal_valid_document() {
        let doc = minimal_log().to_value().unwrap();

        assert_eq!(doc["_aws"]["Timestamp"], json!(1_600_000_000_000_i64));
        assert_eq!(doc["_aws"]["CloudWatchMetrics"][0]["Namespace"], json!("N"));
        assert_eq!(
            doc["_aws"]["CloudWatchMetrics"][0]["Dimensions"],
            json!([["Service"]])
        );
        assert_eq!(
            doc["_aws"]["CloudWatchMetrics"][0]["Metrics"],
            json!([{"Name": "Count", "Unit": "Count"}])
        );
        assert_eq!(doc["Service"], json!("API"));
        assert_eq!(doc["Count"], json!(1));
    }

    #[test]
    fn test_exact_document_bytes() {
        let json = minimal_log().to_json().unwrap();
        assert_eq!(
            json,
            "{\"_aws\":{\"Timestamp\":1600000000000,\"CloudWatchMetrics\":\
             [{\"Namespace\":\"N\",\"Dimensions\":[[\"Service\"]],\
             \"Metrics\":[{\"Name\":\"Count\",\"Unit\":\"Count\"}]}]},\
             \"Count\":1,\"Service\":\"API\"}"
        );
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let log = minimal_log();
        assert_eq!(log.to_json().unwrap(), log.to_json().unwrap());
    }

    #[test]
    fn test_metadata_key_is_first() {
        let json = minimal_log().to_json().unwrap();
        assert!(json.starts_with("{\"_aws\":"));
    }

    #[test]
    fn test_flat_value_cannot_shadow_metadata() {
        let mut log = minimal_log();
        log.put_property("_aws", "spoofed");

        let doc = log.to_value().unwrap();
        assert!(doc["_aws"].is_object(), "metadata block must survive");
        assert_eq!(doc["_aws"]["Timestamp"], json!(1_600_000_000_000_i64));
    }

    #[test]
    fn test_validation_failure_emits_nothing() {
        let log = MetricLog::new("TestNamespace");
        let err = log.to_value().unwrap_err();
        assert_eq!(err, ValidationError::NoMetrics);
        assert_eq!(log.to_json().unwrap_err(), err);
    }

    #[test]
    fn test_storage_resolution_present_only_when_set() {
        let mut log = minimal_log();
        log.put_metric_with_resolution(
            "Fast",
            2,
            Unit::Count,
            crate::constants::StorageResolution::High,
        );

        let doc = log.to_value().unwrap();
        let metrics = doc["_aws"]["CloudWatchMetrics"][0]["Metrics"]
            .as_array()
            .unwrap();
        assert_eq!(metrics[0], json!({"Name": "Count", "Unit": "Count"}));
        assert_eq!(
            metrics[1],
            json!({"Name": "Fast", "Unit": "Count", "StorageResolution": 1})
        );
    }

    #[test]
    fn test_scalar_property_kinds_round_trip() {
        let mut log = minimal_log();
        log.put_property("IntValue", 123)
            .put_property("FloatValue", 123.456)
            .put_property("BoolValue", true)
            .put_property("StringValue", "test")
            .put_property("NullValue", Value::Null);

        let doc = log.to_value().unwrap();
        assert_eq!(doc["IntValue"], json!(123));
        assert_eq!(doc["FloatValue"], json!(123.456));
        assert_eq!(doc["BoolValue"], json!(true));
        assert_eq!(doc["StringValue"], json!("test"));
        assert_eq!(doc["NullValue"], json!(null));
    }

    #[test]
    fn test_dimension_overwrite_appears_in_document() {
        let mut log = minimal_log();
        log.put_dimension("K", "a").put_dimension("K", "b");
        let doc = log.to_value().unwrap();
        assert_eq!(doc["K"], json!("b"));
    }

    #[test]
    fn test_mutating_after_serialization_revalidates() {
        let mut log = minimal_log();
        assert!(log.to_json().is_ok());

        // A new dimension set without a value makes the same log invalid.
        log.add_dimension_set(["Missing"]);
        assert_eq!(
            log.to_json().unwrap_err(),
            ValidationError::DimensionValueMissing {
                name: "Missing".to_string()
            }
        );
    }
}

//! Metric log model.
//!
//! [`MetricLog`] holds one metrics directive (namespace, dimension sets,
//! metric definitions) plus the flat value map. Mutations never fail and
//! never validate; a log is checked as a whole when it is validated or
//! serialized, so intermediate states may be temporarily invalid (for
//! example referencing a dimension before its value is set).

use std::collections::BTreeMap;

use chrono::Utc;
use serde::Serialize;

use crate::builder::MetricLogBuilder;
use crate::error::ValidationError;
use crate::serialize;
use crate::validate;
use crate::value::Value;

/// One metric's metadata: name, unit, and storage resolution, as opposed
/// to its numeric value (which lives in the flat value map).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MetricDefinition {
    pub(crate) name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) storage_resolution: Option<i64>,
}

impl MetricDefinition {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    pub fn storage_resolution(&self) -> Option<i64> {
        self.storage_resolution
    }
}

/// One metrics directive: the namespace plus the dimension sets and metric
/// definitions that describe how the flat values roll up. Serializes as
/// the single `CloudWatchMetrics` element.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct MetricDirective {
    pub(crate) namespace: String,
    pub(crate) dimensions: Vec<Vec<String>>,
    pub(crate) metrics: Vec<MetricDefinition>,
}

/// An EMF metric log: one directive plus the flat map of dimension values,
/// metric values, and caller properties.
///
/// Dimension values, metric values, and properties share a single
/// namespace; the last write for a given key wins silently.
#[derive(Debug, Clone)]
pub struct MetricLog {
    pub(crate) directive: MetricDirective,
    pub(crate) timestamp: i64,
    pub(crate) values: BTreeMap<String, Value>,
}

impl MetricLog {
    /// Create a log for the given namespace, capturing the current time as
    /// the log's timestamp. The timestamp is fixed here; serialization
    /// never re-samples it.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self::with_timestamp(namespace, Utc::now().timestamp_millis())
    }

    /// Create a log with an explicit timestamp (epoch milliseconds), for
    /// backfill and deterministic tests.
    pub fn with_timestamp(namespace: impl Into<String>, timestamp_millis: i64) -> Self {
        Self {
            directive: MetricDirective {
                namespace: namespace.into(),
                dimensions: Vec::new(),
                metrics: Vec::new(),
            },
            timestamp: timestamp_millis,
            values: BTreeMap::new(),
        }
    }

    /// Fluent builder over this log. The builder aliases the log; it holds
    /// no state of its own.
    pub fn builder(&mut self) -> MetricLogBuilder<'_> {
        MetricLogBuilder::new(self)
    }

    /// Record a dimension value. Overwrites any previous value under the
    /// same key.
    pub fn put_dimension(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.values
            .insert(key.into(), Value::String(value.into()));
        self
    }

    /// Append a dimension set naming the dimensions metrics should be
    /// rolled up by. Sets are kept in call order; duplicates and empty
    /// sets are recorded as-is and only rejected at validation time.
    pub fn add_dimension_set<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.directive
            .dimensions
            .push(names.into_iter().map(Into::into).collect());
        self
    }

    /// Record a metric value and append its definition with the given
    /// unit. Calling this twice with the same name appends a second
    /// definition; definitions are never merged.
    pub fn put_metric(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        unit: impl Into<String>,
    ) -> &mut Self {
        let name = name.into();
        self.values.insert(name.clone(), value.into());
        self.directive.metrics.push(MetricDefinition {
            name,
            unit: Some(unit.into()),
            storage_resolution: None,
        });
        self
    }

    /// Like [`put_metric`](Self::put_metric), with an explicit storage
    /// resolution (1 for high resolution, 60 for standard).
    pub fn put_metric_with_resolution(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
        unit: impl Into<String>,
        resolution: impl Into<i64>,
    ) -> &mut Self {
        let name = name.into();
        self.values.insert(name.clone(), value.into());
        self.directive.metrics.push(MetricDefinition {
            name,
            unit: Some(unit.into()),
            storage_resolution: Some(resolution.into()),
        });
        self
    }

    /// Record a caller property. Properties appear as top-level keys in
    /// the document but are not reported as metrics or dimensions.
    pub fn put_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn namespace(&self) -> &str {
        &self.directive.namespace
    }

    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp
    }

    pub fn dimension_sets(&self) -> &[Vec<String>] {
        &self.directive.dimensions
    }

    pub fn metric_definitions(&self) -> &[MetricDefinition] {
        &self.directive.metrics
    }

    /// Current flat value for a key, whether it was recorded as a
    /// dimension, a metric, or a property.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Check the current state against the EMF structural rules, stopping
    /// at the first violated invariant.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate::validate(self)
    }

    /// Validate, then project the log to its wire JSON document. On
    /// failure the error is returned and nothing is emitted.
    pub fn to_value(&self) -> Result<serde_json::Value, ValidationError> {
        serialize::to_value(self)
    }

    /// Compact JSON string form of [`to_value`](Self::to_value).
    pub fn to_json(&self) -> Result<String, ValidationError> {
        serialize::to_json(self)
    }
}

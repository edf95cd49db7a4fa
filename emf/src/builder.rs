//! Fluent builder facade over [`MetricLog`].

use crate::log::MetricLog;
use crate::value::Value;

/// Chainable facade for assembling a whole log in one expression.
///
/// The builder aliases the log it was created from and buffers nothing:
/// each method performs exactly one model operation immediately and
/// returns the builder. `build` hands the log back.
///
/// ```
/// use emf::{MetricLog, Unit};
///
/// let mut log = MetricLog::new("ApplicationMetrics");
/// log.builder()
///     .dimension("Service", "API")
///     .dimension_set(["Service"])
///     .metric("Latency", 42.0, Unit::Milliseconds)
///     .property("RequestId", "req-123")
///     .build();
/// ```
#[derive(Debug)]
pub struct MetricLogBuilder<'a> {
    log: &'a mut MetricLog,
}

impl<'a> MetricLogBuilder<'a> {
    pub(crate) fn new(log: &'a mut MetricLog) -> Self {
        Self { log }
    }

    /// Record a dimension value.
    pub fn dimension(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.log.put_dimension(key, value);
        self
    }

    /// Append a dimension set.
    pub fn dimension_set<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.log.add_dimension_set(names);
        self
    }

    /// Record a metric value and definition.
    pub fn metric(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
        unit: impl Into<String>,
    ) -> Self {
        self.log.put_metric(name, value, unit);
        self
    }

    /// Record a metric with an explicit storage resolution.
    pub fn metric_with_resolution(
        self,
        name: impl Into<String>,
        value: impl Into<Value>,
        unit: impl Into<String>,
        resolution: impl Into<i64>,
    ) -> Self {
        self.log.put_metric_with_resolution(name, value, unit, resolution);
        self
    }

    /// Record a caller property.
    pub fn property(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.log.put_property(key, value);
        self
    }

    /// Finish the chain, returning the underlying log.
    pub fn build(self) -> &'a mut MetricLog {
        self.log
    }
}

//! Structural validation of a metric log snapshot.
//!
//! The checks run in a fixed order and stop at the first violation, so a
//! caller always sees one specific error rather than an aggregate. Only
//! final state matters; the order mutations happened in does not.

use crate::constants::{
    MAX_DIMENSION_NAME_LENGTH, MAX_DIMENSION_SET_SIZE, MAX_METRIC_NAME_LENGTH,
    MAX_NAMESPACE_LENGTH, MIN_DIMENSION_SETS, MIN_METRIC_NAME_LENGTH, MIN_NAMESPACE_LENGTH,
    STORAGE_RESOLUTION_HIGH, STORAGE_RESOLUTION_STANDARD,
};
use crate::error::ValidationError;
use crate::log::MetricLog;
use crate::unit::Unit;

/// Check `log` against the EMF structural rules, returning the first
/// violated invariant.
pub(crate) fn validate(log: &MetricLog) -> Result<(), ValidationError> {
    let directive = &log.directive;

    let namespace_len = directive.namespace.len();
    if namespace_len < MIN_NAMESPACE_LENGTH || namespace_len > MAX_NAMESPACE_LENGTH {
        return Err(ValidationError::NamespaceLength { len: namespace_len });
    }

    if directive.metrics.is_empty() {
        return Err(ValidationError::NoMetrics);
    }

    if directive.dimensions.len() < MIN_DIMENSION_SETS {
        return Err(ValidationError::NoDimensionSets);
    }

    for (index, set) in directive.dimensions.iter().enumerate() {
        if set.is_empty() {
            return Err(ValidationError::EmptyDimensionSet { index });
        }
    }

    for metric in &directive.metrics {
        let name_len = metric.name.len();
        if name_len < MIN_METRIC_NAME_LENGTH || name_len > MAX_METRIC_NAME_LENGTH {
            return Err(ValidationError::MetricNameLength {
                name: metric.name.clone(),
                len: name_len,
            });
        }

        if !log.values.contains_key(&metric.name) {
            return Err(ValidationError::MetricValueMissing {
                name: metric.name.clone(),
            });
        }

        if let Some(unit) = &metric.unit
            && Unit::try_from_str(unit).is_none()
        {
            return Err(ValidationError::InvalidUnit {
                metric: metric.name.clone(),
                unit: unit.clone(),
            });
        }

        if let Some(resolution) = metric.storage_resolution
            && resolution != STORAGE_RESOLUTION_STANDARD
            && resolution != STORAGE_RESOLUTION_HIGH
        {
            return Err(ValidationError::InvalidStorageResolution {
                metric: metric.name.clone(),
                resolution,
            });
        }
    }

    for (index, set) in directive.dimensions.iter().enumerate() {
        if set.len() > MAX_DIMENSION_SET_SIZE {
            return Err(ValidationError::DimensionSetTooLarge {
                index,
                len: set.len(),
            });
        }

        for name in set {
            if name.len() > MAX_DIMENSION_NAME_LENGTH {
                return Err(ValidationError::DimensionNameLength {
                    name: name.clone(),
                    len: name.len(),
                });
            }

            if !log.values.contains_key(name) {
                return Err(ValidationError::DimensionValueMissing { name: name.clone() });
            }
        }
    }

    Ok(())
}

//! Validation errors for metric logs.
//!
//! A single taxonomy: every invariant violation is a [`ValidationError`]
//! with a machine-distinguishable kind and a human-readable message.
//! Serialization is all-or-nothing, so this is also the only error a
//! failed serialization surfaces.

use thiserror::Error;

/// First invariant violated by a metric log, reported by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Namespace is empty or longer than 1024 bytes
    #[error("namespace must be between 1 and 1024 characters, got {len}")]
    NamespaceLength { len: usize },

    /// No metric definition was added
    #[error("at least one metric must be defined")]
    NoMetrics,

    /// No dimension set was added
    #[error("at least one dimension set must be defined")]
    NoDimensionSets,

    /// A dimension set contains no dimension names
    #[error("dimension set {index} is empty, must contain at least one dimension")]
    EmptyDimensionSet { index: usize },

    /// A metric name is empty or longer than 1024 bytes
    #[error("metric name '{name}' must be between 1 and 1024 characters, got {len}")]
    MetricNameLength { name: String, len: usize },

    /// A metric is defined but has no entry in the flat value map
    #[error("metric '{name}' is defined but no value is provided")]
    MetricValueMissing { name: String },

    /// A metric's unit is outside the fixed unit enumeration
    #[error("invalid unit '{unit}' for metric '{metric}'")]
    InvalidUnit { metric: String, unit: String },

    /// A metric's storage resolution is neither 1 nor 60
    #[error(
        "invalid storage resolution {resolution} for metric '{metric}', \
         must be either 60 (standard) or 1 (high resolution)"
    )]
    InvalidStorageResolution { metric: String, resolution: i64 },

    /// A dimension set has more than 30 entries
    #[error("dimension set {index} has {len} dimensions, exceeds maximum of 30")]
    DimensionSetTooLarge { index: usize, len: usize },

    /// A dimension name is longer than 250 bytes
    #[error("dimension name '{name}' exceeds maximum length of 250")]
    DimensionNameLength { name: String, len: usize },

    /// A dimension is referenced by a set but has no entry in the flat value map
    #[error("dimension '{name}' is referenced but no value is provided")]
    DimensionValueMissing { name: String },
}

impl ValidationError {
    /// Stable machine-readable kind slug for this violation.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NamespaceLength { .. } => "namespace-length",
            Self::NoMetrics => "no-metrics",
            Self::NoDimensionSets => "no-dimension-sets",
            Self::EmptyDimensionSet { .. } => "empty-dimension-set",
            Self::MetricNameLength { .. } => "metric-name-length",
            Self::MetricValueMissing { .. } => "metric-value-missing",
            Self::InvalidUnit { .. } => "invalid-unit",
            Self::InvalidStorageResolution { .. } => "invalid-storage-resolution",
            Self::DimensionSetTooLarge { .. } => "dimension-set-too-large",
            Self::DimensionNameLength { .. } => "dimension-name-length",
            Self::DimensionValueMissing { .. } => "dimension-value-missing",
        }
    }
}

//! Limits and reserved keys of the EMF wire format.

// =============================================================================
// Namespace
// =============================================================================

/// Minimum namespace length in bytes
pub const MIN_NAMESPACE_LENGTH: usize = 1;

/// Maximum namespace length in bytes
pub const MAX_NAMESPACE_LENGTH: usize = 1024;

// =============================================================================
// Metric Names
// =============================================================================

/// Minimum metric name length in bytes
pub const MIN_METRIC_NAME_LENGTH: usize = 1;

/// Maximum metric name length in bytes
pub const MAX_METRIC_NAME_LENGTH: usize = 1024;

// =============================================================================
// Dimensions
// =============================================================================

/// Minimum number of dimension sets in a directive
pub const MIN_DIMENSION_SETS: usize = 1;

/// Maximum number of dimension names in one dimension set
pub const MAX_DIMENSION_SET_SIZE: usize = 30;

/// Maximum dimension name length in bytes
pub const MAX_DIMENSION_NAME_LENGTH: usize = 250;

// =============================================================================
// Storage Resolution
// =============================================================================

/// High-resolution storage (sub-minute granularity)
pub const STORAGE_RESOLUTION_HIGH: i64 = 1;

/// Standard-resolution storage (one-minute granularity)
pub const STORAGE_RESOLUTION_STANDARD: i64 = 60;

/// Sampling granularity marker for a metric definition.
///
/// CloudWatch accepts exactly two values: 1 (high resolution) and
/// 60 (standard). Pass this anywhere a raw resolution integer is
/// expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageResolution {
    /// Sub-minute granularity (stored as 1)
    High,
    /// One-minute granularity (stored as 60)
    Standard,
}

impl StorageResolution {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::High => STORAGE_RESOLUTION_HIGH,
            Self::Standard => STORAGE_RESOLUTION_STANDARD,
        }
    }
}

impl From<StorageResolution> for i64 {
    fn from(resolution: StorageResolution) -> Self {
        resolution.as_i64()
    }
}

// =============================================================================
// Document Keys
// =============================================================================

/// Reserved top-level key holding the EMF metadata block
pub const METADATA_KEY: &str = "_aws";

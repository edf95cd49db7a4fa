//! # emf
//!
//! Build and validate **CloudWatch Embedded Metric Format** (EMF) log
//! documents: structured JSON log records that embed metric directives the
//! CloudWatch pipeline extracts into metrics.
//!
//! A [`MetricLog`] collects a namespace, dimension sets, metric
//! definitions, and a flat map of dimension values, metric values, and
//! free-form properties. Serializing validates the whole log against the
//! EMF structural rules first; either a complete, schema-valid document
//! comes back, or a [`ValidationError`] and no output.
//!
//! ## Quick Start
//!
//! ```
//! use emf::{MetricLog, Unit};
//!
//! let mut log = MetricLog::new("ApplicationMetrics");
//! log.put_dimension("Service", "API")
//!     .add_dimension_set(["Service"])
//!     .put_metric("Latency", 42.0, Unit::Milliseconds);
//!
//! let doc = log.to_json()?;
//! assert!(doc.starts_with("{\"_aws\":"));
//! # Ok::<(), emf::ValidationError>(())
//! ```
//!
//! Or assemble the whole log in one expression with the fluent
//! [`MetricLogBuilder`], obtained from [`MetricLog::builder`].
//!
//! This crate only builds documents; shipping them to CloudWatch (stdout,
//! an agent, the logs API) is the caller's concern.

pub mod builder;
pub mod constants;
pub mod error;
pub mod log;
pub mod unit;
pub mod value;

mod serialize;
mod validate;

pub use builder::MetricLogBuilder;
pub use constants::StorageResolution;
pub use error::ValidationError;
pub use log::{MetricDefinition, MetricLog};
pub use unit::Unit;
pub use value::Value;

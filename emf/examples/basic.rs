//! Assemble a metric log with the direct mutation API and print the
//! document.

use emf::{MetricLog, StorageResolution, Unit};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut log = MetricLog::new("MyApplicationMetrics");

    // Dimension values
    log.put_dimension("ServiceName", "UserService")
        .put_dimension("Environment", "Production");

    // Which dimensions metrics should be rolled up by
    log.add_dimension_set(["ServiceName"])
        .add_dimension_set(["ServiceName", "Environment"]);

    // Metrics
    log.put_metric("Latency", 42.0, Unit::Milliseconds)
        .put_metric("RequestCount", 1, Unit::Count)
        .put_metric_with_resolution(
            "DetailedLatency",
            12.3,
            Unit::Milliseconds,
            StorageResolution::High,
        );

    let doc = log.to_json()?;
    tracing::info!(namespace = log.namespace(), "generated EMF document");
    println!("{doc}");
    Ok(())
}

//! Assemble the same kind of metric log through the fluent builder.

use emf::{MetricLog, StorageResolution, Unit};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut log = MetricLog::new("MyApplicationMetrics");

    log.builder()
        .dimension("ServiceName", "UserService")
        .dimension("Environment", "Production")
        .dimension_set(["ServiceName"])
        .dimension_set(["ServiceName", "Environment"])
        .metric("Latency", 42.0, Unit::Milliseconds)
        .metric("RequestCount", 1, Unit::Count)
        .metric_with_resolution(
            "ApiLatency",
            12.3,
            Unit::Milliseconds,
            StorageResolution::High,
        )
        .property("RequestId", "12345")
        .build();

    let doc = log.to_json()?;
    tracing::info!(namespace = log.namespace(), "generated EMF document");
    println!("{doc}");
    Ok(())
}

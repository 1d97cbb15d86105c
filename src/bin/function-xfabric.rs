// Copyright (c) 2025 - Cowboy AI, Inc.
//! XFabric Function Service
//!
//! Answers `RunFunction` requests for XFabric composites over NATS.
//!
//! Run with: cargo run --bin function-xfabric
//!
//! Environment:
//! - NATS_URL (default: nats://localhost:4222)
//! - FUNCTION_SUBJECT (default: functions.xfabric.run)
//! - FUNCTION_QUEUE_GROUP (default: function-xfabric, empty to disable)
//! - FUNCTION_CLIENT_NAME (default: function-xfabric)
//! - NATS_CONNECT_TIMEOUT_SECS (default: 10)

use anyhow::{Context, Result};
use function_xfabric::{FunctionConfig, FunctionRunner, FunctionService, NatsClient};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting XFabric function");

    let config = FunctionConfig::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded:");
    info!("  - NATS servers: {:?}", config.servers);
    info!("  - Subject: {}", config.subject);
    info!("  - Queue group: {:?}", config.queue_group);

    let client = NatsClient::new(config.nats())
        .await
        .context("Failed to connect to NATS")?;

    let service = FunctionService::new(client, FunctionRunner::new(), &config);

    tokio::select! {
        result = service.serve() => {
            if let Err(e) = &result {
                error!(error = %e, "Function service stopped");
            }
            result.context("Function service failed")?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutting down");
        }
    }

    Ok(())
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::{error, info};

use ecr_secret_sync::config::Config;
use ecr_secret_sync::provider::EcrCredentialProvider;
use ecr_secret_sync::sync::SyncManager;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting ECR secret sync");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: region={}, interval={}s, secret={}",
        config.region,
        config.interval.as_secs(),
        config.secret_name
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    // In-cluster the client default is the service account namespace
    let namespace = match &config.secret_namespace {
        Some(namespace) => namespace.clone(),
        None => client.default_namespace().to_string(),
    };

    let provider = EcrCredentialProvider::new(&config.region, config.registry_id.clone()).await;
    let manager = SyncManager::new(provider, client, namespace, config);

    manager.run(shutdown_signal()).await?;

    info!("Sync loop stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}

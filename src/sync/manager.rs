// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval sync driver: fetch credentials, render, upsert, sleep.

use kube::Client;
use std::future::Future;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::error::Result;
use crate::kubernetes::{upsert_pull_secret, Applied};
use crate::provider::CredentialProvider;
use crate::pullsecret::render_pull_config;

/// Drives the sync loop against a credential provider and the secret store.
/// All collaborators are injected at construction so tests can substitute
/// them.
pub struct SyncManager<P> {
    provider: P,
    client: Client,
    namespace: String,
    config: Config,
}

impl<P: CredentialProvider> SyncManager<P> {
    pub fn new(provider: P, client: Client, namespace: String, config: Config) -> Self {
        Self {
            provider,
            client,
            namespace,
            config,
        }
    }

    /// Run the loop until `shutdown` completes.
    ///
    /// The first iteration starts immediately. Any iteration error is
    /// returned as-is and ends the loop; the caller decides to terminate the
    /// process. Shutdown is observed while sleeping between iterations.
    pub async fn run<F>(self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            let applied = self.sync_once().await?;
            info!(
                "{} pull secret {}/{}",
                applied, self.namespace, self.config.secret_name
            );

            tokio::select! {
                _ = sleep(self.config.interval) => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping sync loop");
                    return Ok(());
                }
            }
        }
    }

    /// One iteration: provider -> renderer -> secret store
    #[instrument(skip(self))]
    async fn sync_once(&self) -> Result<Applied> {
        let credentials = self.provider.get_authorization().await?;
        debug!("Fetched {} registry credential(s)", credentials.len());

        let payload = render_pull_config(&credentials, self.config.strip_scheme)?;

        upsert_pull_secret(
            &self.client,
            &self.namespace,
            &self.config.secret_name,
            payload,
            self.config.variant,
        )
        .await
    }
}

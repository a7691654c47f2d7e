// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! ECR-backed credential provider using the AWS SDK.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::types::AuthorizationData;
use aws_sdk_ecr::Client as EcrClient;
use tracing::{debug, instrument};

use crate::error::{Result, SyncError};
use crate::provider::{CredentialProvider, RegistryCredential};

/// Credential provider backed by the ECR `GetAuthorizationToken` API
pub struct EcrCredentialProvider {
    client: EcrClient,
    registry_id: Option<String>,
}

impl EcrCredentialProvider {
    /// Create a provider for the given region, optionally scoped to a single
    /// registry account. Credentials come from the SDK default chain, which
    /// covers IRSA on EKS as well as instance profiles and env variables.
    pub async fn new(region: &str, registry_id: Option<String>) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .load()
            .await;

        Self {
            client: EcrClient::new(&sdk_config),
            registry_id,
        }
    }
}

#[async_trait]
impl CredentialProvider for EcrCredentialProvider {
    #[instrument(skip(self))]
    async fn get_authorization(&self) -> Result<Vec<RegistryCredential>> {
        let mut request = self.client.get_authorization_token();
        if let Some(registry_id) = &self.registry_id {
            #[allow(deprecated)]
            {
                request = request.registry_ids(registry_id);
            }
        }

        let output = request
            .send()
            .await
            .map_err(|e| SyncError::Provider(DisplayErrorContext(e).to_string()))?;

        let credentials = credentials_from_authorization_data(output.authorization_data());
        debug!("ECR returned {} authorization record(s)", credentials.len());

        Ok(credentials)
    }
}

/// Map ECR authorization data to registry credentials, skipping records that
/// are missing either the endpoint or the token
fn credentials_from_authorization_data(data: &[AuthorizationData]) -> Vec<RegistryCredential> {
    data.iter()
        .filter_map(
            |auth| match (auth.proxy_endpoint(), auth.authorization_token()) {
                (Some(endpoint), Some(token)) => Some(RegistryCredential {
                    endpoint: endpoint.to_string(),
                    token: token.to_string(),
                }),
                _ => None,
            },
        )
        .collect()
}

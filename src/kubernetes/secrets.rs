// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Idempotent create-or-update of the managed pull secret.

use k8s_openapi::api::core::v1::Secret;
use k8s_openapi::ByteString;
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, instrument};

use crate::error::{Result, SyncError};
use crate::pullsecret::SecretVariant;

/// Outcome of an upsert against the secret store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Created,
    Updated,
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Applied::Created => write!(f, "Created"),
            Applied::Updated => write!(f, "Updated"),
        }
    }
}

/// Build the full managed secret body: the variant's secret type plus a
/// single data entry keyed by the variant
pub fn build_pull_secret(
    name: &str,
    namespace: &str,
    payload: Vec<u8>,
    variant: SecretVariant,
) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        type_: Some(variant.secret_type().to_string()),
        data: Some(BTreeMap::from([(
            variant.data_key().to_string(),
            ByteString(payload),
        )])),
        ..Default::default()
    }
}

/// Write the pull secret, updating it in place or creating it on first run.
///
/// The update runs first since the secret already exists in the steady state.
/// A 404 from the API server is the expected first-run signal and falls back
/// to create; every other failure is surfaced as-is. The whole body is
/// replaced on update, existing content is never merged.
#[instrument(skip(client, payload))]
pub async fn upsert_pull_secret(
    client: &Client,
    namespace: &str,
    name: &str,
    payload: Vec<u8>,
    variant: SecretVariant,
) -> Result<Applied> {
    let secrets: Api<Secret> = Api::namespaced(client.clone(), namespace);
    let secret = build_pull_secret(name, namespace, payload, variant);

    match secrets.replace(name, &PostParams::default(), &secret).await {
        Ok(_) => Ok(Applied::Updated),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Secret {}/{} not found, creating it", namespace, name);
            secrets
                .create(&PostParams::default(), &secret)
                .await
                .map_err(SyncError::Store)?;
            Ok(Applied::Created)
        }
        Err(e) => Err(SyncError::Store(e)),
    }
}

// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of registry credentials into the docker auth config payload.

use serde::Serialize;
use std::collections::BTreeMap;
use std::str::FromStr;

use crate::error::{Result, SyncError};
use crate::provider::RegistryCredential;

/// How the rendered payload is keyed inside the managed secret
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretVariant {
    /// Plain `config.json` entry in an Opaque secret
    Generic,
    /// `.dockerconfigjson` entry, usable directly as an imagePullSecret
    DockerConfigJson,
    /// Legacy `.dockercfg` entry
    DockerCfg,
}

impl SecretVariant {
    /// Data key the payload is stored under
    pub fn data_key(&self) -> &'static str {
        match self {
            SecretVariant::Generic => "config.json",
            SecretVariant::DockerConfigJson => ".dockerconfigjson",
            SecretVariant::DockerCfg => ".dockercfg",
        }
    }

    /// Kubernetes secret type matching this variant
    pub fn secret_type(&self) -> &'static str {
        match self {
            SecretVariant::Generic => "Opaque",
            SecretVariant::DockerConfigJson => "kubernetes.io/dockerconfigjson",
            SecretVariant::DockerCfg => "kubernetes.io/dockercfg",
        }
    }
}

impl FromStr for SecretVariant {
    type Err = SyncError;

    fn from_str(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "generic" => Ok(SecretVariant::Generic),
            "dockerconfigjson" => Ok(SecretVariant::DockerConfigJson),
            "dockercfg" => Ok(SecretVariant::DockerCfg),
            _ => Err(SyncError::Configuration(format!(
                "Unknown secret type '{}', expected generic, dockerconfigjson or dockercfg",
                raw
            ))),
        }
    }
}

#[derive(Serialize)]
struct PullConfig<'a> {
    auths: BTreeMap<&'a str, AuthEntry<'a>>,
}

#[derive(Serialize)]
struct AuthEntry<'a> {
    auth: &'a str,
}

/// Render the docker auth config for the first credential returned by the
/// provider. The token is embedded verbatim; it already is the base64
/// `user:password` form ECR hands out. Output is byte-stable for identical
/// input.
///
/// With `strip_scheme` set, the registry key is the endpoint with everything
/// up to and including the first `"://"` removed; endpoints without a
/// separator are used verbatim.
pub fn render_pull_config(
    credentials: &[RegistryCredential],
    strip_scheme: bool,
) -> Result<Vec<u8>> {
    let Some(credential) = credentials.first() else {
        return Err(SyncError::NoCredentialData);
    };

    let key = if strip_scheme {
        credential
            .endpoint
            .split_once("://")
            .map_or(credential.endpoint.as_str(), |(_, host)| host)
    } else {
        credential.endpoint.as_str()
    };

    let config = PullConfig {
        auths: BTreeMap::from([(
            key,
            AuthEntry {
                auth: &credential.token,
            },
        )]),
    };

    Ok(serde_json::to_vec(&config)?)
}

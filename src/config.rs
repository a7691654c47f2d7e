// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{bail, Context, Result};
use std::env;
use std::time::Duration;

use crate::constants::{env_vars, DEFAULT_INTERVAL_SECS, DEFAULT_SECRET_NAME};
use crate::pullsecret::SecretVariant;

/// Operator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// AWS region the ECR authorization token is requested from
    pub region: String,
    /// Time to sleep between refresh iterations
    pub interval: Duration,
    /// Optional AWS account id narrowing the token scope
    pub registry_id: Option<String>,
    /// Name of the managed pull secret
    pub secret_name: String,
    /// Target namespace; falls back to the client default when not set
    pub secret_namespace: Option<String>,
    /// How the rendered payload is keyed inside the secret
    pub variant: SecretVariant,
    /// Strip the URI scheme from the registry key in the payload
    pub strip_scheme: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let region = env::var(env_vars::REGION)
            .with_context(|| format!("{} environment variable not set", env_vars::REGION))?;
        if region.is_empty() {
            bail!("{} must not be empty", env_vars::REGION);
        }

        let interval_secs = match env::var(env_vars::INTERVAL) {
            Ok(raw) => raw.parse::<u64>().with_context(|| {
                format!(
                    "{} is not a valid number of seconds: {}",
                    env_vars::INTERVAL,
                    raw
                )
            })?,
            Err(_) => DEFAULT_INTERVAL_SECS,
        };
        if interval_secs == 0 {
            bail!("{} must be strictly positive", env_vars::INTERVAL);
        }

        let variant = match env::var(env_vars::SECRET_TYPE) {
            Ok(raw) => raw.parse::<SecretVariant>()?,
            Err(_) => SecretVariant::Generic,
        };

        let strip_scheme = match env::var(env_vars::STRIP_SCHEME) {
            Ok(raw) => raw.parse::<bool>().with_context(|| {
                format!(
                    "{} must be \"true\" or \"false\", got: {}",
                    env_vars::STRIP_SCHEME,
                    raw
                )
            })?,
            Err(_) => false,
        };

        Ok(Config {
            region,
            interval: Duration::from_secs(interval_secs),
            registry_id: env::var(env_vars::REGISTRY_ID)
                .ok()
                .filter(|v| !v.is_empty()),
            secret_name: env::var(env_vars::SECRET_NAME)
                .unwrap_or_else(|_| DEFAULT_SECRET_NAME.to_string()),
            secret_namespace: env::var(env_vars::SECRET_NAMESPACE)
                .ok()
                .filter(|v| !v.is_empty()),
            variant,
            strip_scheme,
        })
    }
}

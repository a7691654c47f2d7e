// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Registry credential providers.

use async_trait::async_trait;

use crate::error::Result;

pub mod ecr;

pub use ecr::EcrCredentialProvider;

/// A short-lived credential for a container registry.
/// Produced fresh each iteration and never persisted.
#[derive(Debug, Clone)]
pub struct RegistryCredential {
    /// Registry endpoint the token authenticates against
    pub endpoint: String,
    /// Opaque base64 `user:password` token
    pub token: String,
}

/// Source of registry credentials, invoked once per sync iteration
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Fetch a fresh set of registry credentials
    async fn get_authorization(&self) -> Result<Vec<RegistryCredential>>;
}

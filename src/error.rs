// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Registry returned no authorization data")]
    NoCredentialData,

    #[error("Credential provider error: {0}")]
    Provider(String),

    #[error("Failed to encode pull secret payload: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Secret store error: {0}")]
    Store(#[from] kube::Error),
}

pub type Result<T> = std::result::Result<T, SyncError>;

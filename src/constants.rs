// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env_vars {
    /// AWS region the authorization token is requested from (required)
    pub const REGION: &str = "AWS_REGION";
    /// Refresh interval in seconds
    pub const INTERVAL: &str = "SYNC_INTERVAL";
    /// AWS account id narrowing the token scope (optional)
    pub const REGISTRY_ID: &str = "REGISTRY_ID";
    /// Name of the managed pull secret
    pub const SECRET_NAME: &str = "SECRET_NAME";
    /// Namespace the pull secret is written to (optional)
    pub const SECRET_NAMESPACE: &str = "SECRET_NAMESPACE";
    /// Secret type variant: generic, dockerconfigjson or dockercfg
    pub const SECRET_TYPE: &str = "SECRET_TYPE";
    /// When "true", strips the URI scheme from the registry key
    pub const STRIP_SCHEME: &str = "STRIP_ENDPOINT_SCHEME";
}

/// Name of the managed pull secret when SECRET_NAME is not set
pub const DEFAULT_SECRET_NAME: &str = "ecr-auth-cfg";

/// Refresh interval in seconds when SYNC_INTERVAL is not set
pub const DEFAULT_INTERVAL_SECS: u64 = 1200;

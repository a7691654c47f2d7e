// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for the managed pull secret.

pub mod secrets;

pub use secrets::{build_pull_secret, upsert_pull_secret, Applied};

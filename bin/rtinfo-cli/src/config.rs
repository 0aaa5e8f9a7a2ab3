// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! CLI configuration loaded from `rtinfo.toml`.
//!
//! ```toml
//! usage_socket = "/run/resourced/usage.sock"
//! poll_interval_ms = 500
//!
//! [store]
//! "memory/wifi/state" = 2
//! "memory/sysman/battery_charge_now" = 1
//! "db/menu_widget/language" = "en_US.UTF-8"
//! ```
//!
//! The `[store]` table seeds the in-memory configuration store with
//! backend keys. TOML booleans are stored as 0/1 integers, since that
//! is how the platform backends encode their flags.

use anyhow::Context;
use config_store::{MemoryStore, StoreValue};
use std::path::{Path, PathBuf};

/// Looked for in the working directory when no `--config` is given.
const DEFAULT_CONFIG: &str = "rtinfo.toml";

#[derive(Debug, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Socket of the per-process usage daemon.
    pub usage_socket: Option<PathBuf>,

    /// Re-read interval for `watch`, in milliseconds.
    pub poll_interval_ms: u64,

    /// Backend-key seed values for the in-memory store.
    pub store: toml::Table,

    /// Where this configuration was loaded from, if anywhere.
    #[serde(skip)]
    pub path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            usage_socket: None,
            poll_interval_ms: 500,
            store: toml::Table::new(),
            path: None,
        }
    }
}

impl CliConfig {
    /// Loads the configuration from `path`, or from `rtinfo.toml` in
    /// the working directory, or falls back to the defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None if Path::new(DEFAULT_CONFIG).exists() => PathBuf::from(DEFAULT_CONFIG),
            None => {
                tracing::debug!("no configuration file, using defaults");
                return Ok(Self::default());
            }
        };
        Self::read_from(&path)
    }

    /// Loads the configuration from an explicit file.
    pub fn read_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read configuration at {}", path.display()))?;
        let mut config: CliConfig = toml::from_str(&content)
            .with_context(|| format!("cannot parse configuration at {}", path.display()))?;
        config.path = Some(path.to_path_buf());
        tracing::debug!(
            "loaded configuration from {} ({} seed value(s))",
            path.display(),
            config.store.len()
        );
        Ok(config)
    }

    /// Writes the `[store]` seed values into `store`.
    pub fn seed(&self, store: &MemoryStore) {
        for (key, value) in &self.store {
            match to_store_value(value) {
                Some(v) => store.set(key, v),
                None => tracing::warn!("ignoring unsupported seed value for '{key}'"),
            }
        }
    }
}

fn to_store_value(value: &toml::Value) -> Option<StoreValue> {
    match value {
        toml::Value::Integer(v) => Some(StoreValue::Int(*v)),
        toml::Value::Boolean(v) => Some(StoreValue::Int(i64::from(*v))),
        toml::Value::Float(v) => Some(StoreValue::Double(*v)),
        toml::Value::String(v) => Some(StoreValue::Text(v.clone())),
        _ => None,
    }
}

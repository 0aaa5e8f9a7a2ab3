// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod get;
pub mod system;
pub mod usage;
pub mod watch;

use tracing_subscriber::EnvFilter;

/// Initialises tracing from the `-v` count; `RUST_LOG` wins when set.
pub fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the registry and its backing store from the configuration.
pub(crate) fn build_registry(
    config: &crate::config::CliConfig,
) -> (
    std::sync::Arc<config_store::MemoryStore>,
    runtime_info::Registry,
) {
    let store = std::sync::Arc::new(config_store::MemoryStore::new());
    config.seed(&store);
    let registry = runtime_info::Registry::with_store(
        std::sync::Arc::clone(&store) as std::sync::Arc<dyn config_store::ConfigStore>
    );
    (store, registry)
}

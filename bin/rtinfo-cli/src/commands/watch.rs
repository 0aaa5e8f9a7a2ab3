// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rtinfo watch` command: report runtime-state changes as they happen.
//!
//! Without a platform settings daemon there is no external writer, so
//! the command doubles as a live demo: every poll interval it re-reads
//! the configuration file and writes the `[store]` seed values back
//! into the store. Editing the file while `watch` runs drives the real
//! notification pipeline, and the registry's dedup keeps the unchanged
//! rewrites silent.

use crate::config::CliConfig;
use runtime_info::{InfoError, InfoKey};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub fn execute(
    config: &CliConfig,
    keys: Vec<InfoKey>,
    count: Option<usize>,
) -> anyhow::Result<()> {
    let Some(config_path) = config.path.clone() else {
        anyhow::bail!("watch needs a configuration file to poll (see --config)");
    };
    let (store, registry) = super::build_registry(config);
    let registry = Arc::new(registry);

    let keys = if keys.is_empty() {
        registry.keys().collect::<Vec<_>>()
    } else {
        keys
    };

    let reports = Arc::new(AtomicUsize::new(0));
    let mut watched = 0usize;
    for &key in &keys {
        let reg = Arc::clone(&registry);
        let reports = Arc::clone(&reports);
        match registry.set_changed_cb(key, move |key| {
            reports.fetch_add(1, Ordering::SeqCst);
            match reg.get_value(key) {
                Ok(value) => println!("   {key:<34} -> {value}"),
                Err(err) => println!("   {key:<34} -> unreadable: {err}"),
            }
        }) {
            Ok(()) => watched += 1,
            Err(InfoError::NotSupported(_)) => {
                tracing::info!("'{key}' not supported here, skipping");
            }
            Err(err) => return Err(err.into()),
        }
    }
    if watched == 0 {
        anyhow::bail!("none of the requested items can be watched");
    }

    println!(
        "  Watching {watched} item(s), polling {} every {} ms (Ctrl-C to stop)",
        config_path.display(),
        config.poll_interval_ms
    );

    loop {
        std::thread::sleep(Duration::from_millis(config.poll_interval_ms));
        match CliConfig::read_from(&config_path) {
            // Rewriting every seed value is fine: the registry only
            // reports the ones that actually changed.
            Ok(fresh) => fresh.seed(&store),
            Err(err) => tracing::warn!("skipping poll: {err:#}"),
        }
        if let Some(limit) = count {
            if reports.load(Ordering::SeqCst) >= limit {
                return Ok(());
            }
        }
    }
}

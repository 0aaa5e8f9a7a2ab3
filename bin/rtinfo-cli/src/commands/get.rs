// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rtinfo get` command: read one or all runtime-state items.

use crate::config::CliConfig;
use runtime_info::{InfoError, InfoKey};

pub fn execute(
    config: &CliConfig,
    key: Option<InfoKey>,
    all: bool,
    json: bool,
) -> anyhow::Result<()> {
    let (_store, registry) = super::build_registry(config);

    if let Some(key) = key {
        let value = registry.get_value(key)?;
        if json {
            println!(
                "{}",
                serde_json::json!({ "key": key.to_string(), "value": value })
            );
        } else {
            println!("{value}");
        }
        return Ok(());
    }
    if !all {
        anyhow::bail!("pass an item key or --all");
    }

    if json {
        let mut items = serde_json::Map::new();
        for key in registry.keys().collect::<Vec<_>>() {
            let entry = match registry.get_value(key) {
                Ok(value) => serde_json::to_value(value)?,
                Err(InfoError::NotSupported(_)) => serde_json::Value::Null,
                Err(err) => serde_json::json!({ "error": err.to_string() }),
            };
            items.insert(key.to_string(), entry);
        }
        println!("{}", serde_json::Value::Object(items));
        return Ok(());
    }

    println!("  Runtime state");
    for key in registry.keys().collect::<Vec<_>>() {
        match registry.get_value(key) {
            Ok(value) => println!("   {key:<34} {value}"),
            Err(InfoError::NotSupported(_)) => println!("   {key:<34} (not supported)"),
            Err(err) => println!("   {key:<34} error: {err}"),
        }
    }
    Ok(())
}

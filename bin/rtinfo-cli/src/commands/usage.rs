// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rtinfo usage` command: per-process statistics via the resource
//! daemon.

use crate::config::CliConfig;
use usage_service::DaemonClient;

pub fn execute(config: &CliConfig, pids: &[i32], cpu: bool, json: bool) -> anyhow::Result<()> {
    let client = match &config.usage_socket {
        Some(socket) => DaemonClient::with_socket(socket),
        None => DaemonClient::new(),
    };

    if cpu {
        let records = runtime_info::process_cpu(&client, pids)?;
        if json {
            println!("{}", serde_json::to_string(&records)?);
            return Ok(());
        }
        println!("  Per-process CPU time (clock ticks)");
        println!("   {:>8} {:>12} {:>12}", "pid", "utime", "stime");
        for (pid, rec) in pids.iter().zip(&records) {
            println!("   {:>8} {:>12} {:>12}", pid, rec.utime, rec.stime);
        }
        return Ok(());
    }

    let records = runtime_info::process_memory(&client, pids)?;
    if json {
        println!("{}", serde_json::to_string(&records)?);
        return Ok(());
    }
    println!("  Per-process memory (KiB)");
    println!(
        "   {:>8} {:>10} {:>10} {:>10} {:>12} {:>12}",
        "pid", "vsz", "rss", "pss", "priv dirty", "priv clean"
    );
    for (pid, rec) in pids.iter().zip(&records) {
        println!(
            "   {:>8} {:>10} {:>10} {:>10} {:>12} {:>12}",
            pid, rec.vsz, rec.rss, rec.pss, rec.private_dirty, rec.private_clean
        );
    }
    Ok(())
}

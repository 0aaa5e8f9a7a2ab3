// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `rtinfo system` command: system-wide memory and CPU panel.

pub fn execute(json: bool) -> anyhow::Result<()> {
    let memory = runtime_info::system_memory()?;
    let cpu = runtime_info::cpu_usage()?;

    if json {
        println!(
            "{}",
            serde_json::json!({ "memory": memory, "cpu": cpu })
        );
        return Ok(());
    }

    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              rtinfo · System Usage                  ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── Memory ─────────────────────────────────────────────────
    let pct = memory.utilisation() * 100.0;
    let bar = usage_bar(memory.utilisation());
    println!("  Memory");
    println!("   Total:        {} MB", memory.total_mb());
    println!("   Free:         {} MB", memory.free_mb());
    println!("   Used:         {} MB ({:.1}%)  {bar}", memory.used_kib / 1024, pct);
    println!("   Cache:        {} MB", memory.cache_kib / 1024);
    println!("   Swap:         {} MB", memory.swap_kib / 1024);
    println!();

    // ── CPU ────────────────────────────────────────────────────
    let bar = usage_bar(cpu.busy() / 100.0);
    println!("  CPU (share of uptime)");
    println!("   User:         {:5.1}%", cpu.user);
    println!("   Nice:         {:5.1}%", cpu.nice);
    println!("   System:       {:5.1}%", cpu.system);
    println!("   I/O wait:     {:5.1}%", cpu.iowait);
    println!("   Busy:         {:5.1}%  {bar}", cpu.busy());

    Ok(())
}

/// Creates a visual usage bar (0.0-1.0 scale).
fn usage_bar(ratio: f64) -> String {
    let filled = (ratio * 20.0).round() as usize;
    let filled = filled.min(20);
    let empty = 20 - filled;
    let symbol = if ratio >= 0.9 {
        "#"
    } else if ratio >= 0.7 {
        "="
    } else {
        "-"
    };
    format!("[{}{}]", symbol.repeat(filled), ".".repeat(empty))
}

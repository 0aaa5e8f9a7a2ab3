// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # rtinfo
//!
//! Command-line interface for the device runtime-information facade.
//!
//! ## Usage
//! ```bash
//! # Read one item (or all of them)
//! rtinfo get wifi-status
//! rtinfo get --all
//!
//! # Watch items for changes, driven by the seed file
//! rtinfo watch battery-charging gps-status
//!
//! # System-wide memory and CPU panel
//! rtinfo system
//!
//! # Per-process usage via the resource daemon
//! rtinfo usage 1 1234
//! ```
//!
//! Item values come from an in-memory store seeded from the `[store]`
//! table of the configuration file, so the tool runs on any Linux host
//! without a platform settings daemon.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use runtime_info::InfoKey;

#[derive(Parser)]
#[command(
    name = "rtinfo",
    about = "Query and watch device runtime state",
    version,
    author
)]
struct Cli {
    /// Path to a TOML configuration file (socket path, poll interval,
    /// store seed values).
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Read runtime-state items.
    Get {
        /// Item key (e.g. "wifi-status"); see `get --all` for the list.
        key: Option<InfoKey>,

        /// Read every known item.
        #[arg(long, conflicts_with = "key")]
        all: bool,

        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Watch items and report every value change.
    Watch {
        /// Item keys to watch (default: all).
        keys: Vec<InfoKey>,

        /// Stop after this many change reports.
        #[arg(long)]
        count: Option<usize>,
    },

    /// Display system-wide memory and CPU usage.
    System {
        /// Print as JSON instead of a panel.
        #[arg(long)]
        json: bool,
    },

    /// Query per-process usage from the resource daemon.
    Usage {
        /// Process ids to query.
        #[arg(required = true)]
        pids: Vec<i32>,

        /// Query CPU time instead of memory.
        #[arg(long)]
        cpu: bool,

        /// Print as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);
    let config = config::CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Get { key, all, json } => commands::get::execute(&config, key, all, json),
        Commands::Watch { keys, count } => commands::watch::execute(&config, keys, count),
        Commands::System { json } => commands::system::execute(json),
        Commands::Usage { pids, cpu, json } => commands::usage::execute(&config, &pids, cpu, json),
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Aggregate CPU usage via `/proc/stat`.
//!
//! Scans for the summary `cpu ` line (the one without a core index) and
//! reports user/nice/system/iowait as percentages of the total tick
//! window `user + nice + system + idle + iowait + irq + softirq`.
//!
//! These are cumulative-since-boot shares, matching what the platform
//! API has always exposed. Callers wanting instantaneous load should
//! sample twice and diff.

use crate::ProcError;
use std::path::Path;

/// Default path to the kernel CPU statistics file.
const STAT_PATH: &str = "/proc/stat";

/// Aggregate CPU usage, each field a percentage in `[0.0, 100.0]`.
#[derive(Debug, Clone, serde::Serialize)]
pub struct CpuUsage {
    /// Time running un-niced user processes.
    pub user: f64,
    /// Time running kernel code.
    pub system: f64,
    /// Time running niced user processes.
    pub nice: f64,
    /// Time waiting for I/O completion.
    pub iowait: f64,
}

impl CpuUsage {
    /// Reads current CPU usage from `/proc/stat`.
    pub fn read() -> Result<Self, ProcError> {
        Self::read_from(Path::new(STAT_PATH))
    }

    /// Reads CPU usage from a specific file (for testing).
    pub(crate) fn read_from(path: &Path) -> Result<Self, ProcError> {
        let content = std::fs::read_to_string(path).map_err(|e| ProcError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses the content of a `/proc/stat`-formatted string.
    ///
    /// Requires the aggregate `cpu ` line with at least seven tick
    /// counters; per-core `cpuN` lines and everything else are skipped.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, ProcError> {
        for line in content.lines() {
            let Some(rest) = line.strip_prefix("cpu ") else {
                continue;
            };

            let ticks: Vec<u64> = rest
                .split_whitespace()
                .take(7)
                .map(|s| s.parse::<u64>())
                .collect::<Result<_, _>>()
                .map_err(|_| ProcError::ParseError {
                    path: source_path.display().to_string(),
                    detail: format!("non-numeric tick counter in '{line}'"),
                })?;

            if ticks.len() < 7 {
                return Err(ProcError::ParseError {
                    path: source_path.display().to_string(),
                    detail: format!("expected 7 tick counters, got {}", ticks.len()),
                });
            }

            let (user, nice, system, iowait) = (ticks[0], ticks[1], ticks[2], ticks[4]);
            let window: u64 = ticks.iter().sum();
            if window == 0 {
                return Err(ProcError::ParseError {
                    path: source_path.display().to_string(),
                    detail: "zero tick window".to_string(),
                });
            }

            return Ok(Self {
                user: percentage(user, window),
                system: percentage(system, window),
                nice: percentage(nice, window),
                iowait: percentage(iowait, window),
            });
        }

        Err(ProcError::ParseError {
            path: source_path.display().to_string(),
            detail: "aggregate 'cpu ' line not found".to_string(),
        })
    }

    /// Returns the busy share (everything but idle time we account for).
    pub fn busy(&self) -> f64 {
        self.user + self.system + self.nice + self.iowait
    }
}

fn percentage(ticks: u64, window: u64) -> f64 {
    ticks as f64 * 100.0 / window as f64
}

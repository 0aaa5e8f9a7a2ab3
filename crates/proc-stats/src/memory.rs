// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System memory statistics via `/proc/meminfo`.
//!
//! Parses the total, free, cached, and swap figures. The kernel reports
//! values in kB (units of 1000 bytes); this module converts them to KiB
//! (units of 1024 bytes) via `v * 1024 / 1000`, which is the convention
//! the rest of the facade exposes.

use crate::ProcError;
use std::path::Path;

/// Default path to the kernel memory info file.
const MEMINFO_PATH: &str = "/proc/meminfo";

/// System memory usage, all fields in KiB.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MemoryUsage {
    /// Total physical memory.
    pub total_kib: u64,
    /// Used memory (`total - free`, saturating at zero).
    pub used_kib: u64,
    /// Free memory as reported by the kernel.
    pub free_kib: u64,
    /// Page-cache memory.
    pub cache_kib: u64,
    /// Swap in use (`SwapTotal - SwapFree`, saturating at zero).
    pub swap_kib: u64,
}

impl MemoryUsage {
    /// Reads current memory statistics from `/proc/meminfo`.
    pub fn read() -> Result<Self, ProcError> {
        Self::read_from(Path::new(MEMINFO_PATH))
    }

    /// Reads memory statistics from a specific file (for testing).
    pub(crate) fn read_from(path: &Path) -> Result<Self, ProcError> {
        let content = std::fs::read_to_string(path).map_err(|e| ProcError::ReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parses the content of a `/proc/meminfo`-formatted string.
    ///
    /// `MemTotal` and `MemFree` must be present; `Cached`, `SwapTotal`,
    /// and `SwapFree` default to 0 when absent. Unknown lines are skipped.
    pub(crate) fn parse(content: &str, source_path: &Path) -> Result<Self, ProcError> {
        let mut total_kb: Option<u64> = None;
        let mut free_kb: Option<u64> = None;
        let mut cached_kb: u64 = 0;
        let mut swap_total_kb: u64 = 0;
        let mut swap_free_kb: u64 = 0;

        for line in content.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 2 {
                continue;
            }
            match parts[0] {
                "MemTotal:" => total_kb = Some(parse_kb_value(parts[1], source_path)?),
                "MemFree:" => free_kb = Some(parse_kb_value(parts[1], source_path)?),
                "Cached:" => cached_kb = parse_kb_value(parts[1], source_path)?,
                "SwapTotal:" => swap_total_kb = parse_kb_value(parts[1], source_path)?,
                "SwapFree:" => swap_free_kb = parse_kb_value(parts[1], source_path)?,
                _ => {}
            }
        }

        let total_kb = total_kb.ok_or_else(|| ProcError::ParseError {
            path: source_path.display().to_string(),
            detail: "MemTotal not found".to_string(),
        })?;
        let free_kb = free_kb.ok_or_else(|| ProcError::ParseError {
            path: source_path.display().to_string(),
            detail: "MemFree not found".to_string(),
        })?;

        let total_kib = kb_to_kib(total_kb);
        let free_kib = kb_to_kib(free_kb);

        Ok(Self {
            total_kib,
            used_kib: total_kib.saturating_sub(free_kib),
            free_kib,
            cache_kib: kb_to_kib(cached_kb),
            swap_kib: kb_to_kib(swap_total_kb.saturating_sub(swap_free_kb)),
        })
    }

    /// Returns the memory utilisation as a fraction in `[0.0, 1.0]`.
    pub fn utilisation(&self) -> f64 {
        if self.total_kib == 0 {
            return 0.0;
        }
        self.used_kib as f64 / self.total_kib as f64
    }

    /// Returns total memory in megabytes.
    pub fn total_mb(&self) -> u64 {
        self.total_kib / 1024
    }

    /// Returns free memory in megabytes.
    pub fn free_mb(&self) -> u64 {
        self.free_kib / 1024
    }
}

/// Converts a kernel `kB` figure (units of 1000 bytes) to KiB.
fn kb_to_kib(kb: u64) -> u64 {
    kb * 1024 / 1000
}

/// Parses a numeric string from `/proc/meminfo` (values are in kB).
fn parse_kb_value(s: &str, source_path: &Path) -> Result<u64, ProcError> {
    s.parse::<u64>().map_err(|_| ProcError::ParseError {
        path: source_path.display().to_string(),
        detail: format!("expected integer kB value, got '{s}'"),
    })
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! System-wide statistics entry points.

use crate::InfoError;
use proc_stats::{CpuUsage, MemoryUsage};

/// Reads current system memory usage from the proc filesystem.
pub fn system_memory() -> Result<MemoryUsage, InfoError> {
    Ok(MemoryUsage::read()?)
}

/// Reads the cumulative CPU usage split from the proc filesystem.
pub fn cpu_usage() -> Result<CpuUsage, InfoError> {
    Ok(CpuUsage::read()?)
}

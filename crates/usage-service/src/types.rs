// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Record shapes returned by the resource daemon.

/// Memory statistics for one process, all fields in KiB.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessMemory {
    /// Virtual memory size.
    pub vsz: u64,
    /// Resident set size.
    pub rss: u64,
    /// Proportional set size.
    pub pss: u64,
    /// Unmodified pages mapped by other processes too.
    pub shared_clean: u64,
    /// Modified pages mapped by other processes too.
    pub shared_dirty: u64,
    /// Unmodified pages private to this process.
    pub private_clean: u64,
    /// Modified pages private to this process.
    pub private_dirty: u64,
}

/// CPU time consumed by one process, in clock ticks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProcessCpu {
    /// Time scheduled in user mode.
    pub utime: u64,
    /// Time scheduled in kernel mode.
    pub stime: u64,
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`UsageService`] trait.

use crate::{ProcessCpu, ProcessMemory, UsageError};

/// Request/reply access to per-process usage statistics.
///
/// Implementations must be atomic per batch: on success the returned
/// vector is parallel to `pids` (same length, same order); any failure
/// fails the whole call.
pub trait UsageService: Send + Sync {
    /// Queries memory statistics for each pid in `pids`.
    fn process_memory(&self, pids: &[i32]) -> Result<Vec<ProcessMemory>, UsageError>;

    /// Queries cumulative CPU time for each pid in `pids`.
    fn process_cpu(&self, pids: &[i32]) -> Result<Vec<ProcessCpu>, UsageError>;
}

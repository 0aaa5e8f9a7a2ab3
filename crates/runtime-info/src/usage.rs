// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-process statistics entry points.
//!
//! Thin validation in front of a [`UsageService`]: the pid batch must
//! be non-empty and every pid positive before the daemon is consulted.

use crate::InfoError;
use usage_service::{ProcessCpu, ProcessMemory, UsageService};

/// Queries memory statistics for each pid in `pids`.
pub fn process_memory(
    service: &dyn UsageService,
    pids: &[i32],
) -> Result<Vec<ProcessMemory>, InfoError> {
    validate_pids(pids)?;
    Ok(service.process_memory(pids)?)
}

/// Queries cumulative CPU time for each pid in `pids`.
pub fn process_cpu(
    service: &dyn UsageService,
    pids: &[i32],
) -> Result<Vec<ProcessCpu>, InfoError> {
    validate_pids(pids)?;
    Ok(service.process_cpu(pids)?)
}

fn validate_pids(pids: &[i32]) -> Result<(), InfoError> {
    if pids.is_empty() {
        return Err(InfoError::InvalidParameter("empty pid list".to_string()));
    }
    if let Some(bad) = pids.iter().find(|&&pid| pid <= 0) {
        return Err(InfoError::InvalidParameter(format!("invalid pid {bad}")));
    }
    Ok(())
}

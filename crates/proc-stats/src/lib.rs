// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # proc-stats
//!
//! Reads system-wide memory and CPU statistics from the Linux proc
//! filesystem on behalf of the runtime-information facade.
//!
//! # Sources
//! - **Memory** — `/proc/meminfo`: total, free, cached, and swap figures.
//! - **CPU** — `/proc/stat`: the aggregate `cpu ` line, reported as the
//!   share of the tick window spent in user/nice/system/iowait.
//!
//! Both readers are synchronous whole-file reads with a line-oriented
//! scan, tolerant of unknown or extra lines. Parsing is split from I/O
//! (`parse` vs. `read`) so the formats can be unit-tested from string
//! fixtures.
//!
//! # Example
//! ```no_run
//! let mem = proc_stats::MemoryUsage::read().expect("failed to read /proc/meminfo");
//! println!("used: {} KiB of {} KiB", mem.used_kib, mem.total_kib);
//! ```

mod cpu;
mod error;
mod memory;

pub use cpu::CpuUsage;
pub use error::ProcError;
pub use memory::MemoryUsage;

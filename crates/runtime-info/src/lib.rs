// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # runtime-info
//!
//! A query-and-subscribe facade over device runtime state: connectivity,
//! location, locale, and hardware items, each addressed by an
//! [`InfoKey`] and carrying one declared [`DataType`].
//!
//! # Architecture
//! - **Binding table** — each key is bound at construction to an
//!   [`InfoSource`], the capability seam toward the backend. The
//!   standard table binds every key to the configuration store.
//! - **Registry** — typed getters plus change subscription with
//!   value-level dedup: a backend write that does not change the
//!   observed value never reaches the caller's callback.
//! - **Statistics** — system-wide memory/CPU read from the proc
//!   filesystem, per-process usage fetched from a resource daemon.
//!
//! # Example
//! ```
//! use runtime_info::{InfoKey, Registry};
//! use std::sync::Arc;
//!
//! let store = Arc::new(config_store::MemoryStore::new());
//! store.set_int("memory/sysman/battery_charge_now", 1);
//!
//! let registry = Registry::with_store(store);
//! assert!(registry.get_bool(InfoKey::BatteryCharging).unwrap());
//! ```

mod binding;
mod error;
mod key;
mod registry;
pub mod sources;
mod system;
mod usage;
mod value;

pub use binding::{BindingEntry, InfoSource, Notifier};
pub use error::InfoError;
pub use key::{AudioJackStatus, DataType, GpsStatus, InfoKey, Weekday, WifiStatus};
pub use registry::{ChangeCallback, Registry};
pub use system::{cpu_usage, system_memory};
pub use usage::{process_cpu, process_memory};
pub use value::InfoValue;

// Statistics types are part of the public surface.
pub use proc_stats::{CpuUsage, MemoryUsage};
pub use usage_service::{ProcessCpu, ProcessMemory};

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # config-store
//!
//! The boundary to the platform's key-value configuration store: typed
//! reads over an opaque string key, plus change notification for any key.
//!
//! The facade in `runtime-info` never talks to a concrete store type —
//! it holds an `Arc<dyn ConfigStore>`, so a platform daemon client, a
//! file-backed store, or the in-process [`MemoryStore`] can be swapped
//! in without touching the registry. `MemoryStore` is what the tests and
//! the CLI use.
//!
//! # Watch registrations
//! Watches are identified by `(key, token)`. Several watchers may
//! observe the same backend key concurrently (e.g. three information
//! items all derived from the ear-jack state), each under its own
//! token. Registering the same `(key, token)` pair again replaces the
//! previous handler.

mod error;
mod memory;
mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{ChangeHandler, ConfigStore, StoreValue, WatchToken};

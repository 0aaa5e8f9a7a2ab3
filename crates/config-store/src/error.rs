// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the configuration store boundary.

/// Errors reported by a [`ConfigStore`](crate::ConfigStore) implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The key does not exist in the store.
    ///
    /// The facade treats this as "item not supported on this platform",
    /// distinct from a transient read failure.
    #[error("key '{key}' not present in store")]
    MissingKey { key: String },

    /// The key exists but holds a value of a different type.
    #[error("key '{key}' does not hold a {expected} value")]
    TypeMismatch {
        key: String,
        expected: &'static str,
    },

    /// The store itself could not be reached or read.
    #[error("store i/o failure for '{key}': {detail}")]
    Io { key: String, detail: String },
}

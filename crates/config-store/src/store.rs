// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The [`ConfigStore`] trait: the contract the registry requires from
//! the underlying configuration backend.

use crate::StoreError;

/// Identifies one watch registration on a backend key.
///
/// Tokens let independent watchers observe the same key side by side;
/// the registry uses one token per information item.
pub type WatchToken = u64;

/// Invoked by the store when a watched key changes.
///
/// The handler receives no value — observers are expected to re-read
/// through their normal getter path, which is what keeps the change
/// pipeline single-sourced.
pub type ChangeHandler = Box<dyn Fn() + Send + Sync>;

/// A value as held by the store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreValue {
    Int(i64),
    Bool(bool),
    Double(f64),
    Text(String),
}

/// Typed get/watch access to a key-value configuration backend.
///
/// Keys are opaque strings owned by the platform (`"db/system/earjack"`
/// and the like); they are never the same namespace as the facade's
/// information-item keys.
pub trait ConfigStore: Send + Sync {
    /// Reads an integer value.
    fn get_int(&self, key: &str) -> Result<i64, StoreError>;

    /// Reads a boolean value.
    fn get_bool(&self, key: &str) -> Result<bool, StoreError>;

    /// Reads a floating-point value.
    fn get_double(&self, key: &str) -> Result<f64, StoreError>;

    /// Reads a string value.
    fn get_string(&self, key: &str) -> Result<String, StoreError>;

    /// Arms a change watch on `key` under `token`.
    ///
    /// Re-registering the same `(key, token)` replaces the handler.
    fn notify_on_change(
        &self,
        key: &str,
        token: WatchToken,
        handler: ChangeHandler,
    ) -> Result<(), StoreError>;

    /// Disarms the watch registered under `(key, token)`.
    ///
    /// Unknown registrations are ignored; disarming is idempotent.
    fn stop_notify(&self, key: &str, token: WatchToken);
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The seam between the registry and the backends that serve it.
//!
//! Each runtime-state item is bound to one [`InfoSource`]. A source must
//! be able to read its item; whether it can also deliver change
//! notifications is per binding, exactly like the original table where
//! some items carried no subscribe entry.

use crate::key::{DataType, InfoKey};
use crate::registry::RegistryInner;
use crate::value::InfoValue;
use crate::InfoError;
use std::sync::Weak;

/// Read (and optionally watch) capability for one runtime-state item.
pub trait InfoSource: Send + Sync {
    /// Reads the current value of the bound item.
    fn get(&self) -> Result<InfoValue, InfoError>;

    /// Arms backend change notification for the bound item.
    ///
    /// The source must hold on to `notifier` and invoke it on every
    /// backend change until [`unsubscribe`](InfoSource::unsubscribe) —
    /// but never from within this call itself, as arming runs under the
    /// key's subscription lock. Read-only bindings keep the default,
    /// which reports the item as unwatchable.
    fn subscribe(&self, notifier: Notifier) -> Result<(), InfoError> {
        let _ = notifier;
        Err(InfoError::Io("item has no change notification".to_string()))
    }

    /// Disarms backend change notification for the bound item.
    fn unsubscribe(&self) -> Result<(), InfoError> {
        Err(InfoError::Io("item has no change notification".to_string()))
    }
}

/// One row of the registry's binding table.
pub struct BindingEntry {
    pub key: InfoKey,
    pub data_type: DataType,
    pub source: Box<dyn InfoSource>,
}

impl BindingEntry {
    /// Binds `key` to `source`, taking the declared type from the key.
    pub fn new(key: InfoKey, source: Box<dyn InfoSource>) -> Self {
        Self {
            key,
            data_type: key.data_type(),
            source,
        }
    }
}

/// Handle a source invokes to report a backend change.
///
/// Holds the registry weakly, so a source outliving its registry (or a
/// backend thread firing during teardown) degrades to a logged no-op
/// instead of keeping the registry alive.
#[derive(Clone)]
pub struct Notifier {
    key: InfoKey,
    registry: Weak<RegistryInner>,
}

impl Notifier {
    pub(crate) fn new(key: InfoKey, registry: Weak<RegistryInner>) -> Self {
        Self { key, registry }
    }

    /// The key this notifier reports for.
    pub fn key(&self) -> InfoKey {
        self.key
    }

    /// Reports one backend change for the bound key.
    pub fn notify(&self) {
        match self.registry.upgrade() {
            Some(registry) => registry.dispatch(self.key),
            None => tracing::debug!("change for '{}' after registry teardown", self.key),
        }
    }
}

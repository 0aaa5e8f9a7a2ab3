// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! In-process [`ConfigStore`] implementation.
//!
//! Backs the integration tests and the CLI, and serves as the store on
//! hosts without a platform settings daemon. Writes fire the change
//! handlers registered for the written key synchronously, on the
//! writer's thread — which is exactly the cooperative delivery model
//! the registry is specified against.

use crate::{ChangeHandler, ConfigStore, StoreError, StoreValue, WatchToken};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type SharedHandler = Arc<dyn Fn() + Send + Sync>;

/// A mutable in-memory key-value store with change notification.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, StoreValue>>,
    watches: Mutex<HashMap<(String, WatchToken), SharedHandler>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes an integer value and notifies watchers of `key`.
    pub fn set_int(&self, key: &str, value: i64) {
        self.set(key, StoreValue::Int(value));
    }

    /// Writes a boolean value and notifies watchers of `key`.
    pub fn set_bool(&self, key: &str, value: bool) {
        self.set(key, StoreValue::Bool(value));
    }

    /// Writes a floating-point value and notifies watchers of `key`.
    pub fn set_double(&self, key: &str, value: f64) {
        self.set(key, StoreValue::Double(value));
    }

    /// Writes a string value and notifies watchers of `key`.
    pub fn set_string(&self, key: &str, value: &str) {
        self.set(key, StoreValue::Text(value.to_string()));
    }

    /// Removes a key. Watchers are notified; subsequent reads fail with
    /// [`StoreError::MissingKey`].
    pub fn remove(&self, key: &str) {
        self.values
            .lock()
            .expect("store value table poisoned")
            .remove(key);
        self.fire(key);
    }

    /// Writes a value and notifies watchers, even when the value is
    /// unchanged — dedup is the subscriber's job, not the store's.
    pub fn set(&self, key: &str, value: StoreValue) {
        self.values
            .lock()
            .expect("store value table poisoned")
            .insert(key.to_string(), value);
        self.fire(key);
    }

    fn fire(&self, key: &str) {
        // Snapshot matching handlers before invoking, so a handler that
        // re-enters the store cannot deadlock on the watch table.
        let handlers: Vec<SharedHandler> = {
            let watches = self.watches.lock().expect("store watch table poisoned");
            watches
                .iter()
                .filter(|((k, _), _)| k == key)
                .map(|(_, h)| Arc::clone(h))
                .collect()
        };

        tracing::debug!("store key '{key}' written, {} watcher(s)", handlers.len());
        for handler in handlers {
            handler();
        }
    }

    fn value(&self, key: &str) -> Result<StoreValue, StoreError> {
        self.values
            .lock()
            .expect("store value table poisoned")
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::MissingKey {
                key: key.to_string(),
            })
    }
}

impl ConfigStore for MemoryStore {
    fn get_int(&self, key: &str) -> Result<i64, StoreError> {
        match self.value(key)? {
            StoreValue::Int(v) => Ok(v),
            _ => Err(StoreError::TypeMismatch {
                key: key.to_string(),
                expected: "int",
            }),
        }
    }

    fn get_bool(&self, key: &str) -> Result<bool, StoreError> {
        match self.value(key)? {
            StoreValue::Bool(v) => Ok(v),
            _ => Err(StoreError::TypeMismatch {
                key: key.to_string(),
                expected: "bool",
            }),
        }
    }

    fn get_double(&self, key: &str) -> Result<f64, StoreError> {
        match self.value(key)? {
            StoreValue::Double(v) => Ok(v),
            _ => Err(StoreError::TypeMismatch {
                key: key.to_string(),
                expected: "double",
            }),
        }
    }

    fn get_string(&self, key: &str) -> Result<String, StoreError> {
        match self.value(key)? {
            StoreValue::Text(v) => Ok(v),
            _ => Err(StoreError::TypeMismatch {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }

    fn notify_on_change(
        &self,
        key: &str,
        token: WatchToken,
        handler: ChangeHandler,
    ) -> Result<(), StoreError> {
        self.watches
            .lock()
            .expect("store watch table poisoned")
            .insert((key.to_string(), token), Arc::from(handler));
        Ok(())
    }

    fn stop_notify(&self, key: &str, token: WatchToken) {
        self.watches
            .lock()
            .expect("store watch table poisoned")
            .remove(&(key.to_string(), token));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_typed_get_and_set() {
        let store = MemoryStore::new();
        store.set_int("a", 7);
        store.set_bool("b", true);
        store.set_double("c", 1.5);
        store.set_string("d", "hello");

        assert_eq!(store.get_int("a").unwrap(), 7);
        assert!(store.get_bool("b").unwrap());
        assert!((store.get_double("c").unwrap() - 1.5).abs() < f64::EPSILON);
        assert_eq!(store.get_string("d").unwrap(), "hello");
    }

    #[test]
    fn test_missing_key() {
        let store = MemoryStore::new();
        assert!(matches!(
            store.get_int("nope"),
            Err(StoreError::MissingKey { .. })
        ));
    }

    #[test]
    fn test_type_mismatch() {
        let store = MemoryStore::new();
        store.set_bool("flag", true);
        assert!(matches!(
            store.get_int("flag"),
            Err(StoreError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_watch_fires_on_set() {
        let store = MemoryStore::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        store
            .notify_on_change("k", 1, Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        store.set_int("k", 1);
        store.set_int("k", 1); // same value still fires — store does not dedup
        store.set_int("other", 9); // different key must not fire
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_multiple_tokens_same_key() {
        let store = MemoryStore::new();
        let hits = Arc::new(AtomicUsize::new(0));
        for token in 0..3 {
            let h = Arc::clone(&hits);
            store
                .notify_on_change("shared", token, Box::new(move || {
                    h.fetch_add(1, Ordering::SeqCst);
                }))
                .unwrap();
        }

        store.set_int("shared", 42);
        assert_eq!(hits.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_reregister_replaces_handler() {
        let store = MemoryStore::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let f = Arc::clone(&first);
        store
            .notify_on_change("k", 1, Box::new(move || {
                f.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();
        let s = Arc::clone(&second);
        store
            .notify_on_change("k", 1, Box::new(move || {
                s.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        store.set_int("k", 1);
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stop_notify_idempotent() {
        let store = MemoryStore::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let h = Arc::clone(&hits);
        store
            .notify_on_change("k", 1, Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        store.stop_notify("k", 1);
        store.stop_notify("k", 1); // second disarm is a no-op
        store.set_int("k", 5);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_remove_notifies_and_read_fails() {
        let store = MemoryStore::new();
        let hits = Arc::new(AtomicUsize::new(0));
        store.set_int("k", 1);
        let h = Arc::clone(&hits);
        store
            .notify_on_change("k", 1, Box::new(move || {
                h.fetch_add(1, Ordering::SeqCst);
            }))
            .unwrap();

        store.remove("k");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(matches!(
            store.get_int("k"),
            Err(StoreError::MissingKey { .. })
        ));
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The registry: typed reads and change subscription over the binding
//! table.
//!
//! # Dispatch model
//! Backend notifications are edge-triggered on the observed value. On
//! every notification the registry re-reads the item through the same
//! path the getters use, compares against the last value delivered to
//! the callback, and fires only when they differ. The per-key slot lock
//! is held across that read/compare/fire sequence, which gives
//! `unset_changed_cb` a hard guarantee: once it returns, the callback
//! will not run again. The price is a rule for callbacks: reads are
//! fine, but a callback must not register or unregister subscriptions
//! for its own key.
//!
//! # Subscription lifecycle
//! The backend is armed once, on the first callback registration for a
//! key, and stays armed until `unset_changed_cb`. Registering again
//! merely replaces the callback (last writer wins) and clears the
//! delivered-value snapshot, so the new callback sees the next
//! notification even if the value has not moved since the old one.

use crate::binding::{BindingEntry, Notifier};
use crate::key::{DataType, InfoKey};
use crate::sources;
use crate::value::InfoValue;
use crate::InfoError;
use config_store::ConfigStore;
use std::sync::{Arc, Mutex};

/// Invoked when a watched item's value changes.
pub type ChangeCallback = Box<dyn FnMut(InfoKey) + Send>;

struct SubscriptionState {
    callback: ChangeCallback,
    /// Last value delivered through the callback. `None` until the
    /// first delivery, and again after a callback replacement.
    last_value: Option<InfoValue>,
}

pub(crate) struct RegistryInner {
    bindings: Vec<BindingEntry>,
    /// Parallel to `bindings`.
    slots: Vec<Mutex<Option<SubscriptionState>>>,
}

/// Query-and-subscribe access to the bound runtime-state items.
///
/// The binding table is fixed at construction; all interior state is
/// behind per-key locks, so a `Registry` is shared freely across
/// threads.
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Registry {
    /// Builds a registry over an explicit binding table.
    pub fn new(bindings: Vec<BindingEntry>) -> Self {
        let slots = bindings.iter().map(|_| Mutex::new(None)).collect();
        Self {
            inner: Arc::new(RegistryInner { bindings, slots }),
        }
    }

    /// Builds a registry with the standard platform bindings over `store`.
    pub fn with_store(store: Arc<dyn ConfigStore>) -> Self {
        Self::new(sources::bindings(store))
    }

    /// The keys this registry can serve, in binding order.
    pub fn keys(&self) -> impl Iterator<Item = InfoKey> + '_ {
        self.inner.bindings.iter().map(|b| b.key)
    }

    /// Reads `key` as whatever type it declares.
    pub fn get_value(&self, key: InfoKey) -> Result<InfoValue, InfoError> {
        let idx = self.inner.index_of(key)?;
        self.inner.read(idx)
    }

    /// Reads an integer item.
    pub fn get_int(&self, key: InfoKey) -> Result<i64, InfoError> {
        match self.get_typed(key, DataType::Integer)? {
            InfoValue::Integer(v) => Ok(v),
            other => Err(type_confusion(key, other)),
        }
    }

    /// Reads a boolean item.
    pub fn get_bool(&self, key: InfoKey) -> Result<bool, InfoError> {
        match self.get_typed(key, DataType::Boolean)? {
            InfoValue::Boolean(v) => Ok(v),
            other => Err(type_confusion(key, other)),
        }
    }

    /// Reads a floating-point item.
    pub fn get_double(&self, key: InfoKey) -> Result<f64, InfoError> {
        match self.get_typed(key, DataType::Double)? {
            InfoValue::Double(v) => Ok(v),
            other => Err(type_confusion(key, other)),
        }
    }

    /// Reads a string item.
    pub fn get_string(&self, key: InfoKey) -> Result<String, InfoError> {
        match self.get_typed(key, DataType::String)? {
            InfoValue::Text(v) => Ok(v),
            other => Err(type_confusion(key, other)),
        }
    }

    /// Registers `callback` to run when `key`'s value changes.
    ///
    /// The first registration for a key arms the backend; if arming
    /// fails the registration is rolled back and the error returned.
    /// Subsequent registrations replace the callback without touching
    /// the backend.
    pub fn set_changed_cb(
        &self,
        key: InfoKey,
        callback: impl FnMut(InfoKey) + Send + 'static,
    ) -> Result<(), InfoError> {
        let idx = self.inner.index_of(key)?;
        let mut slot = self.inner.slots[idx].lock().expect("subscription slot poisoned");

        if let Some(state) = slot.as_mut() {
            state.callback = Box::new(callback);
            state.last_value = None;
            tracing::debug!("replaced change callback for '{key}'");
            return Ok(());
        }

        *slot = Some(SubscriptionState {
            callback: Box::new(callback),
            last_value: None,
        });
        let notifier = Notifier::new(key, Arc::downgrade(&self.inner));
        if let Err(err) = self.inner.bindings[idx].source.subscribe(notifier) {
            // Arming failed: leave no half-registered subscription behind.
            *slot = None;
            return Err(err);
        }
        tracing::debug!("armed change notification for '{key}'");
        Ok(())
    }

    /// Drops any registered callback for `key` and disarms the backend.
    ///
    /// Succeeds even when no callback was registered. Once this
    /// returns, the dropped callback is guaranteed not to run again.
    pub fn unset_changed_cb(&self, key: InfoKey) -> Result<(), InfoError> {
        let idx = self.inner.index_of(key)?;
        // Taking the slot also waits out any in-flight dispatch.
        let had_subscription = self.inner.slots[idx]
            .lock()
            .expect("subscription slot poisoned")
            .take()
            .is_some();

        self.inner.bindings[idx].source.unsubscribe()?;
        if had_subscription {
            tracing::debug!("disarmed change notification for '{key}'");
        }
        Ok(())
    }

    fn get_typed(&self, key: InfoKey, requested: DataType) -> Result<InfoValue, InfoError> {
        let idx = self.inner.index_of(key)?;
        let declared = self.inner.bindings[idx].data_type;
        if declared != requested {
            return Err(InfoError::InvalidParameter(format!(
                "'{key}' is {declared}, not {requested}"
            )));
        }
        self.inner.read(idx)
    }
}

impl RegistryInner {
    fn index_of(&self, key: InfoKey) -> Result<usize, InfoError> {
        self.bindings
            .iter()
            .position(|b| b.key == key)
            .ok_or_else(|| InfoError::InvalidParameter(format!("'{key}' is not bound")))
    }

    /// Reads binding `idx` and checks the source honoured its declared
    /// type. A source returning the wrong variant is a backend fault,
    /// not a caller mistake.
    fn read(&self, idx: usize) -> Result<InfoValue, InfoError> {
        let entry = &self.bindings[idx];
        let value = entry.source.get()?;
        if value.data_type() != entry.data_type {
            return Err(InfoError::Io(format!(
                "backend returned {} for {} item '{}'",
                value.data_type(),
                entry.data_type,
                entry.key
            )));
        }
        Ok(value)
    }

    /// Handles one backend notification for `key`.
    pub(crate) fn dispatch(&self, key: InfoKey) {
        let Ok(idx) = self.index_of(key) else {
            tracing::warn!("change notification for unbound key '{key}'");
            return;
        };
        let mut slot = self.slots[idx].lock().expect("subscription slot poisoned");
        let Some(state) = slot.as_mut() else {
            // Disarm raced with a late backend event.
            tracing::debug!("change for '{key}' with no subscriber");
            return;
        };

        let current = match self.read(idx) {
            Ok(value) => value,
            Err(err) => {
                // Swallowed: the subscription stays armed and the next
                // notification gets another chance.
                tracing::warn!("re-read of '{key}' after change failed: {err}");
                return;
            }
        };

        if state.last_value.as_ref() == Some(&current) {
            tracing::debug!("suppressed unchanged notification for '{key}'");
            return;
        }
        state.last_value = Some(current);
        (state.callback)(key);
    }
}

fn type_confusion(key: InfoKey, got: InfoValue) -> InfoError {
    InfoError::Io(format!(
        "backend returned {} for item '{key}'",
        got.data_type()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::InfoSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scriptable source: settable value, arm/disarm counters, and a
    /// captured notifier for driving dispatch by hand.
    #[derive(Default)]
    struct Script {
        value: Mutex<Option<InfoValue>>,
        notifier: Mutex<Option<Notifier>>,
        subscribes: AtomicUsize,
        unsubscribes: AtomicUsize,
        refuse_arm: bool,
    }

    impl Script {
        fn with_value(value: InfoValue) -> Arc<Self> {
            let script = Self::default();
            *script.value.lock().unwrap() = Some(value);
            Arc::new(script)
        }

        fn set(&self, value: InfoValue) {
            *self.value.lock().unwrap() = Some(value);
        }

        fn fail_reads(&self) {
            *self.value.lock().unwrap() = None;
        }

        fn fire(&self) {
            let notifier = self.notifier.lock().unwrap().clone().unwrap();
            notifier.notify();
        }
    }

    struct ScriptSource(Arc<Script>);

    impl InfoSource for ScriptSource {
        fn get(&self) -> Result<InfoValue, InfoError> {
            self.0
                .value
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| InfoError::Io("scripted read failure".to_string()))
        }

        fn subscribe(&self, notifier: Notifier) -> Result<(), InfoError> {
            if self.0.refuse_arm {
                return Err(InfoError::Io("scripted arm failure".to_string()));
            }
            self.0.subscribes.fetch_add(1, Ordering::SeqCst);
            *self.0.notifier.lock().unwrap() = Some(notifier);
            Ok(())
        }

        fn unsubscribe(&self) -> Result<(), InfoError> {
            self.0.unsubscribes.fetch_add(1, Ordering::SeqCst);
            *self.0.notifier.lock().unwrap() = None;
            Ok(())
        }
    }

    /// Read-only source with the default (unwatchable) subscribe.
    struct FixedSource(InfoValue);

    impl InfoSource for FixedSource {
        fn get(&self) -> Result<InfoValue, InfoError> {
            Ok(self.0.clone())
        }
    }

    fn registry_over(key: InfoKey, script: &Arc<Script>) -> Registry {
        Registry::new(vec![BindingEntry::new(
            key,
            Box::new(ScriptSource(Arc::clone(script))),
        )])
    }

    fn counting_cb(hits: &Arc<AtomicUsize>) -> impl FnMut(InfoKey) + Send + 'static {
        let hits = Arc::clone(hits);
        move |_| {
            hits.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_unknown_key_is_invalid_parameter() {
        let script = Script::with_value(InfoValue::Boolean(true));
        let registry = registry_over(InfoKey::BatteryCharging, &script);

        assert!(matches!(
            registry.get_bool(InfoKey::WifiStatus),
            Err(InfoError::InvalidParameter(_))
        ));
        assert!(matches!(
            registry.set_changed_cb(InfoKey::WifiStatus, |_| {}),
            Err(InfoError::InvalidParameter(_))
        ));
        assert!(matches!(
            registry.unset_changed_cb(InfoKey::WifiStatus),
            Err(InfoError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_typed_getters_check_declared_type_first() {
        let script = Script::with_value(InfoValue::Integer(2));
        let registry = registry_over(InfoKey::WifiStatus, &script);

        assert_eq!(registry.get_int(InfoKey::WifiStatus).unwrap(), 2);
        // Wrong requested type is a caller error and never reaches the
        // backend — even when the backend read would fail.
        script.fail_reads();
        assert!(matches!(
            registry.get_bool(InfoKey::WifiStatus),
            Err(InfoError::InvalidParameter(_))
        ));
        assert!(matches!(
            registry.get_int(InfoKey::WifiStatus),
            Err(InfoError::Io(_))
        ));
    }

    #[test]
    fn test_source_breaking_declared_type_is_io() {
        let script = Script::with_value(InfoValue::Text("oops".into()));
        let registry = registry_over(InfoKey::WifiStatus, &script);
        assert!(matches!(
            registry.get_int(InfoKey::WifiStatus),
            Err(InfoError::Io(_))
        ));
    }

    #[test]
    fn test_first_registration_arms_once() {
        let script = Script::with_value(InfoValue::Boolean(false));
        let registry = registry_over(InfoKey::BatteryCharging, &script);

        registry
            .set_changed_cb(InfoKey::BatteryCharging, |_| {})
            .unwrap();
        registry
            .set_changed_cb(InfoKey::BatteryCharging, |_| {})
            .unwrap();
        registry
            .set_changed_cb(InfoKey::BatteryCharging, |_| {})
            .unwrap();
        assert_eq!(script.subscribes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_replacement_wins_and_resets_snapshot() {
        let script = Script::with_value(InfoValue::Boolean(true));
        let registry = registry_over(InfoKey::BatteryCharging, &script);

        let old_hits = Arc::new(AtomicUsize::new(0));
        let new_hits = Arc::new(AtomicUsize::new(0));
        registry
            .set_changed_cb(InfoKey::BatteryCharging, counting_cb(&old_hits))
            .unwrap();
        script.fire();
        assert_eq!(old_hits.load(Ordering::SeqCst), 1);

        registry
            .set_changed_cb(InfoKey::BatteryCharging, counting_cb(&new_hits))
            .unwrap();
        // Value unchanged since the old callback saw it, but the
        // replacement cleared the snapshot: the new callback fires.
        script.fire();
        assert_eq!(old_hits.load(Ordering::SeqCst), 1);
        assert_eq!(new_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_arm_failure_rolls_back() {
        let script = Arc::new(Script {
            refuse_arm: true,
            ..Script::default()
        });
        script.set(InfoValue::Boolean(true));
        let registry = registry_over(InfoKey::BatteryCharging, &script);

        assert!(matches!(
            registry.set_changed_cb(InfoKey::BatteryCharging, |_| {}),
            Err(InfoError::Io(_))
        ));
        // The failed registration left nothing behind: disarming still
        // succeeds and reports no prior subscription.
        registry.unset_changed_cb(InfoKey::BatteryCharging).unwrap();
        assert_eq!(script.unsubscribes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dedup_is_edge_triggered_on_value() {
        let script = Script::with_value(InfoValue::Integer(0));
        let registry = registry_over(InfoKey::GpsStatus, &script);
        let hits = Arc::new(AtomicUsize::new(0));
        registry
            .set_changed_cb(InfoKey::GpsStatus, counting_cb(&hits))
            .unwrap();

        script.fire(); // first delivery always fires
        script.fire(); // same value: suppressed
        script.fire(); // still suppressed
        assert_eq!(hits.load(Ordering::SeqCst), 1);

        script.set(InfoValue::Integer(1));
        script.fire(); // changed: fires
        script.fire(); // unchanged again: suppressed
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dispatch_read_failure_is_swallowed() {
        let script = Script::with_value(InfoValue::Integer(1));
        let registry = registry_over(InfoKey::GpsStatus, &script);
        let hits = Arc::new(AtomicUsize::new(0));
        registry
            .set_changed_cb(InfoKey::GpsStatus, counting_cb(&hits))
            .unwrap();

        script.fail_reads();
        script.fire(); // no panic, no callback
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        // Subscription is still live and undamaged.
        script.set(InfoValue::Integer(2));
        script.fire();
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unset_silences_and_disarms() {
        let script = Script::with_value(InfoValue::Boolean(false));
        let registry = registry_over(InfoKey::BatteryCharging, &script);
        let hits = Arc::new(AtomicUsize::new(0));
        registry
            .set_changed_cb(InfoKey::BatteryCharging, counting_cb(&hits))
            .unwrap();
        let notifier = script.notifier.lock().unwrap().clone().unwrap();

        registry.unset_changed_cb(InfoKey::BatteryCharging).unwrap();
        assert_eq!(script.unsubscribes.load(Ordering::SeqCst), 1);

        // A backend event the disarm could not recall is a no-op.
        notifier.notify();
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unset_without_registration_is_ok() {
        let script = Script::with_value(InfoValue::Boolean(false));
        let registry = registry_over(InfoKey::BatteryCharging, &script);
        registry.unset_changed_cb(InfoKey::BatteryCharging).unwrap();
        registry.unset_changed_cb(InfoKey::BatteryCharging).unwrap();
    }

    #[test]
    fn test_unwatchable_binding_reports_io() {
        let registry = Registry::new(vec![BindingEntry::new(
            InfoKey::RegionFormat,
            Box::new(FixedSource(InfoValue::Text("en_US".into()))),
        )]);

        assert_eq!(
            registry.get_string(InfoKey::RegionFormat).unwrap(),
            "en_US"
        );
        assert!(matches!(
            registry.set_changed_cb(InfoKey::RegionFormat, |_| {}),
            Err(InfoError::Io(_))
        ));
        assert!(matches!(
            registry.unset_changed_cb(InfoKey::RegionFormat),
            Err(InfoError::Io(_))
        ));
    }

    #[test]
    fn test_notifier_survives_registry_drop() {
        let script = Script::with_value(InfoValue::Boolean(false));
        let registry = registry_over(InfoKey::BatteryCharging, &script);
        registry
            .set_changed_cb(InfoKey::BatteryCharging, |_| {})
            .unwrap();
        let notifier = script.notifier.lock().unwrap().clone().unwrap();

        drop(registry);
        notifier.notify(); // logged no-op, no panic
    }
}

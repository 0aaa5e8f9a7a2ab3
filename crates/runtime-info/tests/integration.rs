// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! End-to-end tests: the registry with its standard bindings over an
//! in-memory configuration store. Store writes deliver change handlers
//! synchronously on the writer's thread, so every assertion below can
//! follow its write directly.

use config_store::MemoryStore;
use runtime_info::sources::{connectivity, hardware, locale};
use runtime_info::{InfoError, InfoKey, Registry};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.set_int(connectivity::WIFI_STATE, 3);
    store.set_int(connectivity::BT_STATUS, 0);
    store.set_int(connectivity::HOTSPOT_MODE, 0x1 | 0x4);
    store.set_int(connectivity::GPS_STATE, 0);
    store.set_string(locale::LANGUAGE, "el_GR.UTF-8");
    store.set_string(locale::REGION_FORMAT, "el_GR");
    store.set_int(locale::TIME_FORMAT_1224, 2);
    store.set_int(locale::FIRST_DAY_OF_WEEK, 1);
    store.set_int(hardware::EARJACK, 0);
    store.set_int(hardware::BATTERY_CHARGING, 1);
    store.set_int(hardware::USB_STATUS, 2);
    Arc::new(store)
}

#[test]
fn test_typed_reads_across_families() {
    let registry = Registry::with_store(seeded_store());

    // Raw Wi-Fi state 3 (connected, transferring) folds to connected.
    assert_eq!(registry.get_int(InfoKey::WifiStatus).unwrap(), 2);
    assert!(!registry.get_bool(InfoKey::BluetoothEnabled).unwrap());
    assert!(registry.get_bool(InfoKey::WifiHotspotEnabled).unwrap());
    assert!(!registry.get_bool(InfoKey::BluetoothTetheringEnabled).unwrap());
    assert!(registry.get_bool(InfoKey::UsbTetheringEnabled).unwrap());
    assert_eq!(registry.get_string(InfoKey::LanguageSet).unwrap(), "el_GR");
    assert!(registry.get_bool(InfoKey::TwentyFourHourClockEnabled).unwrap());
    assert_eq!(registry.get_int(InfoKey::FirstDayOfWeek).unwrap(), 1);
    assert!(registry.get_bool(InfoKey::BatteryCharging).unwrap());
    assert!(registry.get_bool(InfoKey::UsbConnected).unwrap());
    assert!(!registry.get_bool(InfoKey::AudioJackConnected).unwrap());
}

#[test]
fn test_unseeded_item_is_not_supported() {
    let registry = Registry::with_store(seeded_store());
    // No vibration setting in the store: the item does not exist here.
    assert!(matches!(
        registry.get_bool(InfoKey::VibrationEnabled),
        Err(InfoError::NotSupported(_))
    ));
}

#[test]
fn test_location_items_degrade_instead_of_failing() {
    let registry = Registry::with_store(seeded_store());
    assert!(!registry.get_bool(InfoKey::LocationServiceEnabled).unwrap());
    assert!(!registry
        .get_bool(InfoKey::LocationNetworkPositionEnabled)
        .unwrap());
}

#[test]
fn test_wrong_requested_type_is_invalid_parameter() {
    let registry = Registry::with_store(seeded_store());
    assert!(matches!(
        registry.get_bool(InfoKey::WifiStatus),
        Err(InfoError::InvalidParameter(_))
    ));
    // No item declares a double.
    for key in registry.keys().collect::<Vec<_>>() {
        assert!(matches!(
            registry.get_double(key),
            Err(InfoError::InvalidParameter(_))
        ));
    }
}

#[test]
fn test_gps_acquisition_sequence() {
    let store = seeded_store();
    let registry = Registry::with_store(Arc::clone(&store) as Arc<dyn config_store::ConfigStore>);

    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let reg = Arc::new(registry);
    let reg_for_cb = Arc::clone(&reg);
    reg.set_changed_cb(InfoKey::GpsStatus, move |key| {
        // Reads from inside a callback are fine; only subscription
        // changes for the callback's own key are off limits.
        let value = reg_for_cb.get_int(key);
        sink.lock().unwrap().push(value.unwrap());
    })
    .unwrap();

    store.set_int(connectivity::GPS_STATE, 1); // searching
    store.set_int(connectivity::GPS_STATE, 1); // rewrite, no change
    store.set_int(connectivity::GPS_STATE, 2); // fix acquired
    store.set_int(connectivity::GPS_STATE, 0); // switched off

    assert_eq!(*seen.lock().unwrap(), vec![1, 2, 0]);
}

#[test]
fn test_shared_backend_key_notifies_each_item_independently() {
    let store = seeded_store();
    let registry = Registry::with_store(Arc::clone(&store) as Arc<dyn config_store::ConfigStore>);

    let jack_hits = Arc::new(AtomicUsize::new(0));
    let tv_hits = Arc::new(AtomicUsize::new(0));
    let j = Arc::clone(&jack_hits);
    registry
        .set_changed_cb(InfoKey::AudioJackConnected, move |_| {
            j.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    let t = Arc::clone(&tv_hits);
    registry
        .set_changed_cb(InfoKey::TvOutConnected, move |_| {
            t.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    // Headset in: jack item changes, TV-out stays false (first delivery
    // still fires once to establish the baseline).
    store.set_int(hardware::EARJACK, 2);
    assert_eq!(jack_hits.load(Ordering::SeqCst), 1);
    assert_eq!(tv_hits.load(Ordering::SeqCst), 1);

    // Headset swap 4-wire to 3-wire: both items unchanged, no firing.
    store.set_int(hardware::EARJACK, 1);
    assert_eq!(jack_hits.load(Ordering::SeqCst), 1);
    assert_eq!(tv_hits.load(Ordering::SeqCst), 1);

    // TV-out cable in: both items flip.
    store.set_int(hardware::EARJACK, 3);
    assert_eq!(jack_hits.load(Ordering::SeqCst), 2);
    assert_eq!(tv_hits.load(Ordering::SeqCst), 2);
}

#[test]
fn test_unsubscribe_stops_delivery_for_that_item_only() {
    let store = seeded_store();
    let registry = Registry::with_store(Arc::clone(&store) as Arc<dyn config_store::ConfigStore>);

    let battery_hits = Arc::new(AtomicUsize::new(0));
    let usb_hits = Arc::new(AtomicUsize::new(0));
    let b = Arc::clone(&battery_hits);
    registry
        .set_changed_cb(InfoKey::BatteryCharging, move |_| {
            b.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    let u = Arc::clone(&usb_hits);
    registry
        .set_changed_cb(InfoKey::UsbConnected, move |_| {
            u.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    registry.unset_changed_cb(InfoKey::BatteryCharging).unwrap();

    store.set_int(hardware::BATTERY_CHARGING, 0);
    store.set_int(hardware::USB_STATUS, 0);
    assert_eq!(battery_hits.load(Ordering::SeqCst), 0);
    assert_eq!(usb_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn test_replacement_callback_takes_over() {
    let store = seeded_store();
    let registry = Registry::with_store(Arc::clone(&store) as Arc<dyn config_store::ConfigStore>);

    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(AtomicUsize::new(0));
    let f = Arc::clone(&first);
    registry
        .set_changed_cb(InfoKey::BatteryCharging, move |_| {
            f.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();
    let s = Arc::clone(&second);
    registry
        .set_changed_cb(InfoKey::BatteryCharging, move |_| {
            s.fetch_add(1, Ordering::SeqCst);
        })
        .unwrap();

    store.set_int(hardware::BATTERY_CHARGING, 0);
    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

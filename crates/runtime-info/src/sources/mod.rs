// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Standard platform bindings over a [`ConfigStore`].
//!
//! Every item in the standard table is served by one [`StoreSource`]:
//! a backend key, a watch token, and a mapper that translates the raw
//! stored value into the item's declared [`InfoValue`]. The mappers
//! live in the per-family modules; this module assembles the table.
//!
//! Several items can share one backend key (the three audio-jack items
//! all read the ear-jack state). Sharing is safe because each item
//! watches under its own token.

pub mod connectivity;
pub mod hardware;
pub mod locale;
pub mod location;

use crate::binding::{BindingEntry, InfoSource, Notifier};
use crate::key::InfoKey;
use crate::value::InfoValue;
use crate::InfoError;
use config_store::{ConfigStore, WatchToken};
use std::sync::Arc;

/// Translates a raw stored value into the item's declared value.
pub(crate) type ReadFn = fn(&dyn ConfigStore, &str) -> Result<InfoValue, InfoError>;

/// An [`InfoSource`] serving one item from a configuration store.
pub struct StoreSource {
    store: Arc<dyn ConfigStore>,
    backend_key: &'static str,
    token: WatchToken,
    read: ReadFn,
}

impl StoreSource {
    pub(crate) fn new(
        store: Arc<dyn ConfigStore>,
        backend_key: &'static str,
        token: WatchToken,
        read: ReadFn,
    ) -> Self {
        Self {
            store,
            backend_key,
            token,
            read,
        }
    }
}

impl InfoSource for StoreSource {
    fn get(&self) -> Result<InfoValue, InfoError> {
        (self.read)(self.store.as_ref(), self.backend_key)
    }

    fn subscribe(&self, notifier: Notifier) -> Result<(), InfoError> {
        self.store
            .notify_on_change(self.backend_key, self.token, Box::new(move || notifier.notify()))
            .map_err(InfoError::from)
    }

    fn unsubscribe(&self) -> Result<(), InfoError> {
        self.store.stop_notify(self.backend_key, self.token);
        Ok(())
    }
}

/// Builds the standard binding table over `store`.
pub fn bindings(store: Arc<dyn ConfigStore>) -> Vec<BindingEntry> {
    InfoKey::ALL
        .into_iter()
        .map(|key| {
            let (backend_key, read) = route(key);
            BindingEntry::new(
                key,
                Box::new(StoreSource::new(
                    Arc::clone(&store),
                    backend_key,
                    key as WatchToken,
                    read,
                )),
            )
        })
        .collect()
}

/// The backend key and mapper serving each item.
fn route(key: InfoKey) -> (&'static str, ReadFn) {
    match key {
        InfoKey::WifiStatus => (connectivity::WIFI_STATE, connectivity::wifi_status),
        InfoKey::BluetoothEnabled => (connectivity::BT_STATUS, connectivity::bluetooth_enabled),
        InfoKey::WifiHotspotEnabled => {
            (connectivity::HOTSPOT_MODE, connectivity::wifi_hotspot_enabled)
        }
        InfoKey::BluetoothTetheringEnabled => (
            connectivity::HOTSPOT_MODE,
            connectivity::bluetooth_tethering_enabled,
        ),
        InfoKey::UsbTetheringEnabled => (
            connectivity::HOTSPOT_MODE,
            connectivity::usb_tethering_enabled,
        ),
        InfoKey::PacketDataEnabled => (connectivity::PACKET_DATA, strict_flag),
        InfoKey::DataRoamingEnabled => (connectivity::DATA_ROAMING, strict_flag),
        InfoKey::GpsStatus => (connectivity::GPS_STATE, connectivity::gps_status),
        InfoKey::LocationServiceEnabled => (location::USE_MY_LOCATION, location::lenient_flag),
        InfoKey::LocationNetworkPositionEnabled => {
            (location::NETWORK_POSITION, location::lenient_flag)
        }
        InfoKey::LanguageSet => (locale::LANGUAGE, locale::language_set),
        InfoKey::RegionFormat => (locale::REGION_FORMAT, locale::region_format),
        InfoKey::TwentyFourHourClockEnabled => {
            (locale::TIME_FORMAT_1224, locale::twenty_four_hour_clock)
        }
        InfoKey::FirstDayOfWeek => (locale::FIRST_DAY_OF_WEEK, locale::first_day_of_week),
        InfoKey::VibrationEnabled => (hardware::VIBRATION, strict_flag),
        InfoKey::AudioJackConnected => (hardware::EARJACK, hardware::audio_jack_connected),
        InfoKey::AudioJackStatus => (hardware::EARJACK, hardware::audio_jack_status),
        InfoKey::TvOutConnected => (hardware::EARJACK, hardware::tv_out_connected),
        InfoKey::BatteryCharging => (hardware::BATTERY_CHARGING, strict_flag),
        InfoKey::UsbConnected => (hardware::USB_STATUS, hardware::usb_connected),
        InfoKey::ChargerConnected => (hardware::CHARGER_STATUS, strict_flag),
        InfoKey::AutoRotationEnabled => (hardware::AUTO_ROTATE, strict_flag),
    }
}

/// Mapper for plain 0/1 flags. Anything else in the store is a backend
/// fault.
pub(crate) fn strict_flag(store: &dyn ConfigStore, key: &str) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        0 => Ok(InfoValue::Boolean(false)),
        1 => Ok(InfoValue::Boolean(true)),
        other => Err(out_of_range(key, other)),
    }
}

pub(crate) fn out_of_range(key: &str, value: i64) -> InfoError {
    InfoError::Io(format!("backend key '{key}' holds out-of-range value {value}"))
}

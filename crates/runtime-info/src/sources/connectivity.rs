// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Connectivity item mappers.
//!
//! The hotspot items decode one shared bitmask key; the Bluetooth state
//! is itself a bitmask where any set bit means the radio is on.

use super::out_of_range;
use crate::value::InfoValue;
use crate::InfoError;
use config_store::ConfigStore;

pub const WIFI_STATE: &str = "memory/wifi/state";
pub const BT_STATUS: &str = "db/bluetooth/status";
pub const HOTSPOT_MODE: &str = "memory/mobile_hotspot/mode";
pub const PACKET_DATA: &str = "db/setting/3g_enabled";
pub const DATA_ROAMING: &str = "db/setting/data_roaming";
pub const GPS_STATE: &str = "memory/location/gps/state";

/// Hotspot mode bits.
const HOTSPOT_WIFI: i64 = 0x1;
const HOTSPOT_BT: i64 = 0x2;
const HOTSPOT_USB: i64 = 0x4;

/// Raw Wi-Fi states: off, on-unconnected, connected, connected and
/// transferring. The facade folds the last two together.
pub(crate) fn wifi_status(store: &dyn ConfigStore, key: &str) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        0 => Ok(InfoValue::Integer(0)),
        1 => Ok(InfoValue::Integer(1)),
        2 | 3 => Ok(InfoValue::Integer(2)),
        other => Err(out_of_range(key, other)),
    }
}

pub(crate) fn bluetooth_enabled(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    Ok(InfoValue::Boolean(store.get_int(key)? != 0))
}

pub(crate) fn wifi_hotspot_enabled(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    hotspot_bit(store, key, HOTSPOT_WIFI)
}

pub(crate) fn bluetooth_tethering_enabled(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    hotspot_bit(store, key, HOTSPOT_BT)
}

pub(crate) fn usb_tethering_enabled(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    hotspot_bit(store, key, HOTSPOT_USB)
}

fn hotspot_bit(store: &dyn ConfigStore, key: &str, bit: i64) -> Result<InfoValue, InfoError> {
    Ok(InfoValue::Boolean(store.get_int(key)? & bit != 0))
}

pub(crate) fn gps_status(store: &dyn ConfigStore, key: &str) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        v @ 0..=2 => Ok(InfoValue::Integer(v)),
        other => Err(out_of_range(key, other)),
    }
}

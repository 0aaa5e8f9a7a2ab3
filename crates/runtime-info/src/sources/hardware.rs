// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Hardware item mappers.
//!
//! Three items decode the shared ear-jack key: connected (a headphone
//! or headset is plugged in), the jack status, and TV-out. The raw
//! codes are 0 none, 1 three-wire plug, 2 four-wire plug, 3 TV-out
//! cable.

use super::out_of_range;
use crate::value::InfoValue;
use crate::InfoError;
use config_store::ConfigStore;

pub const VIBRATION: &str = "db/setting/sound/vibration";
pub const EARJACK: &str = "memory/sysman/earjack";
pub const BATTERY_CHARGING: &str = "memory/sysman/battery_charge_now";
pub const USB_STATUS: &str = "memory/sysman/usb_status";
pub const CHARGER_STATUS: &str = "memory/sysman/charger_status";
pub const AUTO_ROTATE: &str = "db/setting/auto_rotate_screen";

const JACK_NONE: i64 = 0;
const JACK_3WIRE: i64 = 1;
const JACK_4WIRE: i64 = 2;
const JACK_TVOUT: i64 = 3;

pub(crate) fn audio_jack_connected(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        JACK_3WIRE | JACK_4WIRE => Ok(InfoValue::Boolean(true)),
        JACK_NONE | JACK_TVOUT => Ok(InfoValue::Boolean(false)),
        other => Err(out_of_range(key, other)),
    }
}

/// A TV-out cable occupies the jack but reports "unconnected" here; it
/// is surfaced through the TV-out item instead.
pub(crate) fn audio_jack_status(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        JACK_NONE | JACK_TVOUT => Ok(InfoValue::Integer(0)),
        JACK_3WIRE => Ok(InfoValue::Integer(1)),
        JACK_4WIRE => Ok(InfoValue::Integer(2)),
        other => Err(out_of_range(key, other)),
    }
}

pub(crate) fn tv_out_connected(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        JACK_TVOUT => Ok(InfoValue::Boolean(true)),
        JACK_NONE | JACK_3WIRE | JACK_4WIRE => Ok(InfoValue::Boolean(false)),
        other => Err(out_of_range(key, other)),
    }
}

/// USB states: 0 disconnected, 1 attached but not yet usable, 2 fully
/// available. Only the last counts as connected.
pub(crate) fn usb_connected(store: &dyn ConfigStore, key: &str) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        0 | 1 => Ok(InfoValue::Boolean(false)),
        2 => Ok(InfoValue::Boolean(true)),
        other => Err(out_of_range(key, other)),
    }
}

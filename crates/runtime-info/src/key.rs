// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Runtime-state item keys and their declared types.
//!
//! Every key carries exactly one [`DataType`], fixed at compile time.
//! The typed getters on the registry check the caller's requested type
//! against this declaration before touching any backend.

use std::str::FromStr;

/// The wire type of a runtime-state item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataType {
    Integer,
    Boolean,
    Double,
    String,
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DataType::Integer => "integer",
            DataType::Boolean => "boolean",
            DataType::Double => "double",
            DataType::String => "string",
        };
        f.write_str(name)
    }
}

/// A runtime-state item the facade can query and watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKey {
    // Connectivity
    WifiStatus,
    BluetoothEnabled,
    WifiHotspotEnabled,
    BluetoothTetheringEnabled,
    UsbTetheringEnabled,
    PacketDataEnabled,
    DataRoamingEnabled,
    GpsStatus,
    // Location
    LocationServiceEnabled,
    LocationNetworkPositionEnabled,
    // Locale
    LanguageSet,
    RegionFormat,
    TwentyFourHourClockEnabled,
    FirstDayOfWeek,
    // Hardware
    VibrationEnabled,
    AudioJackConnected,
    AudioJackStatus,
    TvOutConnected,
    BatteryCharging,
    UsbConnected,
    ChargerConnected,
    AutoRotationEnabled,
}

impl InfoKey {
    /// Every key the facade knows, in declaration order.
    pub const ALL: [InfoKey; 22] = [
        InfoKey::WifiStatus,
        InfoKey::BluetoothEnabled,
        InfoKey::WifiHotspotEnabled,
        InfoKey::BluetoothTetheringEnabled,
        InfoKey::UsbTetheringEnabled,
        InfoKey::PacketDataEnabled,
        InfoKey::DataRoamingEnabled,
        InfoKey::GpsStatus,
        InfoKey::LocationServiceEnabled,
        InfoKey::LocationNetworkPositionEnabled,
        InfoKey::LanguageSet,
        InfoKey::RegionFormat,
        InfoKey::TwentyFourHourClockEnabled,
        InfoKey::FirstDayOfWeek,
        InfoKey::VibrationEnabled,
        InfoKey::AudioJackConnected,
        InfoKey::AudioJackStatus,
        InfoKey::TvOutConnected,
        InfoKey::BatteryCharging,
        InfoKey::UsbConnected,
        InfoKey::ChargerConnected,
        InfoKey::AutoRotationEnabled,
    ];

    /// The type this key's values carry.
    pub fn data_type(self) -> DataType {
        match self {
            InfoKey::WifiStatus
            | InfoKey::GpsStatus
            | InfoKey::FirstDayOfWeek
            | InfoKey::AudioJackStatus => DataType::Integer,
            InfoKey::LanguageSet | InfoKey::RegionFormat => DataType::String,
            _ => DataType::Boolean,
        }
    }

    /// Stable textual name, as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            InfoKey::WifiStatus => "wifi-status",
            InfoKey::BluetoothEnabled => "bluetooth-enabled",
            InfoKey::WifiHotspotEnabled => "wifi-hotspot-enabled",
            InfoKey::BluetoothTetheringEnabled => "bluetooth-tethering-enabled",
            InfoKey::UsbTetheringEnabled => "usb-tethering-enabled",
            InfoKey::PacketDataEnabled => "packet-data-enabled",
            InfoKey::DataRoamingEnabled => "data-roaming-enabled",
            InfoKey::GpsStatus => "gps-status",
            InfoKey::LocationServiceEnabled => "location-service-enabled",
            InfoKey::LocationNetworkPositionEnabled => "location-network-position-enabled",
            InfoKey::LanguageSet => "language-set",
            InfoKey::RegionFormat => "region-format",
            InfoKey::TwentyFourHourClockEnabled => "24-hour-clock-enabled",
            InfoKey::FirstDayOfWeek => "first-day-of-week",
            InfoKey::VibrationEnabled => "vibration-enabled",
            InfoKey::AudioJackConnected => "audio-jack-connected",
            InfoKey::AudioJackStatus => "audio-jack-status",
            InfoKey::TvOutConnected => "tv-out-connected",
            InfoKey::BatteryCharging => "battery-charging",
            InfoKey::UsbConnected => "usb-connected",
            InfoKey::ChargerConnected => "charger-connected",
            InfoKey::AutoRotationEnabled => "auto-rotation-enabled",
        }
    }
}

impl std::fmt::Display for InfoKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfoKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InfoKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown runtime-state key '{s}'"))
    }
}

/// Wi-Fi connection states reported by [`InfoKey::WifiStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiStatus {
    /// Wi-Fi is switched off.
    Disabled = 0,
    /// Wi-Fi is on but not associated with an access point.
    Unconnected = 1,
    /// Wi-Fi is associated with an access point.
    Connected = 2,
}

/// GPS states reported by [`InfoKey::GpsStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsStatus {
    /// GPS is switched off.
    Disabled = 0,
    /// GPS is on and acquiring a fix.
    Searching = 1,
    /// GPS has a fix.
    Connected = 2,
}

/// Audio jack states reported by [`InfoKey::AudioJackStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioJackStatus {
    /// Nothing plugged in (a TV-out cable also reports this).
    Unconnected = 0,
    /// Three-conductor (no microphone) headphone plug.
    Connected3Wire = 1,
    /// Four-conductor (with microphone) headset plug.
    Connected4Wire = 2,
}

/// Week days reported by [`InfoKey::FirstDayOfWeek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

macro_rules! int_conversions {
    ($($ty:ident { $($variant:ident = $code:literal),+ $(,)? })+) => {
        $(
            impl TryFrom<i64> for $ty {
                type Error = i64;

                fn try_from(code: i64) -> Result<Self, Self::Error> {
                    match code {
                        $($code => Ok($ty::$variant),)+
                        other => Err(other),
                    }
                }
            }

            impl From<$ty> for i64 {
                fn from(v: $ty) -> i64 {
                    v as i64
                }
            }
        )+
    };
}

int_conversions! {
    WifiStatus { Disabled = 0, Unconnected = 1, Connected = 2 }
    GpsStatus { Disabled = 0, Searching = 1, Connected = 2 }
    AudioJackStatus { Unconnected = 0, Connected3Wire = 1, Connected4Wire = 2 }
    Weekday {
        Sunday = 0, Monday = 1, Tuesday = 2, Wednesday = 3,
        Thursday = 4, Friday = 5, Saturday = 6,
    }
}

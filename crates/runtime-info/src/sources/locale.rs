// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Locale item mappers.

use super::out_of_range;
use crate::value::InfoValue;
use crate::InfoError;
use config_store::ConfigStore;

pub const LANGUAGE: &str = "db/menu_widget/language";
pub const REGION_FORMAT: &str = "db/menu_widget/regionformat";
pub const TIME_FORMAT_1224: &str = "db/setting/time_format_1224";
pub const FIRST_DAY_OF_WEEK: &str = "db/setting/first_day_of_week";

/// The stored language is a full locale spec (`en_US.UTF-8`); the item
/// reports only the language part, everything from the first `.` cut.
pub(crate) fn language_set(store: &dyn ConfigStore, key: &str) -> Result<InfoValue, InfoError> {
    let raw = store.get_string(key)?;
    let language = match raw.find('.') {
        Some(dot) => raw[..dot].to_string(),
        None => raw,
    };
    Ok(InfoValue::Text(language))
}

pub(crate) fn region_format(store: &dyn ConfigStore, key: &str) -> Result<InfoValue, InfoError> {
    Ok(InfoValue::Text(store.get_string(key)?))
}

/// Selector values: 1 is the 12-hour clock, 2 the 24-hour clock.
pub(crate) fn twenty_four_hour_clock(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        1 => Ok(InfoValue::Boolean(false)),
        2 => Ok(InfoValue::Boolean(true)),
        other => Err(out_of_range(key, other)),
    }
}

/// Sunday is 0, Saturday is 6.
pub(crate) fn first_day_of_week(
    store: &dyn ConfigStore,
    key: &str,
) -> Result<InfoValue, InfoError> {
    match store.get_int(key)? {
        v @ 0..=6 => Ok(InfoValue::Integer(v)),
        other => Err(out_of_range(key, other)),
    }
}

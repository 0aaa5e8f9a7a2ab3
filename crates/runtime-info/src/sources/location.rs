// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Location item mappers.
//!
//! Location settings are advisory: a platform without the setting at
//! all still answers, as "disabled". Reads therefore degrade to `false`
//! on any store failure instead of surfacing an error.

use crate::value::InfoValue;
use crate::InfoError;
use config_store::ConfigStore;

pub const USE_MY_LOCATION: &str = "db/location/use_my_location";
pub const NETWORK_POSITION: &str = "db/location/network_position";

pub(crate) fn lenient_flag(store: &dyn ConfigStore, key: &str) -> Result<InfoValue, InfoError> {
    let enabled = store.get_int(key).map(|v| v != 0).unwrap_or(false);
    Ok(InfoValue::Boolean(enabled))
}

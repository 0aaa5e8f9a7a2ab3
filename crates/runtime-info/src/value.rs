// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Tagged runtime-state values.

use crate::key::DataType;

/// A value read from a runtime-state item, tagged with its type.
///
/// `PartialEq` on this enum is the comparison the dispatcher uses to
/// suppress notifications for writes that did not change the value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum InfoValue {
    Integer(i64),
    Boolean(bool),
    Double(f64),
    Text(String),
}

impl InfoValue {
    /// The type this value carries.
    pub fn data_type(&self) -> DataType {
        match self {
            InfoValue::Integer(_) => DataType::Integer,
            InfoValue::Boolean(_) => DataType::Boolean,
            InfoValue::Double(_) => DataType::Double,
            InfoValue::Text(_) => DataType::String,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            InfoValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            InfoValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            InfoValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            InfoValue::Text(v) => Some(v),
            _ => None,
        }
    }
}

impl std::fmt::Display for InfoValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InfoValue::Integer(v) => write!(f, "{v}"),
            InfoValue::Boolean(v) => write!(f, "{v}"),
            InfoValue::Double(v) => write!(f, "{v}"),
            InfoValue::Text(v) => write!(f, "{v}"),
        }
    }
}

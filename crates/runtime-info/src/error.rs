// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error taxonomy of the runtime-information facade.
//!
//! Collaborator errors are translated at the boundary so callers see one
//! taxonomy regardless of which backend served the item. The one mapping
//! worth calling out: a key missing from the configuration store means
//! the item does not exist on this platform, so it surfaces as
//! [`InfoError::NotSupported`] rather than an I/O failure.

use config_store::StoreError;
use proc_stats::ProcError;
use usage_service::UsageError;

/// Errors reported by the runtime-information facade.
#[derive(Debug, thiserror::Error)]
pub enum InfoError {
    /// The caller passed an unknown key or asked for the wrong type.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An allocation failed, locally or in the resource daemon.
    #[error("out of memory")]
    OutOfMemory,

    /// A local read or backend exchange failed.
    #[error("i/o error: {0}")]
    Io(String),

    /// The remote resource daemon failed or answered incoherently.
    #[error("remote i/o error: {0}")]
    RemoteIo(String),

    /// The platform refused access to the item.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The item is not available on this platform.
    #[error("not supported: {0}")]
    NotSupported(String),
}

impl From<StoreError> for InfoError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MissingKey { key } => {
                InfoError::NotSupported(format!("backend key '{key}' absent"))
            }
            other => InfoError::Io(other.to_string()),
        }
    }
}

impl From<ProcError> for InfoError {
    fn from(err: ProcError) -> Self {
        InfoError::Io(err.to_string())
    }
}

impl From<UsageError> for InfoError {
    fn from(err: UsageError) -> Self {
        match err {
            UsageError::Io(detail) => InfoError::Io(detail),
            UsageError::RemoteIo(detail) => InfoError::RemoteIo(detail),
            UsageError::PermissionDenied => {
                InfoError::PermissionDenied("refused by resource daemon".to_string())
            }
            UsageError::OutOfMemory => InfoError::OutOfMemory,
        }
    }
}

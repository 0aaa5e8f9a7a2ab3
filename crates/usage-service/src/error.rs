// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error taxonomy for the resource daemon boundary.

/// Errors reported when querying per-process usage statistics.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    /// Local I/O failure while framing or parsing the exchange.
    #[error("usage i/o error: {0}")]
    Io(String),

    /// The daemon could not be reached, dropped the connection, or
    /// returned a malformed or mismatched reply.
    #[error("resource daemon error: {0}")]
    RemoteIo(String),

    /// The daemon refused the query for this caller.
    #[error("permission denied by resource daemon")]
    PermissionDenied,

    /// The daemon could not allocate the reply.
    #[error("resource daemon out of memory")]
    OutOfMemory,
}

impl UsageError {
    /// Translates a daemon-reported error code into the local taxonomy.
    pub(crate) fn from_daemon_code(code: &str) -> Self {
        match code {
            "permission-denied" => UsageError::PermissionDenied,
            "out-of-memory" => UsageError::OutOfMemory,
            other => UsageError::RemoteIo(format!("daemon reported '{other}'")),
        }
    }
}

// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Unix-socket client for the resource daemon.
//!
//! One request per connection: the client writes a single JSON line,
//! half-closes the stream, and reads the JSON reply. The daemon's reply
//! is either `{"records": [...]}` or `{"error": "<code>"}`. Timeouts
//! are fixed at the transport — the facade exposes no cancellation.

use crate::{ProcessCpu, ProcessMemory, UsageError, UsageService};
use serde::de::DeserializeOwned;
use std::io::{Read, Write};
use std::net::Shutdown;
use std::os::unix::net::UnixStream;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default daemon socket location.
const DEFAULT_SOCKET: &str = "/run/resourced/usage.sock";

/// Fixed per-call transport timeout.
const RPC_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(serde::Serialize)]
struct UsageRequest<'a> {
    op: &'a str,
    pids: &'a [i32],
}

#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct UsageReply<T> {
    #[serde(default)]
    records: Option<Vec<T>>,
    #[serde(default)]
    error: Option<String>,
}

/// Client for the per-process usage daemon.
#[derive(Debug, Clone)]
pub struct DaemonClient {
    socket_path: PathBuf,
}

impl DaemonClient {
    /// Creates a client for the default daemon socket.
    pub fn new() -> Self {
        Self::with_socket(DEFAULT_SOCKET)
    }

    /// Creates a client for a specific socket path.
    pub fn with_socket(path: impl AsRef<Path>) -> Self {
        Self {
            socket_path: path.as_ref().to_path_buf(),
        }
    }

    /// Performs one request/reply exchange and validates the batch.
    fn roundtrip<T: DeserializeOwned>(
        &self,
        op: &str,
        pids: &[i32],
    ) -> Result<Vec<T>, UsageError> {
        let mut stream = UnixStream::connect(&self.socket_path).map_err(|e| {
            UsageError::RemoteIo(format!(
                "cannot reach daemon at {}: {e}",
                self.socket_path.display()
            ))
        })?;
        stream
            .set_read_timeout(Some(RPC_TIMEOUT))
            .and_then(|_| stream.set_write_timeout(Some(RPC_TIMEOUT)))
            .map_err(|e| UsageError::Io(format!("cannot set socket timeout: {e}")))?;

        let request = serde_json::to_string(&UsageRequest { op, pids })
            .map_err(|e| UsageError::Io(format!("request encode failed: {e}")))?;

        stream
            .write_all(request.as_bytes())
            .and_then(|_| stream.write_all(b"\n"))
            .map_err(|e| UsageError::RemoteIo(format!("request write failed: {e}")))?;
        // Half-close so the daemon sees EOF and answers.
        let _ = stream.shutdown(Shutdown::Write);

        let mut raw = String::new();
        stream
            .read_to_string(&mut raw)
            .map_err(|e| UsageError::RemoteIo(format!("reply read failed: {e}")))?;

        let reply: UsageReply<T> = serde_json::from_str(raw.trim())
            .map_err(|e| UsageError::Io(format!("reply decode failed: {e}")))?;

        if let Some(code) = reply.error {
            tracing::warn!("usage daemon refused '{op}': {code}");
            return Err(UsageError::from_daemon_code(&code));
        }

        let records = reply
            .records
            .ok_or_else(|| UsageError::RemoteIo("reply carried neither records nor error".into()))?;

        // Atomic batch: the reply must be parallel to the request.
        if records.len() != pids.len() {
            return Err(UsageError::RemoteIo(format!(
                "daemon returned {} record(s) for {} pid(s)",
                records.len(),
                pids.len()
            )));
        }

        Ok(records)
    }
}

impl Default for DaemonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageService for DaemonClient {
    fn process_memory(&self, pids: &[i32]) -> Result<Vec<ProcessMemory>, UsageError> {
        self.roundtrip("process-memory", pids)
    }

    fn process_cpu(&self, pids: &[i32]) -> Result<Vec<ProcessCpu>, UsageError> {
        self.roundtrip("process-cpu", pids)
    }
}

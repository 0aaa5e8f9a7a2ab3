// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for proc filesystem readers.

/// Errors that can occur when reading system statistics.
#[derive(Debug, thiserror::Error)]
pub enum ProcError {
    /// Failed to read a procfs file.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// The file content did not match the expected format.
    #[error("failed to parse {path}: {detail}")]
    ParseError { path: String, detail: String },
}

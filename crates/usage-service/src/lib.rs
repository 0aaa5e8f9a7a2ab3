// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # usage-service
//!
//! Client boundary to the resource daemon that aggregates per-process
//! memory and CPU statistics. Applications cannot read other processes'
//! smaps themselves, so these queries go through a privileged daemon
//! over a request/reply IPC channel.
//!
//! The [`UsageService`] trait is what the facade programs against;
//! [`DaemonClient`] is the production implementation (newline-delimited
//! JSON over a Unix domain socket, fixed timeout). Tests substitute an
//! in-process fake.
//!
//! # Batch semantics
//! A query for N pids either returns exactly N records, in request
//! order, or fails as a whole. There is no partial success.

mod client;
mod error;
mod service;
mod types;

pub use client::DaemonClient;
pub use error::UsageError;
pub use service::UsageService;
pub use types::{ProcessCpu, ProcessMemory};

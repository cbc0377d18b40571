// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! nextvfs CLI library.
//!
//! This crate provides the command-line interface for the nextvfs routing
//! core. It snapshots a real project directory into the in-memory VFS and
//! exposes the core operations for inspection.
//!
//! # Usage
//!
//! This crate is primarily used through the `nextvfs` binary:
//!
//! ```bash
//! nextvfs resolve ./my-app /users/123   # resolve a URL against the project
//! nextvfs routes ./my-app               # list every discovered route
//! nextvfs config ./my-app               # recovered next/tailwind config values
//! ```

/// CLI commands (resolve, routes, config).
pub mod commands;
/// Directory snapshotting into the in-memory VFS.
pub mod snapshot;

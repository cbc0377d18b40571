// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! CLI command implementations.
//!
//! This module contains the implementations for all nextvfs CLI commands:
//!
//! - `resolve`: Resolve a URL pathname against a project
//! - `routes`: List every route a project defines
//! - `config`: Show the recovered next/tailwind config values

/// Recovered-config report command.
pub mod config;
/// URL resolution command.
pub mod resolve;
/// Route listing command.
pub mod routes;

// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The `config` command: show the values recovered from a project's
//! `next.config.*` and `tailwind.config.*` sources.

use std::path::Path;

use nextvfs::{load_next_config, load_tailwind_config, NextConfigSnapshot, TailwindConfig};
use serde::Serialize;

use crate::snapshot::snapshot_dir;

/// Combined report of everything the config loaders recovered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigReport {
    /// Values recovered from `next.config.*`.
    pub next: NextConfigSnapshot,
    /// Outcome of the Tailwind config extraction.
    pub tailwind: TailwindConfig,
}

/// Builds the report for a snapshotted project root.
pub fn report(vfs: &nextvfs::MemoryVfs) -> ConfigReport {
    ConfigReport {
        next: load_next_config(vfs, "/"),
        tailwind: load_tailwind_config(vfs, "/"),
    }
}

/// Runs the `config` command and prints the report as pretty JSON.
pub fn run(dir: &Path) -> anyhow::Result<()> {
    let vfs = snapshot_dir(dir)?;
    println!("{}", serde_json::to_string_pretty(&report(&vfs))?);
    Ok(())
}

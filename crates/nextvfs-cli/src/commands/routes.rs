// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The `routes` command: list every route a project defines.
//!
//! Enumeration is the inverse of resolution: instead of matching one URL,
//! it walks the routing roots and reports the URL pattern each page or
//! handler file serves. Route groups are elided from patterns; dynamic
//! segments keep their bracket syntax.

use std::path::Path;

use nextvfs::segment::is_route_group;
use nextvfs::{file_extension, join_path, MemoryVfs, Vfs, API_EXTENSIONS, PAGE_EXTENSIONS};

use crate::snapshot::{find_app_dir, find_pages_dir, snapshot_dir};

/// A discovered route: the URL pattern and the file serving it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub struct RouteEntry {
    /// URL pattern, with dynamic segments in bracket syntax.
    pub pattern: String,
    /// The file that serves the pattern.
    pub file: String,
    /// `"page"`, `"handler"` or `"api"`.
    pub kind: String,
}

/// Collects every App Router page and handler under `app_dir`.
pub fn collect_app_routes(vfs: &MemoryVfs, app_dir: &str) -> Vec<RouteEntry> {
    let mut entries = Vec::new();
    collect_app(vfs, app_dir, "", &mut entries);
    entries.sort();
    entries
}

fn collect_app(vfs: &MemoryVfs, dir: &str, prefix: &str, entries: &mut Vec<RouteEntry>) {
    let pattern = if prefix.is_empty() { "/".to_string() } else { prefix.to_string() };

    if let Some(page) = probe(vfs, dir, "page", PAGE_EXTENSIONS) {
        entries.push(RouteEntry {
            pattern: pattern.clone(),
            file: page,
            kind: "page".to_string(),
        });
    }
    if let Some(handler) = probe(vfs, dir, "route", API_EXTENSIONS) {
        entries.push(RouteEntry {
            pattern,
            file: handler,
            kind: "handler".to_string(),
        });
    }

    let Ok(children) = vfs.read_dir(dir) else { return };
    for child in children {
        let child_dir = join_path(dir, &child);
        if !vfs.is_directory(&child_dir) {
            continue;
        }
        if is_route_group(&child) {
            collect_app(vfs, &child_dir, prefix, entries);
        } else {
            collect_app(vfs, &child_dir, &format!("{}/{}", prefix, child), entries);
        }
    }
}

/// Collects every Pages Router page and API handler under `pages_dir`.
pub fn collect_pages_routes(vfs: &MemoryVfs, pages_dir: &str) -> Vec<RouteEntry> {
    let mut entries = Vec::new();
    collect_pages(vfs, pages_dir, "", &mut entries);
    entries.sort();
    entries
}

fn collect_pages(vfs: &MemoryVfs, dir: &str, prefix: &str, entries: &mut Vec<RouteEntry>) {
    let Ok(children) = vfs.read_dir(dir) else { return };
    for child in children {
        let child_path = join_path(dir, &child);
        if vfs.is_directory(&child_path) {
            collect_pages(vfs, &child_path, &format!("{}/{}", prefix, child), entries);
            continue;
        }
        let Some(pattern) = page_pattern(prefix, &child) else { continue };
        let is_api = pattern == "/api" || pattern.starts_with("/api/");
        entries.push(RouteEntry {
            pattern,
            file: child_path,
            kind: if is_api { "api" } else { "page" }.to_string(),
        });
    }
}

/// Derives the URL pattern a Pages Router file serves, or `None` for
/// non-page files (wrong extension, `_app`-style internals).
fn page_pattern(prefix: &str, file_name: &str) -> Option<String> {
    let ext = file_extension(file_name)?;
    if !PAGE_EXTENSIONS.contains(&ext) {
        return None;
    }
    let stem = &file_name[..file_name.len() - ext.len()];
    if stem.starts_with('_') {
        return None;
    }
    if stem == "index" {
        return Some(if prefix.is_empty() { "/".to_string() } else { prefix.to_string() });
    }
    Some(format!("{}/{}", prefix, stem))
}

fn probe(vfs: &MemoryVfs, dir: &str, stem: &str, extensions: &[&str]) -> Option<String> {
    for ext in extensions {
        let candidate = join_path(dir, &format!("{}{}", stem, ext));
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Runs the `routes` command and prints the discovered routes as JSON.
pub fn run(dir: &Path) -> anyhow::Result<()> {
    let vfs = snapshot_dir(dir)?;
    let mut entries = Vec::new();
    if let Some(app_dir) = find_app_dir(&vfs) {
        entries.extend(collect_app_routes(&vfs, &app_dir));
    }
    if let Some(pages_dir) = find_pages_dir(&vfs) {
        entries.extend(collect_pages_routes(&vfs, &pages_dir));
    }
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}

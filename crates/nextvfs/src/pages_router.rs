// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Pages Router resolution.
//!
//! The Pages Router is the older, simpler convention: no route groups, no
//! layout chain, a page is just a file.
//!
//! - `pages/index.tsx` → `/`
//! - `pages/about.tsx` → `/about`
//! - `pages/blog/[slug].tsx` → `/blog/:slug` (dynamic)
//! - `pages/docs/[...slug].tsx` → `/docs/*` (catch-all, files only)
//! - `pages/api/hello.ts` → `/api/hello` (API handler, no dynamics)
//!
//! Resolution tries direct joins first (file, then directory index) and
//! falls back to a segment-wise walk that honours dynamic files and
//! directories. First match wins; catch-alls are only ever checked as
//! files, never as directories.

use crate::resolver::{probe_with_extensions, API_EXTENSIONS, PAGE_EXTENSIONS};
use crate::segment::SegmentKind;
use crate::vfs::{file_extension, join_path, Vfs};

/// Resolves a pathname to a Pages Router page file.
///
/// `"/"` is treated as `"/index"`. Returns `None` when nothing matches.
pub fn resolve_page_file(vfs: &dyn Vfs, pages_dir: &str, pathname: &str) -> Option<String> {
    if !vfs.is_directory(pages_dir) {
        return None;
    }
    let pathname = if pathname == "/" { "/index" } else { pathname };
    let base = if pages_dir == "/" { "" } else { pages_dir };

    // Direct file
    for ext in PAGE_EXTENSIONS {
        let candidate = format!("{}{}{}", base, pathname, ext);
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }
    // Directory index
    for ext in PAGE_EXTENSIONS {
        let candidate = format!("{}{}/index{}", base, pathname, ext);
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }

    // Segment-wise walk with dynamic fall-back
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    let found = walk(vfs, pages_dir, &segments);
    if let Some(ref page) = found {
        tracing::debug!(pathname, page = %page, "resolved pages-router file");
    }
    found
}

/// Resolves an `/api/...` pathname to a Pages Router API handler file.
///
/// The pathname is joined under `pages_dir`, then probed as an exact file
/// across the API extensions and finally as `/index.<ext>` in the same
/// order. Dynamic API routes are not supported here; they live under the
/// App Router.
pub fn resolve_api_file(vfs: &dyn Vfs, pages_dir: &str, pathname: &str) -> Option<String> {
    let base = if pages_dir == "/" { "" } else { pages_dir };
    let full = format!("{}{}", base, pathname);

    for ext in API_EXTENSIONS {
        let candidate = format!("{}{}", full, ext);
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }
    for ext in API_EXTENSIONS {
        let candidate = format!("{}/index{}", full, ext);
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

fn walk(vfs: &dyn Vfs, dir: &str, segments: &[&str]) -> Option<String> {
    if segments.is_empty() {
        return probe_with_extensions(vfs, dir, "index", PAGE_EXTENSIONS);
    }

    let head = segments[0];
    let rest = &segments[1..];

    // Exact file, terminal segments only
    if rest.is_empty() {
        if let Some(found) = probe_with_extensions(vfs, dir, head, PAGE_EXTENSIONS) {
            return Some(found);
        }
    }

    // Exact directory
    let exact = join_path(dir, head);
    if vfs.is_directory(&exact) {
        if let Some(found) = walk(vfs, &exact, rest) {
            return Some(found);
        }
    }

    let children = children_of(vfs, dir);

    // Dynamic file, terminal segments only
    if rest.is_empty() {
        for stem in bracket_stems(&children, false) {
            if let Some(found) = probe_with_extensions(vfs, dir, &stem, PAGE_EXTENSIONS) {
                return Some(found);
            }
        }
    }

    // Dynamic directory
    for child in &children {
        if let SegmentKind::Dynamic(_) = SegmentKind::parse(child) {
            let child_dir = join_path(dir, child);
            if !vfs.is_directory(&child_dir) {
                continue;
            }
            if let Some(found) = walk(vfs, &child_dir, rest) {
                return Some(found);
            }
        }
    }

    // Catch-all file consumes everything that is left
    for stem in bracket_stems(&children, true) {
        if let Some(found) = probe_with_extensions(vfs, dir, &stem, PAGE_EXTENSIONS) {
            return Some(found);
        }
    }

    None
}

/// File stems of bracketed children (`[name].<ext>` or `[...name].<ext>`),
/// deduplicated, in enumeration order.
fn bracket_stems(children: &[String], catch_all: bool) -> Vec<String> {
    let mut stems: Vec<String> = Vec::new();
    for child in children {
        let Some(ext) = file_extension(child) else { continue };
        if !PAGE_EXTENSIONS.contains(&ext) {
            continue;
        }
        let stem = &child[..child.len() - ext.len()];
        let wanted = match SegmentKind::parse(stem) {
            SegmentKind::CatchAll(_) => catch_all,
            SegmentKind::Dynamic(_) => !catch_all,
            _ => false,
        };
        if wanted && !stems.iter().any(|s| s == stem) {
            stems.push(stem.to_string());
        }
    }
    stems
}

fn children_of(vfs: &dyn Vfs, dir: &str) -> Vec<String> {
    vfs.read_dir(dir).unwrap_or_default()
}

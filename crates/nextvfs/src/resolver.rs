// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Module-file resolution and extension priority tables.
//!
//! The extension tables express priority: the first extension that
//! produces an existing file wins. The tables are part of the public
//! contract and must not be reordered.

use crate::vfs::{file_extension, join_path, Vfs};

/// Extensions probed for pages, layouts and convention files, in priority
/// order.
pub const PAGE_EXTENSIONS: &[&str] = &[".jsx", ".tsx", ".js", ".ts"];

/// Extensions probed for API handlers and route handlers, in priority
/// order.
pub const API_EXTENSIONS: &[&str] = &[".js", ".ts", ".jsx", ".tsx"];

/// Extensions probed when resolving an arbitrary extensionless module
/// path, in priority order.
pub const MODULE_EXTENSIONS: &[&str] = &[".tsx", ".ts", ".jsx", ".js"];

/// Returns true if the file at `path` must be transpiled before it can be
/// executed (TypeScript or JSX syntax).
pub fn needs_transform(path: &str) -> bool {
    path.ends_with(".jsx") || path.ends_with(".tsx") || path.ends_with(".ts")
}

/// Probes `dir/<stem><ext>` for each extension in order, returning the
/// first existing path.
pub(crate) fn probe_with_extensions(
    vfs: &dyn Vfs,
    dir: &str,
    stem: &str,
    extensions: &[&str],
) -> Option<String> {
    for ext in extensions {
        let candidate = join_path(dir, &format!("{}{}", stem, ext));
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolves an arbitrary module path to a file.
///
/// A path that already carries an extension and exists is returned as-is.
/// Otherwise each of [`MODULE_EXTENSIONS`] is appended in order, and
/// finally `/index.<ext>` is tried in the same order.
pub fn resolve_file_with_extension(vfs: &dyn Vfs, path: &str) -> Option<String> {
    if file_extension(path).is_some() && vfs.exists(path) {
        return Some(path.to_string());
    }
    for ext in MODULE_EXTENSIONS {
        let candidate = format!("{}{}", path, ext);
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }
    for ext in MODULE_EXTENSIONS {
        let candidate = join_path(path, &format!("index{}", ext));
        if vfs.exists(&candidate) {
            return Some(candidate);
        }
    }
    None
}

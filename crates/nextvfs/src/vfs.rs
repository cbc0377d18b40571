// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The virtual-filesystem contract and its in-memory implementation.
//!
//! Every other component of this crate depends only on the [`Vfs`] trait:
//! four read operations over absolute, POSIX-style paths. The shipped
//! implementation is [`MemoryVfs`], which keeps the whole project tree in
//! memory — directories are implied by the file paths stored in it.
//!
//! # Path Shape
//!
//! All paths are absolute, `/`-separated, and never contain `.`, `..` or
//! backslashes. [`normalize_path`] produces this shape from arbitrary
//! caller input; the resolvers assume their inputs are already normalized.
//!
//! # Error Behavior
//!
//! `exists` and `is_directory` never fail. `read_dir` fails on
//! non-directories (resolvers treat that as an empty listing) and
//! `read_file` fails on absence (the config loaders catch it).

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

use crate::error::{NextVfsError, Result};

/// Trait for the virtual filesystem the resolvers and loaders read from.
///
/// Implementations must be thread-safe; the core passes the handle by
/// immutable reference and never retains it beyond a single call.
pub trait Vfs: Send + Sync {
    /// Returns true iff a file or directory exists at `path`. Never fails.
    fn exists(&self, path: &str) -> bool;

    /// Returns true iff `path` exists and is a directory. Never fails.
    fn is_directory(&self, path: &str) -> bool;

    /// Returns the direct child names of a directory (names only, no
    /// separators, unordered). Fails on non-directories.
    fn read_dir(&self, path: &str) -> Result<Vec<String>>;

    /// Returns the content of a file. Fails on absence.
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

/// Converts arbitrary caller input to the canonical path shape.
///
/// Backslashes become `/`, empty and `.` components are dropped, `..`
/// components pop the previous one, and the result always starts with a
/// single `/`. The root directory normalizes to `"/"`.
pub fn normalize_path(path: &str) -> String {
    let replaced = path.replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();
    for comp in replaced.split('/') {
        match comp {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(comp),
        }
    }
    format!("/{}", parts.join("/"))
}

/// Joins a directory path and a child name without doubling separators.
pub fn join_path(dir: &str, name: &str) -> String {
    if dir == "/" {
        format!("/{}", name)
    } else {
        format!("{}/{}", dir, name)
    }
}

/// Returns the parent directory of a path (`"/"` for top-level entries).
pub fn parent_dir(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => path[..idx].to_string(),
    }
}

/// Returns the extension of a path's final segment, including the dot.
///
/// Follows `path.extname` semantics: a leading dot does not start an
/// extension, so `"/a/.env"` has none.
pub fn file_extension(path: &str) -> Option<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(idx) if idx > 0 => Some(&name[idx..]),
        _ => None,
    }
}

/// In-memory virtual filesystem.
///
/// Files are stored as `path → bytes`; directories are implied by the
/// stored file paths and can also be registered explicitly so that empty
/// directories are representable. Mutation goes through a shared handle
/// (`add_file`, `remove_file`, `add_dir`, `clear`); the resolvers treat
/// the filesystem as read-only for the duration of a call.
///
/// # Examples
///
/// ```rust,ignore
/// use nextvfs::{MemoryVfs, Vfs};
///
/// let vfs = MemoryVfs::new();
/// vfs.add_file("/app/page.tsx", "export default function Page() {}");
/// assert!(vfs.is_directory("/app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryVfs {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
    dirs: Arc<Mutex<BTreeSet<String>>>,
}

impl MemoryVfs {
    /// Creates an empty in-memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file at `path`, normalizing the path first.
    pub fn add_file(&self, path: &str, content: impl Into<Vec<u8>>) {
        let path = normalize_path(path);
        self.files.lock().unwrap().insert(path, content.into());
    }

    /// Removes a file. Removing a missing file is a no-op.
    pub fn remove_file(&self, path: &str) {
        let path = normalize_path(path);
        self.files.lock().unwrap().remove(&path);
    }

    /// Registers an explicit (possibly empty) directory.
    pub fn add_dir(&self, path: &str) {
        let path = normalize_path(path);
        if path != "/" {
            self.dirs.lock().unwrap().insert(path);
        }
    }

    /// Removes all files and registered directories.
    pub fn clear(&self) {
        self.files.lock().unwrap().clear();
        self.dirs.lock().unwrap().clear();
    }

    /// Number of files currently stored.
    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    fn is_implied_dir(&self, path: &str) -> bool {
        if path == "/" {
            return true;
        }
        let prefix = format!("{}/", path);
        let files = self.files.lock().unwrap();
        if files.range(prefix.clone()..).next().is_some_and(|(k, _)| k.starts_with(&prefix)) {
            return true;
        }
        drop(files);
        let dirs = self.dirs.lock().unwrap();
        dirs.contains(path) || dirs.range(prefix.clone()..).next().is_some_and(|d| d.starts_with(&prefix))
    }
}

impl Vfs for MemoryVfs {
    fn exists(&self, path: &str) -> bool {
        let is_file = self.files.lock().unwrap().contains_key(path);
        is_file || self.is_implied_dir(path)
    }

    fn is_directory(&self, path: &str) -> bool {
        let is_file = self.files.lock().unwrap().contains_key(path);
        !is_file && self.is_implied_dir(path)
    }

    fn read_dir(&self, path: &str) -> Result<Vec<String>> {
        if !self.is_directory(path) {
            return Err(NextVfsError::VfsError(format!("not a directory: {}", path)));
        }
        let prefix = if path == "/" { "/".to_string() } else { format!("{}/", path) };
        let mut children = BTreeSet::new();
        for key in self.files.lock().unwrap().keys() {
            if let Some(rest) = key.strip_prefix(&prefix) {
                if let Some(name) = rest.split('/').next() {
                    if !name.is_empty() {
                        children.insert(name.to_string());
                    }
                }
            }
        }
        for dir in self.dirs.lock().unwrap().iter() {
            if let Some(rest) = dir.strip_prefix(&prefix) {
                if let Some(name) = rest.split('/').next() {
                    if !name.is_empty() {
                        children.insert(name.to_string());
                    }
                }
            }
        }
        Ok(children.into_iter().collect())
    }

    fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| NextVfsError::VfsError(format!("no such file: {}", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/app/page.tsx"), "/app/page.tsx");
        assert_eq!(normalize_path("app/page.tsx"), "/app/page.tsx");
        assert_eq!(normalize_path("/app//nested/./page.tsx"), "/app/nested/page.tsx");
        assert_eq!(normalize_path("/app/sub/../page.tsx"), "/app/page.tsx");
        assert_eq!(normalize_path(r"\app\page.tsx"), "/app/page.tsx");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_path_helpers() {
        assert_eq!(join_path("/", "app"), "/app");
        assert_eq!(join_path("/app", "users"), "/app/users");
        assert_eq!(parent_dir("/app/users"), "/app");
        assert_eq!(parent_dir("/app"), "/");
        assert_eq!(file_extension("/app/page.tsx"), Some(".tsx"));
        assert_eq!(file_extension("/app/[...slug].ts"), Some(".ts"));
        assert_eq!(file_extension("/app/.env"), None);
        assert_eq!(file_extension("/app/page"), None);
    }

    #[test]
    fn test_implied_directories() {
        let vfs = MemoryVfs::new();
        vfs.add_file("/app/users/[id]/page.tsx", "x");

        assert!(vfs.exists("/app/users/[id]/page.tsx"));
        assert!(vfs.exists("/app/users/[id]"));
        assert!(vfs.is_directory("/app"));
        assert!(vfs.is_directory("/app/users/[id]"));
        assert!(!vfs.is_directory("/app/users/[id]/page.tsx"));
        assert!(!vfs.exists("/app/posts"));
    }

    #[test]
    fn test_read_dir_lists_direct_children() {
        let vfs = MemoryVfs::new();
        vfs.add_file("/app/page.tsx", "x");
        vfs.add_file("/app/users/page.tsx", "x");
        vfs.add_file("/app/users/settings/page.tsx", "x");

        let children = vfs.read_dir("/app").unwrap();
        assert_eq!(children, vec!["page.tsx".to_string(), "users".to_string()]);

        let nested = vfs.read_dir("/app/users").unwrap();
        assert_eq!(nested, vec!["page.tsx".to_string(), "settings".to_string()]);
    }

    #[test]
    fn test_read_dir_on_non_directory() {
        let vfs = MemoryVfs::new();
        vfs.add_file("/app/page.tsx", "x");

        assert!(vfs.read_dir("/app/page.tsx").is_err());
        assert!(vfs.read_dir("/missing").is_err());
    }

    #[test]
    fn test_explicit_empty_directory() {
        let vfs = MemoryVfs::new();
        vfs.add_dir("/public");

        assert!(vfs.is_directory("/public"));
        assert_eq!(vfs.read_dir("/public").unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_read_file() {
        let vfs = MemoryVfs::new();
        vfs.add_file("/data.json", "{}");

        assert_eq!(vfs.read_file("/data.json").unwrap(), b"{}");
        assert!(vfs.read_file("/missing.json").is_err());

        vfs.remove_file("/data.json");
        assert!(vfs.read_file("/data.json").is_err());
    }

    #[test]
    fn test_root_is_always_a_directory() {
        let vfs = MemoryVfs::new();
        assert!(vfs.is_directory("/"));
        assert_eq!(vfs.read_dir("/").unwrap(), Vec::<String>::new());

        vfs.add_file("/a.txt", "a");
        assert_eq!(vfs.read_dir("/").unwrap(), vec!["a.txt".to_string()]);
    }
}

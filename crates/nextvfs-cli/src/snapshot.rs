// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Directory snapshotting.
//!
//! The routing core only reads from a [`MemoryVfs`]; the CLI bridges the
//! gap by copying a real project tree into one. `node_modules`, build
//! output and dot-directories are skipped — they can be enormous and
//! never participate in routing.

use std::path::Path;

use anyhow::Context;
use nextvfs::{normalize_path, MemoryVfs};
use walkdir::{DirEntry, WalkDir};

const SKIPPED_DIRS: &[&str] = &["node_modules", ".next", "dist", "out", "target"];

/// Copies a project directory into a fresh in-memory VFS.
///
/// Paths inside the VFS are rooted at `/`, relative to `root`.
pub fn snapshot_dir(root: &Path) -> anyhow::Result<MemoryVfs> {
    let vfs = MemoryVfs::new();
    let walker = WalkDir::new(root).into_iter().filter_entry(keep_entry);

    for entry in walker {
        let entry = entry.context("failed to walk project directory")?;
        let relative = entry
            .path()
            .strip_prefix(root)
            .context("walked entry escaped the project root")?;
        if relative.as_os_str().is_empty() {
            continue;
        }
        let virtual_path = normalize_path(&format!("/{}", relative.to_string_lossy()));
        if entry.file_type().is_dir() {
            vfs.add_dir(&virtual_path);
        } else if entry.file_type().is_file() {
            let content = std::fs::read(entry.path())
                .with_context(|| format!("failed to read {}", entry.path().display()))?;
            vfs.add_file(&virtual_path, content);
        }
    }

    tracing::debug!(files = vfs.file_count(), root = %root.display(), "snapshotted project");
    Ok(vfs)
}

fn keep_entry(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    !name.starts_with('.') && !SKIPPED_DIRS.contains(&name.as_ref())
}

/// Locates the App Router root inside a snapshotted project, preferring
/// `/app` over `/src/app`.
pub fn find_app_dir(vfs: &MemoryVfs) -> Option<String> {
    ["/app", "/src/app"]
        .into_iter()
        .find(|dir| nextvfs::has_app_router(vfs, dir))
        .map(|dir| dir.to_string())
}

/// Locates the Pages Router root inside a snapshotted project, preferring
/// `/pages` over `/src/pages`.
pub fn find_pages_dir(vfs: &MemoryVfs) -> Option<String> {
    use nextvfs::Vfs;
    ["/pages", "/src/pages"]
        .into_iter()
        .find(|dir| vfs.is_directory(dir))
        .map(|dir| dir.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nextvfs::Vfs;
    use std::fs;

    #[test]
    fn test_snapshot_copies_files_and_skips_node_modules() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("app/users/[id]")).unwrap();
        fs::create_dir_all(dir.path().join("node_modules/react")).unwrap();
        fs::write(dir.path().join("app/page.tsx"), "x").unwrap();
        fs::write(dir.path().join("app/users/[id]/page.tsx"), "x").unwrap();
        fs::write(dir.path().join("node_modules/react/index.js"), "x").unwrap();

        let vfs = snapshot_dir(dir.path()).unwrap();
        assert!(vfs.exists("/app/page.tsx"));
        assert!(vfs.exists("/app/users/[id]/page.tsx"));
        assert!(!vfs.exists("/node_modules/react/index.js"));
    }

    #[test]
    fn test_find_routing_roots() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("src/app")).unwrap();
        fs::create_dir_all(dir.path().join("src/pages")).unwrap();
        fs::write(dir.path().join("src/app/page.tsx"), "x").unwrap();
        fs::write(dir.path().join("src/pages/about.tsx"), "x").unwrap();

        let vfs = snapshot_dir(dir.path()).unwrap();
        assert_eq!(find_app_dir(&vfs), Some("/src/app".to_string()));
        assert_eq!(find_pages_dir(&vfs), Some("/src/pages".to_string()));
    }
}

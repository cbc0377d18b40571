// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! The `resolve` command: map a URL pathname onto project files.

use std::path::Path;

use nextvfs::{
    normalize_path, resolve_api_file, resolve_app_route, resolve_app_route_handler,
    resolve_page_file, AppRoute, MemoryVfs,
};
use serde::Serialize;

use crate::snapshot::{find_app_dir, find_pages_dir, snapshot_dir};

/// What a pathname resolved to, in precedence order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Resolution {
    /// An App Router page with its layouts and params.
    AppRoute {
        /// The resolved route record.
        #[serde(flatten)]
        route: AppRoute,
    },
    /// An App Router `route.<ext>` handler.
    AppRouteHandler {
        /// The handler file.
        handler: String,
    },
    /// A Pages Router API handler.
    ApiFile {
        /// The handler file.
        handler: String,
    },
    /// A Pages Router page file.
    PageFile {
        /// The page file.
        page: String,
    },
    /// Nothing in the project matches the pathname.
    NotFound,
}

/// Resolves `pathname` against a snapshotted project.
///
/// Precedence mirrors what a dev server does per request: Pages Router
/// API handlers for `/api/...` pathnames, then App Router pages, then App
/// Router handlers, then Pages Router pages.
pub fn resolve_in_vfs(vfs: &MemoryVfs, pathname: &str) -> Resolution {
    let app_dir = find_app_dir(vfs);
    let pages_dir = find_pages_dir(vfs);

    if pathname.starts_with("/api/") {
        if let Some(ref pages_dir) = pages_dir {
            if let Some(handler) = resolve_api_file(vfs, pages_dir, pathname) {
                return Resolution::ApiFile { handler };
            }
        }
    }
    if let Some(ref app_dir) = app_dir {
        if let Some(route) = resolve_app_route(vfs, app_dir, pathname) {
            return Resolution::AppRoute { route };
        }
        if let Some(handler) = resolve_app_route_handler(vfs, app_dir, pathname) {
            return Resolution::AppRouteHandler { handler };
        }
    }
    if let Some(ref pages_dir) = pages_dir {
        if let Some(page) = resolve_page_file(vfs, pages_dir, pathname) {
            return Resolution::PageFile { page };
        }
    }
    Resolution::NotFound
}

/// Runs the `resolve` command and prints the outcome as pretty JSON.
pub fn run(dir: &Path, pathname: &str) -> anyhow::Result<()> {
    let vfs = snapshot_dir(dir)?;
    let pathname = normalize_path(pathname);
    let resolution = resolve_in_vfs(&vfs, &pathname);
    println!("{}", serde_json::to_string_pretty(&resolution)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_api_before_app() {
        let vfs = MemoryVfs::new();
        vfs.add_file("/pages/api/users.ts", "x");
        vfs.add_file("/app/page.tsx", "x");
        vfs.add_file("/app/api/users/route.ts", "x");

        let resolution = resolve_in_vfs(&vfs, "/api/users");
        assert_eq!(
            resolution,
            Resolution::ApiFile {
                handler: "/pages/api/users.ts".to_string()
            }
        );
    }

    #[test]
    fn test_app_route_beats_pages_file() {
        let vfs = MemoryVfs::new();
        vfs.add_file("/app/about/page.tsx", "x");
        vfs.add_file("/app/layout.tsx", "x");
        vfs.add_file("/pages/about.tsx", "x");

        match resolve_in_vfs(&vfs, "/about") {
            Resolution::AppRoute { route } => assert_eq!(route.page, "/app/about/page.tsx"),
            other => panic!("expected an app route, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found() {
        let vfs = MemoryVfs::new();
        vfs.add_file("/app/page.tsx", "x");

        assert_eq!(resolve_in_vfs(&vfs, "/nope"), Resolution::NotFound);
    }
}

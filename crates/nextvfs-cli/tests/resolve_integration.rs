// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Integration tests for the snapshot-and-resolve pipeline.
//!
//! These tests build a realistic project tree on disk, snapshot it into
//! the in-memory VFS and drive the actual resolution code end to end.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use nextvfs::{ParamValue, Vfs};
use nextvfs_cli::commands::config::report;
use nextvfs_cli::commands::resolve::{resolve_in_vfs, Resolution};
use nextvfs_cli::commands::routes::{collect_app_routes, collect_pages_routes};
use nextvfs_cli::snapshot::{find_app_dir, find_pages_dir, snapshot_dir};

/// Create a mixed App/Pages Router project in a temp directory.
fn setup_test_project(dir: &Path) {
    fs::create_dir_all(dir.join("app/(marketing)/about")).unwrap();
    fs::create_dir_all(dir.join("app/users/[id]")).unwrap();
    fs::create_dir_all(dir.join("app/docs/[...slug]")).unwrap();
    fs::create_dir_all(dir.join("app/api/items")).unwrap();
    fs::create_dir_all(dir.join("pages/api")).unwrap();
    fs::create_dir_all(dir.join("pages/blog")).unwrap();
    fs::create_dir_all(dir.join("node_modules/react")).unwrap();

    fs::write(
        dir.join("app/layout.tsx"),
        "export default function RootLayout({ children }) { return children; }",
    )
    .unwrap();
    fs::write(
        dir.join("app/page.tsx"),
        "export default function Home() { return <h1>Home</h1>; }",
    )
    .unwrap();
    fs::write(dir.join("app/loading.tsx"), "export default () => null;").unwrap();
    fs::write(
        dir.join("app/(marketing)/about/page.tsx"),
        "export default function About() { return <h1>About</h1>; }",
    )
    .unwrap();
    fs::write(
        dir.join("app/users/[id]/page.tsx"),
        "export default function User({ params }) { return params.id; }",
    )
    .unwrap();
    fs::write(
        dir.join("app/docs/[...slug]/page.tsx"),
        "export default function Docs({ params }) { return params.slug.join('/'); }",
    )
    .unwrap();
    fs::write(
        dir.join("app/api/items/route.ts"),
        "export async function GET() { return Response.json([]); }",
    )
    .unwrap();

    fs::write(
        dir.join("pages/blog/[slug].tsx"),
        "export default function Post() { return null; }",
    )
    .unwrap();
    fs::write(
        dir.join("pages/api/hello.ts"),
        "export default function handler(req, res) { res.end('hi'); }",
    )
    .unwrap();

    fs::write(
        dir.join("next.config.ts"),
        "import type { NextConfig } from \"next\";\nconst config: NextConfig = { assetPrefix: \"/static\", basePath: \"/site\" };\nexport default config;\n",
    )
    .unwrap();
    fs::write(
        dir.join("tailwind.config.ts"),
        "export default { theme: { colors: { brand: \"#f00\" } } }\n",
    )
    .unwrap();

    fs::write(dir.join("node_modules/react/index.js"), "module.exports = {};").unwrap();
}

#[test]
fn test_snapshot_excludes_dependencies() {
    let dir = tempdir().unwrap();
    setup_test_project(dir.path());

    let vfs = snapshot_dir(dir.path()).unwrap();
    assert!(vfs.exists("/app/page.tsx"));
    assert!(!vfs.exists("/node_modules/react/index.js"));
}

#[test]
fn test_resolves_app_routes_end_to_end() {
    let dir = tempdir().unwrap();
    setup_test_project(dir.path());
    let vfs = snapshot_dir(dir.path()).unwrap();

    assert_eq!(find_app_dir(&vfs), Some("/app".to_string()));

    match resolve_in_vfs(&vfs, "/") {
        Resolution::AppRoute { route } => {
            assert_eq!(route.page, "/app/page.tsx");
            assert_eq!(route.layouts, vec!["/app/layout.tsx".to_string()]);
            assert_eq!(route.loading, Some("/app/loading.tsx".to_string()));
        }
        other => panic!("expected an app route, got {:?}", other),
    }

    match resolve_in_vfs(&vfs, "/about") {
        Resolution::AppRoute { route } => {
            assert_eq!(route.page, "/app/(marketing)/about/page.tsx");
        }
        other => panic!("expected an app route, got {:?}", other),
    }

    match resolve_in_vfs(&vfs, "/users/42") {
        Resolution::AppRoute { route } => {
            assert_eq!(route.page, "/app/users/[id]/page.tsx");
            assert_eq!(
                route.params.get("id"),
                Some(&ParamValue::Single("42".to_string()))
            );
        }
        other => panic!("expected an app route, got {:?}", other),
    }

    match resolve_in_vfs(&vfs, "/docs/a/b") {
        Resolution::AppRoute { route } => {
            assert_eq!(
                route.params.get("slug"),
                Some(&ParamValue::List(vec!["a".to_string(), "b".to_string()]))
            );
        }
        other => panic!("expected an app route, got {:?}", other),
    }
}

#[test]
fn test_resolves_handlers_and_pages_end_to_end() {
    let dir = tempdir().unwrap();
    setup_test_project(dir.path());
    let vfs = snapshot_dir(dir.path()).unwrap();

    assert_eq!(find_pages_dir(&vfs), Some("/pages".to_string()));

    // Pages Router API handlers outrank App Router handlers for /api/...
    assert_eq!(
        resolve_in_vfs(&vfs, "/api/hello"),
        Resolution::ApiFile {
            handler: "/pages/api/hello.ts".to_string()
        }
    );

    // App Router handler where the Pages Router has nothing
    assert_eq!(
        resolve_in_vfs(&vfs, "/api/items"),
        Resolution::AppRouteHandler {
            handler: "/app/api/items/route.ts".to_string()
        }
    );

    // Pages Router dynamic page
    assert_eq!(
        resolve_in_vfs(&vfs, "/blog/my-post"),
        Resolution::PageFile {
            page: "/pages/blog/[slug].tsx".to_string()
        }
    );

    assert_eq!(resolve_in_vfs(&vfs, "/nothing/here"), Resolution::NotFound);
}

#[test]
fn test_route_listing() {
    let dir = tempdir().unwrap();
    setup_test_project(dir.path());
    let vfs = snapshot_dir(dir.path()).unwrap();

    let app_routes = collect_app_routes(&vfs, "/app");
    let patterns: Vec<&str> = app_routes.iter().map(|e| e.pattern.as_str()).collect();
    assert!(patterns.contains(&"/"));
    assert!(patterns.contains(&"/about"));
    assert!(patterns.contains(&"/users/[id]"));
    assert!(patterns.contains(&"/docs/[...slug]"));
    assert!(patterns.contains(&"/api/items"));

    let pages_routes = collect_pages_routes(&vfs, "/pages");
    let patterns: Vec<&str> = pages_routes.iter().map(|e| e.pattern.as_str()).collect();
    assert!(patterns.contains(&"/blog/[slug]"));
    assert!(patterns.contains(&"/api/hello"));
}

#[test]
fn test_config_recovery_end_to_end() {
    let dir = tempdir().unwrap();
    setup_test_project(dir.path());
    let vfs = snapshot_dir(dir.path()).unwrap();

    let report = report(&vfs);
    assert_eq!(report.next.asset_prefix, Some("/static".to_string()));
    assert_eq!(report.next.base_path, Some("/site".to_string()));
    assert!(report.tailwind.success);
    assert!(report
        .tailwind
        .config_script
        .contains("{ theme: { colors: { brand: \"#f00\" } } }"));
}

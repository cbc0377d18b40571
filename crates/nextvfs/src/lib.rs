// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

// Warn on missing documentation for public items
#![warn(missing_docs)]

//! # nextvfs
//!
//! Next.js-compatible route resolution and config recovery over an
//! in-memory filesystem.
//!
//! This crate is the routing core of an in-process Next.js development
//! server: it maps URL paths onto the page, layout and handler files of a
//! project (App Router and Pages Router), and statically recovers
//! deployment-affecting values from `next.config.*` and
//! `tailwind.config.*` sources — all against a virtual filesystem,
//! without touching a real disk or executing any user code.
//!
//! ## Features
//!
//! - App Router resolution: pages, nested layouts, route groups, dynamic
//!   and catch-all segments, `loading`/`error`/`not-found` convention
//!   files, `route.<ext>` handlers
//! - Pages Router resolution: pages, directory indexes, dynamic and
//!   catch-all files, `/api` handlers
//! - Arbitrary module resolution with extension fallback
//! - Static `next.config.*` value recovery (AST walk, regex last resort)
//! - Verbatim Tailwind theme-object extraction
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use nextvfs::{resolve_app_route, MemoryVfs};
//!
//! let vfs = MemoryVfs::new();
//! vfs.add_file("/app/layout.tsx", "export default function Layout() {}");
//! vfs.add_file("/app/users/[id]/page.tsx", "export default function Page() {}");
//!
//! let route = resolve_app_route(&vfs, "/app", "/users/123").unwrap();
//! assert_eq!(route.page, "/app/users/[id]/page.tsx");
//! ```

/// App Router resolution (pages, layouts, route groups, handlers).
pub mod app_router;
/// Route-resolution caching.
pub mod cache;
/// Error types.
pub mod error;
/// Static `next.config.*` value recovery.
pub mod next_config;
/// Pages Router resolution (pages and API handlers).
pub mod pages_router;
/// Module-file resolution and extension priority tables.
pub mod resolver;
/// Route segment classification.
pub mod segment;
/// TypeScript-surface stripping for config sources.
pub mod strip;
/// Tailwind config recovery.
pub mod tailwind;
/// The virtual-filesystem contract and in-memory implementation.
pub mod vfs;

pub use app_router::{has_app_router, resolve_app_route, resolve_app_route_handler, AppRoute, ParamValue};
pub use cache::{CachedRoute, RouteCache};
pub use error::{NextVfsError, Result};
pub use next_config::{load_next_config, parse_next_config_value, NextConfigSnapshot};
pub use pages_router::{resolve_api_file, resolve_page_file};
pub use resolver::{
    needs_transform, resolve_file_with_extension, API_EXTENSIONS, MODULE_EXTENSIONS,
    PAGE_EXTENSIONS,
};
pub use segment::SegmentKind;
pub use strip::strip_type_syntax;
pub use tailwind::{load_tailwind_config, TailwindConfig};
pub use vfs::{file_extension, join_path, normalize_path, parent_dir, MemoryVfs, Vfs};

// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! App Router resolution.
//!
//! This module maps a URL pathname onto the page, layouts and convention
//! files of an App Router directory tree:
//!
//! - `app/page.tsx` → `/`
//! - `app/users/[id]/page.tsx` → `/users/:id` (dynamic)
//! - `app/docs/[...slug]/page.tsx` → `/docs/*` (catch-all)
//! - `app/(marketing)/about/page.tsx` → `/about` (route groups are
//!   transparent in the URL but contribute their layouts)
//! - `layout.<ext>` files accumulate outermost-first along the walk
//! - `loading` / `error` / `not-found` files resolve by nearest-ancestor
//!   lookup from the matched page's directory
//!
//! The walk is a recursive backtracking search over the live VFS. At each
//! level an exact child wins over any dynamic sibling; among dynamic
//! siblings a single parameter wins over a catch-all, which wins over an
//! optional catch-all. VFS read errors along the way are treated as "no
//! such entry"; the resolver never fails, it only declines to match.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::resolver::{probe_with_extensions, API_EXTENSIONS, PAGE_EXTENSIONS};
use crate::segment::SegmentKind;
use crate::vfs::{join_path, parent_dir, Vfs};

/// A bound route parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// A single URL segment bound by a `[name]` directory.
    Single(String),
    /// The remaining URL segments bound by a `[...name]` or `[[...name]]`
    /// directory.
    List(Vec<String>),
}

/// A resolved App Router route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRoute {
    /// The matched `page.<ext>` file.
    pub page: String,

    /// Layout files applied around the page, outermost-first, distinct.
    pub layouts: Vec<String>,

    /// Parameters bound by dynamic segments along the match.
    pub params: BTreeMap<String, ParamValue>,

    /// Nearest `loading.<ext>` file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loading: Option<String>,

    /// Nearest `error.<ext>` file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Nearest `not-found.<ext>` file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub not_found: Option<String>,
}

/// Accumulated state of one branch of the walk.
///
/// Cloned at every branch point so that a failed branch leaves no trace
/// in its siblings.
#[derive(Debug, Clone, Default)]
struct WalkState {
    layouts: Vec<String>,
    params: BTreeMap<String, ParamValue>,
}

impl WalkState {
    fn push_layout(&mut self, layout: String) {
        if !self.layouts.contains(&layout) {
            self.layouts.push(layout);
        }
    }
}

/// Returns true if `app_dir` hosts an App Router tree.
///
/// True iff `page.<ext>` or `layout.<ext>` exists directly under
/// `app_dir`, or a route-group child holds a `page.<ext>`. A missing
/// directory is simply `false`.
pub fn has_app_router(vfs: &dyn Vfs, app_dir: &str) -> bool {
    if !vfs.is_directory(app_dir) {
        return false;
    }
    if probe_with_extensions(vfs, app_dir, "page", PAGE_EXTENSIONS).is_some() {
        return true;
    }
    if probe_with_extensions(vfs, app_dir, "layout", PAGE_EXTENSIONS).is_some() {
        return true;
    }
    for group_dir in group_children(vfs, app_dir) {
        if probe_with_extensions(vfs, &group_dir, "page", PAGE_EXTENSIONS).is_some() {
            return true;
        }
    }
    false
}

/// Resolves a pathname against an App Router tree.
///
/// Returns the matched page, the layout chain (outermost-first), the
/// bound parameters and the nearest convention files, or `None` when
/// nothing under `app_dir` matches.
pub fn resolve_app_route(vfs: &dyn Vfs, app_dir: &str, pathname: &str) -> Option<AppRoute> {
    if !vfs.is_directory(app_dir) {
        return None;
    }
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    let state = WalkState::default();
    let (page, state) = walk(vfs, app_dir, &segments, "page", PAGE_EXTENSIONS, true, state)?;

    let page_dir = parent_dir(&page);
    let route = AppRoute {
        loading: nearest_convention(vfs, &page_dir, app_dir, "loading"),
        error: nearest_convention(vfs, &page_dir, app_dir, "error"),
        not_found: nearest_convention(vfs, &page_dir, app_dir, "not-found"),
        page,
        layouts: state.layouts,
        params: state.params,
    };
    tracing::debug!(pathname, page = %route.page, "resolved app route");
    Some(route)
}

/// Resolves a pathname to a `route.<ext>` handler file.
///
/// Walks the tree exactly like [`resolve_app_route`] — route groups are
/// transparent, dynamic segments apply with the same tie-break order —
/// but probes `route.<ext>` with the API extension priority and returns
/// only the handler path.
pub fn resolve_app_route_handler(vfs: &dyn Vfs, app_dir: &str, pathname: &str) -> Option<String> {
    if !vfs.is_directory(app_dir) {
        return None;
    }
    let segments: Vec<&str> = pathname.split('/').filter(|s| !s.is_empty()).collect();
    let state = WalkState::default();
    walk(vfs, app_dir, &segments, "route", API_EXTENSIONS, false, state).map(|(handler, _)| handler)
}

/// One step of the backtracking walk.
///
/// `target` is the terminal file stem (`"page"` or `"route"`), probed
/// with `extensions`. Layout collection is skipped for handler walks.
fn walk(
    vfs: &dyn Vfs,
    dir: &str,
    segments: &[&str],
    target: &str,
    extensions: &[&str],
    collect_layouts: bool,
    mut state: WalkState,
) -> Option<(String, WalkState)> {
    if collect_layouts {
        if let Some(layout) = probe_with_extensions(vfs, dir, "layout", PAGE_EXTENSIONS) {
            state.push_layout(layout);
        }
    }

    if segments.is_empty() {
        return finish(vfs, dir, target, extensions, collect_layouts, state);
    }

    let head = segments[0];
    let rest = &segments[1..];

    // Exact child wins over everything else
    let exact = join_path(dir, head);
    if vfs.is_directory(&exact) {
        if let Some(found) = walk(vfs, &exact, rest, target, extensions, collect_layouts, state.clone()) {
            return Some(found);
        }
    }

    // Route groups at this level: transparent in the URL, their layout
    // applies to anything matched through them
    for group_dir in group_children(vfs, dir) {
        let mut group_state = state.clone();
        if collect_layouts {
            if let Some(layout) = probe_with_extensions(vfs, &group_dir, "layout", PAGE_EXTENSIONS) {
                group_state.push_layout(layout);
            }
        }
        let group_exact = join_path(&group_dir, head);
        if vfs.is_directory(&group_exact) {
            if let Some(found) = walk(
                vfs,
                &group_exact,
                rest,
                target,
                extensions,
                collect_layouts,
                group_state.clone(),
            ) {
                return Some(found);
            }
        }
        if let Some(found) = walk_dynamic(
            vfs,
            &group_dir,
            head,
            rest,
            target,
            extensions,
            collect_layouts,
            &group_state,
        ) {
            return Some(found);
        }
    }

    walk_dynamic(vfs, dir, head, rest, target, extensions, collect_layouts, &state)
}

/// Terminal case: no URL segments left under `dir`.
fn finish(
    vfs: &dyn Vfs,
    dir: &str,
    target: &str,
    extensions: &[&str],
    collect_layouts: bool,
    state: WalkState,
) -> Option<(String, WalkState)> {
    if let Some(page) = probe_with_extensions(vfs, dir, target, extensions) {
        return Some((page, state));
    }

    // Route groups are transparent: a page one group level down still
    // serves this URL
    for group_dir in group_children(vfs, dir) {
        let mut group_state = state.clone();
        if collect_layouts {
            if let Some(layout) = probe_with_extensions(vfs, &group_dir, "layout", PAGE_EXTENSIONS) {
                group_state.push_layout(layout);
            }
        }
        if let Some(page) = probe_with_extensions(vfs, &group_dir, target, extensions) {
            return Some((page, group_state));
        }
    }

    // An optional catch-all child also satisfies the zero-segment case,
    // binding its name to the empty list
    for child in children_of(vfs, dir) {
        if let SegmentKind::OptionalCatchAll(name) = SegmentKind::parse(&child) {
            let child_dir = join_path(dir, &child);
            if !vfs.is_directory(&child_dir) {
                continue;
            }
            let mut child_state = state.clone();
            child_state.params.insert(name, ParamValue::List(Vec::new()));
            if let Some(found) = walk(vfs, &child_dir, &[], target, extensions, collect_layouts, child_state) {
                return Some(found);
            }
        }
    }

    None
}

/// Dynamic children of `dir`, in tie-break order: single parameter, then
/// catch-all, then optional catch-all. Within one tier, enumeration order
/// decides (documented, not contractual).
#[allow(clippy::too_many_arguments)]
fn walk_dynamic(
    vfs: &dyn Vfs,
    dir: &str,
    head: &str,
    rest: &[&str],
    target: &str,
    extensions: &[&str],
    collect_layouts: bool,
    state: &WalkState,
) -> Option<(String, WalkState)> {
    let children = children_of(vfs, dir);

    for child in &children {
        if let SegmentKind::Dynamic(name) = SegmentKind::parse(child) {
            let child_dir = join_path(dir, child);
            if !vfs.is_directory(&child_dir) {
                continue;
            }
            let mut child_state = state.clone();
            child_state.params.insert(name, ParamValue::Single(head.to_string()));
            if let Some(found) = walk(vfs, &child_dir, rest, target, extensions, collect_layouts, child_state) {
                return Some(found);
            }
        }
    }

    for child in &children {
        if let SegmentKind::CatchAll(name) = SegmentKind::parse(child) {
            let child_dir = join_path(dir, child);
            if !vfs.is_directory(&child_dir) {
                continue;
            }
            let mut child_state = state.clone();
            child_state.params.insert(name, ParamValue::List(collect_remaining(head, rest)));
            if let Some(found) = walk(vfs, &child_dir, &[], target, extensions, collect_layouts, child_state) {
                return Some(found);
            }
        }
    }

    for child in &children {
        if let SegmentKind::OptionalCatchAll(name) = SegmentKind::parse(child) {
            let child_dir = join_path(dir, child);
            if !vfs.is_directory(&child_dir) {
                continue;
            }
            let mut child_state = state.clone();
            child_state.params.insert(name, ParamValue::List(collect_remaining(head, rest)));
            if let Some(found) = walk(vfs, &child_dir, &[], target, extensions, collect_layouts, child_state) {
                return Some(found);
            }
        }
    }

    None
}

fn collect_remaining(head: &str, rest: &[&str]) -> Vec<String> {
    std::iter::once(head)
        .chain(rest.iter().copied())
        .map(|s| s.to_string())
        .collect()
}

/// Walks up from `start_dir` toward `app_dir` (inclusive), returning the
/// first `<dir>/<name>.<ext>` that exists.
fn nearest_convention(vfs: &dyn Vfs, start_dir: &str, app_dir: &str, name: &str) -> Option<String> {
    let mut dir = start_dir.to_string();
    loop {
        if let Some(found) = probe_with_extensions(vfs, &dir, name, PAGE_EXTENSIONS) {
            return Some(found);
        }
        if dir == app_dir || dir == "/" {
            return None;
        }
        dir = parent_dir(&dir);
    }
}

/// Direct children of a directory; read errors count as an empty listing.
fn children_of(vfs: &dyn Vfs, dir: &str) -> Vec<String> {
    vfs.read_dir(dir).unwrap_or_default()
}

/// Direct route-group children of a directory, as full paths.
fn group_children(vfs: &dyn Vfs, dir: &str) -> Vec<String> {
    children_of(vfs, dir)
        .into_iter()
        .filter(|name| crate::segment::is_route_group(name))
        .map(|name| join_path(dir, &name))
        .filter(|path| vfs.is_directory(path))
        .collect()
}

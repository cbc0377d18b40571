// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Route segment classification.
//!
//! Directory names under a routing root fall into five shapes:
//! - `blog` → literal, matches the URL segment exactly
//! - `(marketing)` → route group, scopes layouts without consuming a URL
//!   segment
//! - `[slug]` → dynamic, consumes one URL segment
//! - `[...slug]` → catch-all, consumes all remaining URL segments
//! - `[[...slug]]` → optional catch-all, consumes zero or more remaining
//!   URL segments

/// Classification of a single route segment (directory or file stem).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentKind {
    /// Static segment (e.g. `blog`).
    Literal(String),
    /// Route group (e.g. `(marketing)`).
    Group(String),
    /// Dynamic parameter (e.g. `[slug]`).
    Dynamic(String),
    /// Catch-all parameter (e.g. `[...slug]`).
    CatchAll(String),
    /// Optional catch-all parameter (e.g. `[[...slug]]`).
    OptionalCatchAll(String),
}

impl SegmentKind {
    /// Parses a filesystem segment into a [`SegmentKind`].
    ///
    /// A dynamic segment name must not contain `.`; anything bracketed
    /// that does not fit one of the dynamic shapes is treated as literal.
    pub fn parse(segment: &str) -> Self {
        if let Some(name) = segment.strip_prefix("[[...").and_then(|s| s.strip_suffix("]]")) {
            if !name.is_empty() && !name.contains('.') {
                return SegmentKind::OptionalCatchAll(name.to_string());
            }
        }
        if let Some(name) = segment.strip_prefix("[...").and_then(|s| s.strip_suffix(']')) {
            if !name.is_empty() && !name.contains('.') {
                return SegmentKind::CatchAll(name.to_string());
            }
        }
        if let Some(name) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            if !name.is_empty() && !name.contains('.') && !name.contains('[') && !name.contains(']') {
                return SegmentKind::Dynamic(name.to_string());
            }
        }
        if let Some(name) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            if !name.is_empty() && !name.contains('(') && !name.contains(')') {
                return SegmentKind::Group(name.to_string());
            }
        }
        SegmentKind::Literal(segment.to_string())
    }

    /// Returns true if this segment is a route group.
    pub fn is_group(&self) -> bool {
        matches!(self, SegmentKind::Group(_))
    }
}

/// Returns true if a directory name has the route-group shape.
pub fn is_route_group(name: &str) -> bool {
    SegmentKind::parse(name).is_group()
}

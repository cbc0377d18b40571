// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Tailwind config recovery.
//!
//! The user's theme object is lifted out of `tailwind.config.*` as a
//! **verbatim source substring** — never parsed and re-serialized — so
//! comments, property order, function references and computed strings
//! survive exactly as authored. The substring is found by locating
//! `export default` outside strings and comments and then matching the
//! braces of the following object literal, respecting string literals and
//! escapes.
//!
//! The extracted object is wrapped into a `<script>` element that assigns
//! it to the `tailwind.config` runtime global; that snippet is the
//! contract with the downstream HTML generator. Authors who reference
//! variables inside the object get those references preserved verbatim,
//! to be resolved by the host JavaScript environment at runtime.
//!
//! Unlike the `next.config.*` value parser there is no regex fallback
//! here: the snippet must be a complete balanced object, and a
//! regex-found fragment could not guarantee that.

use serde::Serialize;

use crate::error::{NextVfsError, Result};
use crate::strip::strip_type_syntax;
use crate::vfs::{join_path, Vfs};

/// Tailwind config basenames probed by [`load_tailwind_config`], in
/// priority order.
pub const TAILWIND_CONFIG_BASENAMES: &[&str] = &[
    "tailwind.config.ts",
    "tailwind.config.js",
    "tailwind.config.mjs",
];

/// Outcome of a Tailwind config extraction.
///
/// Absence of a config file is success with an empty script. Only read
/// and extraction failures set `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TailwindConfig {
    /// Injectable `<script>` snippet configuring the runtime CDN global,
    /// or empty when the project has no Tailwind config.
    pub config_script: String,
    /// False only when a config file exists but could not be read or its
    /// exported object could not be extracted.
    pub success: bool,
    /// Failure detail when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TailwindConfig {
    fn empty() -> Self {
        Self {
            config_script: String::new(),
            success: true,
            error: None,
        }
    }

    fn failure(message: String) -> Self {
        Self {
            config_script: String::new(),
            success: false,
            error: Some(message),
        }
    }
}

/// Locates the project's Tailwind config in the VFS and recovers the
/// exported theme object as an injectable snippet.
pub fn load_tailwind_config(vfs: &dyn Vfs, root: &str) -> TailwindConfig {
    let Some(path) = TAILWIND_CONFIG_BASENAMES
        .iter()
        .map(|basename| join_path(root, basename))
        .find(|path| vfs.exists(path))
    else {
        return TailwindConfig::empty();
    };

    let source = match vfs
        .read_file(&path)
        .and_then(|bytes| String::from_utf8(bytes).map_err(NextVfsError::from))
    {
        Ok(source) => source,
        Err(err) => return TailwindConfig::failure(err.to_string()),
    };

    let stripped = strip_type_syntax(&source);
    match extract_default_export_object(&stripped) {
        Ok(object) => {
            tracing::debug!(path = %path, "extracted tailwind config object");
            TailwindConfig {
                config_script: format!("<script>\n  tailwind.config = {};\n</script>", object),
                success: true,
                error: None,
            }
        }
        Err(err) => TailwindConfig::failure(err.to_string()),
    }
}

/// Extracts the object literal following `export default` as a verbatim
/// substring, braces balanced, string literals respected.
pub(crate) fn extract_default_export_object(source: &str) -> Result<&str> {
    let export_idx = find_export_default(source).ok_or_else(|| {
        NextVfsError::ExtractionError("no `export default` found in config source".to_string())
    })?;

    let after = export_idx + "export default".len();
    let rest = &source[after..];
    let brace_idx = after + (rest.len() - rest.trim_start().len());
    if source.as_bytes().get(brace_idx) != Some(&b'{') {
        return Err(NextVfsError::ExtractionError(
            "expected an object literal after `export default`".to_string(),
        ));
    }

    extract_balanced(source, brace_idx)
}

/// Finds `export default` outside of string literals and comments.
fn find_export_default(source: &str) -> Option<usize> {
    let bytes = source.as_bytes();
    let mut in_string: Option<u8> = None;
    let mut escaped = false;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            i += 1;
            continue;
        }
        match c {
            b'"' | b'\'' | b'`' => {
                in_string = Some(c);
                i += 1;
            }
            b'/' if bytes.get(i + 1) == Some(&b'/') => {
                while i < bytes.len() && bytes[i] != b'\n' {
                    i += 1;
                }
            }
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                i += 2;
                while i + 1 < bytes.len() && !(bytes[i] == b'*' && bytes[i + 1] == b'/') {
                    i += 1;
                }
                i = (i + 2).min(bytes.len());
            }
            b'e' if source[i..].starts_with("export default") => {
                return Some(i);
            }
            _ => {
                i += 1;
            }
        }
    }
    None
}

/// Scans from an opening `{` to its matching `}`, tracking string state
/// and backslash escapes, and returns the inclusive substring.
fn extract_balanced(source: &str, open_idx: usize) -> Result<&str> {
    let bytes = source.as_bytes();
    let mut depth = 0usize;
    let mut in_string: Option<u8> = None;
    let mut escaped = false;

    for (offset, &c) in bytes[open_idx..].iter().enumerate() {
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
            } else if c == b'\\' {
                escaped = true;
            } else if c == quote {
                in_string = None;
            }
            continue;
        }
        match c {
            b'"' | b'\'' | b'`' => in_string = Some(c),
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&source[open_idx..open_idx + offset + 1]);
                }
            }
            _ => {}
        }
    }

    Err(NextVfsError::ExtractionError(
        "unbalanced braces in exported config object".to_string(),
    ))
}

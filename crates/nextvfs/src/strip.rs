// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! TypeScript-surface stripping for config sources.
//!
//! Config files are frequently authored in TypeScript, but the recovery
//! components never execute or type-check them — they only need the
//! plain-JavaScript shape underneath. This module removes the typed
//! surface with textual rules applied in a fixed order:
//!
//! 1. `import type … from "…";` declarations
//! 2. `import { … } from "…";` declarations
//! 3. trailing `satisfies TypeName` assertions
//! 4. `: TypeName =` annotations on variable bindings
//! 5. `as const` assertions
//!
//! The rules are idempotent on plain-JavaScript input, so callers may
//! apply them unconditionally.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IMPORT_TYPE_RE: Regex =
        Regex::new(r#"(?m)^\s*import\s+type\s+[^;\n]*?from\s*["'][^"'\n]*["'];?[^\S\n]*\n?"#)
            .unwrap();
    static ref IMPORT_NAMED_RE: Regex =
        Regex::new(r#"(?m)^\s*import\s*\{[^}]*\}\s*from\s*["'][^"'\n]*["'];?[^\S\n]*\n?"#).unwrap();
    static ref SATISFIES_RE: Regex =
        Regex::new(r"\s+satisfies\s+[A-Za-z_$][A-Za-z0-9_$.]*(?:<[^;>\n]*>)?").unwrap();
    static ref TYPE_ANNOTATION_RE: Regex =
        Regex::new(r":\s*[A-Z][A-Za-z0-9_$]*(?:<[^=\n]*>)?\s*=").unwrap();
    static ref AS_CONST_RE: Regex = Regex::new(r"\s+as\s+const\b").unwrap();
}

/// Strips TypeScript-only constructs from a config source.
///
/// Purely textual: no parsing, no execution. The output is close enough
/// to plain JavaScript for the downstream module parse and the verbatim
/// object extraction.
pub fn strip_type_syntax(source: &str) -> String {
    let source = IMPORT_TYPE_RE.replace_all(source, "");
    let source = IMPORT_NAMED_RE.replace_all(&source, "");
    let source = SATISFIES_RE.replace_all(&source, "");
    let source = TYPE_ANNOTATION_RE.replace_all(&source, " =");
    let source = AS_CONST_RE.replace_all(&source, "");
    source.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_import_type() {
        let source = "import type { NextConfig } from \"next\";\nconst a = 1;\n";
        assert_eq!(strip_type_syntax(source), "const a = 1;\n");
    }

    #[test]
    fn test_strips_named_value_import() {
        let source = "import { defineConfig } from 'vite';\nexport default defineConfig({});\n";
        assert_eq!(strip_type_syntax(source), "export default defineConfig({});\n");
    }

    #[test]
    fn test_strips_satisfies() {
        let source = "const config = { basePath: \"/x\" } satisfies NextConfig;\n";
        assert_eq!(
            strip_type_syntax(source),
            "const config = { basePath: \"/x\" };\n"
        );
    }

    #[test]
    fn test_strips_type_annotation_on_binding() {
        let source = "const config: NextConfig = { assetPrefix: \"/cdn\" };\n";
        assert_eq!(
            strip_type_syntax(source),
            "const config = { assetPrefix: \"/cdn\" };\n"
        );
    }

    #[test]
    fn test_strips_generic_annotation() {
        let source = "const config: Config<Theme> = {};\n";
        assert_eq!(strip_type_syntax(source), "const config = {};\n");
    }

    #[test]
    fn test_strips_as_const() {
        let source = "const config = { output: \"export\" } as const;\n";
        assert_eq!(
            strip_type_syntax(source),
            "const config = { output: \"export\" };\n"
        );
    }

    #[test]
    fn test_idempotent_on_plain_javascript() {
        let source = "module.exports = { basePath: \"/x\" };\n";
        assert_eq!(strip_type_syntax(source), source);
    }

    #[test]
    fn test_lowercase_annotations_are_left_alone() {
        // object keys use the same `name: value` shape; only capitalized
        // type names followed by `=` are treated as annotations
        let source = "const x = { assetPrefix: \"/cdn\" };\n";
        assert_eq!(strip_type_syntax(source), source);
    }
}

// Copyright 2019-2026 Maravilla Labs, operated by SOLUTAS GmbH, Switzerland
// SPDX-License-Identifier: Apache-2.0
// SPDX-License-Identifier: MIT

//! Static recovery of `next.config.*` values.
//!
//! Deployment-affecting keys like `assetPrefix` and `basePath` must be
//! known before a project can be served, but config files are arbitrary
//! user modules and are never executed here. Instead the source is parsed
//! as an ECMAScript module and the exported object is walked statically:
//!
//! - `export default { … }` and `module.exports = { … }` are both
//!   recognized
//! - identifiers resolve through top-level `const`/`let`/`var`
//!   initializers only (never into function bodies or imports)
//! - wrapper calls like `withPlugins({ … })` resolve through their first
//!   argument
//! - values count only when they are string literals or zero-interpolation
//!   template literals, possibly through a chain of identifiers
//!
//! If the module does not parse at all, a regex scan recovers
//! `key: "value"` shapes so a host can keep booting on merely-broken
//! sources. Anything else — missing key, dynamic value, unresolvable
//! identifier — is `None`.

use std::collections::HashMap;

use regex::Regex;
use serde::Serialize;
use swc_core::common::{sync::Lrc, FileName, SourceMap, GLOBALS};
use swc_core::ecma::ast::{
    AssignOp, AssignTarget, Decl, Expr, Lit, MemberProp, Module, ModuleDecl, ModuleItem, ObjectLit,
    Pat, Prop, PropName, PropOrSpread, SimpleAssignTarget, Stmt, VarDecl,
};
use swc_core::ecma::parser::{lexer::Lexer, EsSyntax, Parser, Syntax};

use crate::error::{NextVfsError, Result};
use crate::strip::strip_type_syntax;
use crate::vfs::{join_path, Vfs};

/// Config file basenames probed by [`load_next_config`], in priority
/// order, with whether the source is treated as typed.
pub const NEXT_CONFIG_BASENAMES: &[(&str, bool)] = &[
    ("next.config.ts", true),
    ("next.config.js", false),
    ("next.config.mjs", false),
];

/// Deployment-affecting values recovered from a project's `next.config.*`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextConfigSnapshot {
    /// The recovered `assetPrefix` value, if statically resolvable.
    pub asset_prefix: Option<String>,
    /// The recovered `basePath` value, if statically resolvable.
    pub base_path: Option<String>,
}

/// Recovers the string value of `key` from the object exported by a
/// config source, without executing it.
///
/// `is_typed` applies the TypeScript-surface stripping rules before
/// parsing. Returns `None` for missing keys, non-string values and
/// unresolvable identifiers; falls back to a regex scan only when the
/// source does not parse as a module at all.
pub fn parse_next_config_value(source: &str, key: &str, is_typed: bool) -> Option<String> {
    let prepared = if is_typed {
        strip_type_syntax(source)
    } else {
        source.to_string()
    };
    match extract_from_module(&prepared, key) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(key, %err, "config source did not parse as a module, falling back to scan");
            regex_scan(&prepared, key)
        }
    }
}

/// Probes the VFS for a config file and recovers the deployment-affecting
/// values. A missing config file yields an empty snapshot.
pub fn load_next_config(vfs: &dyn Vfs, root: &str) -> NextConfigSnapshot {
    for (basename, is_typed) in NEXT_CONFIG_BASENAMES {
        let path = join_path(root, basename);
        if !vfs.exists(&path) {
            continue;
        }
        let Ok(bytes) = vfs.read_file(&path) else {
            continue;
        };
        let Ok(source) = String::from_utf8(bytes) else {
            continue;
        };
        return NextConfigSnapshot {
            asset_prefix: parse_next_config_value(&source, "assetPrefix", *is_typed),
            base_path: parse_next_config_value(&source, "basePath", *is_typed),
        };
    }
    NextConfigSnapshot::default()
}

fn extract_from_module(source: &str, key: &str) -> Result<Option<String>> {
    let module = parse_module(source)?;
    let vars = top_level_vars(&module);
    let Some(exported) = exported_expr(&module) else {
        return Ok(None);
    };
    let Some(object) = resolve_to_object(exported, &vars, 0) else {
        return Ok(None);
    };
    Ok(property_string_value(object, key, &vars))
}

fn parse_module(source: &str) -> Result<Module> {
    GLOBALS.set(&Default::default(), || {
        let cm: Lrc<SourceMap> = Default::default();
        let fm = cm.new_source_file(FileName::Anon.into(), source.to_string());

        let lexer = Lexer::new(
            Syntax::Es(EsSyntax::default()),
            Default::default(),
            (&*fm).into(),
            None,
        );
        let mut parser = Parser::new_from(lexer);
        parser
            .parse_module()
            .map_err(|err| NextVfsError::ConfigParseError(format!("{:?}", err)))
    })
}

/// Maps top-level variable names to their initializer expressions.
fn top_level_vars(module: &Module) -> HashMap<String, &Expr> {
    let mut vars = HashMap::new();
    for item in &module.body {
        let var: &VarDecl = match item {
            ModuleItem::Stmt(Stmt::Decl(Decl::Var(var))) => &**var,
            ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => match &export.decl {
                Decl::Var(var) => &**var,
                _ => continue,
            },
            _ => continue,
        };
        for decl in &var.decls {
            if let (Pat::Ident(name), Some(init)) = (&decl.name, &decl.init) {
                vars.insert(name.id.sym.to_string(), &**init);
            }
        }
    }
    vars
}

/// Finds the expression exported by the module: `export default <expr>`
/// or `module.exports = <expr>`.
fn exported_expr(module: &Module) -> Option<&Expr> {
    for item in &module.body {
        match item {
            ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultExpr(export)) => {
                return Some(&*export.expr);
            }
            ModuleItem::Stmt(Stmt::Expr(stmt)) => {
                if let Expr::Assign(assign) = &*stmt.expr {
                    if assign.op == AssignOp::Assign && is_module_exports(&assign.left) {
                        return Some(&*assign.right);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

fn is_module_exports(target: &AssignTarget) -> bool {
    let AssignTarget::Simple(SimpleAssignTarget::Member(member)) = target else {
        return false;
    };
    let Expr::Ident(obj) = &*member.obj else {
        return false;
    };
    let MemberProp::Ident(prop) = &member.prop else {
        return false;
    };
    obj.sym.as_ref() == "module" && prop.sym.as_ref() == "exports"
}

/// Resolves an expression to an object literal: directly, through a
/// top-level identifier, or through the first argument of a wrapper call
/// like `defineConfig({ … })`.
fn resolve_to_object<'a>(
    expr: &'a Expr,
    vars: &HashMap<String, &'a Expr>,
    depth: usize,
) -> Option<&'a ObjectLit> {
    if depth > 16 {
        return None;
    }
    match expr {
        Expr::Object(object) => Some(object),
        Expr::Paren(paren) => resolve_to_object(&paren.expr, vars, depth + 1),
        Expr::Ident(ident) => vars
            .get(ident.sym.as_ref())
            .and_then(|init| resolve_to_object(init, vars, depth + 1)),
        Expr::Call(call) => call
            .args
            .first()
            .and_then(|arg| resolve_to_object(&arg.expr, vars, depth + 1)),
        _ => None,
    }
}

/// Looks up `key` on an object literal and resolves its value to a
/// string, following identifier and shorthand-property chains.
fn property_string_value(
    object: &ObjectLit,
    key: &str,
    vars: &HashMap<String, &Expr>,
) -> Option<String> {
    for prop in &object.props {
        let PropOrSpread::Prop(prop) = prop else { continue };
        match &**prop {
            Prop::KeyValue(kv) => {
                let matches = match &kv.key {
                    PropName::Ident(ident) => ident.sym.as_ref() == key,
                    PropName::Str(s) => s.value.to_string_lossy() == key,
                    _ => false,
                };
                if matches {
                    return resolve_to_string(&kv.value, vars, 0);
                }
            }
            Prop::Shorthand(ident) if ident.sym.as_ref() == key => {
                return vars
                    .get(ident.sym.as_ref())
                    .and_then(|init| resolve_to_string(init, vars, 0));
            }
            _ => {}
        }
    }
    None
}

/// Resolves an expression to a string: a string literal, a
/// zero-interpolation template literal, or an identifier chain ending in
/// one of those.
fn resolve_to_string(expr: &Expr, vars: &HashMap<String, &Expr>, depth: usize) -> Option<String> {
    if depth > 16 {
        return None;
    }
    match expr {
        Expr::Lit(Lit::Str(s)) => Some(s.value.to_string_lossy().into_owned()),
        Expr::Tpl(tpl) if tpl.exprs.is_empty() && tpl.quasis.len() == 1 => tpl.quasis[0]
            .cooked
            .as_ref()
            .map(|cooked| cooked.to_string_lossy().into_owned()),
        Expr::Paren(paren) => resolve_to_string(&paren.expr, vars, depth + 1),
        Expr::Ident(ident) => vars
            .get(ident.sym.as_ref())
            .and_then(|init| resolve_to_string(init, vars, depth + 1)),
        _ => None,
    }
}

/// Last-resort scan for `key: "value"` shapes in unparseable sources.
fn regex_scan(source: &str, key: &str) -> Option<String> {
    let pattern = format!(r#"{}\s*:\s*["'`]([^"'`]+)["'`]"#, regex::escape(key));
    let re = Regex::new(&pattern).ok()?;
    re.captures(source).map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::MemoryVfs;

    #[test]
    fn test_export_default_object() {
        let source = r#"export default { assetPrefix: "/static" };"#;
        assert_eq!(
            parse_next_config_value(source, "assetPrefix", false),
            Some("/static".to_string())
        );
    }

    #[test]
    fn test_module_exports_object() {
        let source = r#"module.exports = { basePath: "/docs" };"#;
        assert_eq!(
            parse_next_config_value(source, "basePath", false),
            Some("/docs".to_string())
        );
    }

    #[test]
    fn test_exported_identifier() {
        let source = r#"
const config = { assetPrefix: "/cdn" };
export default config;
"#;
        assert_eq!(
            parse_next_config_value(source, "assetPrefix", false),
            Some("/cdn".to_string())
        );
    }

    #[test]
    fn test_typed_source_with_variable_value() {
        let source = r#"
import type { NextConfig } from "next";
const P = "/static";
const config: NextConfig = { assetPrefix: P };
export default config;
"#;
        assert_eq!(
            parse_next_config_value(source, "assetPrefix", true),
            Some("/static".to_string())
        );
    }

    #[test]
    fn test_satisfies_assertion() {
        let source = r#"
export default { basePath: "/app" } satisfies NextConfig;
"#;
        assert_eq!(
            parse_next_config_value(source, "basePath", true),
            Some("/app".to_string())
        );
    }

    #[test]
    fn test_wrapper_call() {
        let source = r#"
import { withPlugins } from "next-compose-plugins";
module.exports = withPlugins({ assetPrefix: "/p" });
"#;
        assert_eq!(
            parse_next_config_value(source, "assetPrefix", true),
            Some("/p".to_string())
        );
    }

    #[test]
    fn test_string_key_and_template_literal() {
        let source = "export default { \"basePath\": `/tpl` };";
        assert_eq!(
            parse_next_config_value(source, "basePath", false),
            Some("/tpl".to_string())
        );
    }

    #[test]
    fn test_template_with_interpolation_is_unresolvable() {
        let source = "const p = \"x\"; export default { basePath: `/a/${p}` };";
        assert_eq!(parse_next_config_value(source, "basePath", false), None);
    }

    #[test]
    fn test_dynamic_value_is_unresolvable() {
        let source = r#"export default { assetPrefix: process.env.CDN_URL };"#;
        assert_eq!(parse_next_config_value(source, "assetPrefix", false), None);
    }

    #[test]
    fn test_missing_key() {
        let source = r#"export default { trailingSlash: true };"#;
        assert_eq!(parse_next_config_value(source, "assetPrefix", false), None);
    }

    #[test]
    fn test_shorthand_property() {
        let source = r#"
const basePath = "/short";
export default { basePath };
"#;
        assert_eq!(
            parse_next_config_value(source, "basePath", false),
            Some("/short".to_string())
        );
    }

    #[test]
    fn test_regex_fallback_on_unparseable_source() {
        // unbalanced braces break the module parse; the scan still finds
        // the greppable value
        let source = "this is not javascript {{ assetPrefix: \"/rescued\"";
        assert_eq!(
            parse_next_config_value(source, "assetPrefix", false),
            Some("/rescued".to_string())
        );
    }

    #[test]
    fn test_load_next_config_probes_in_order() {
        let vfs = MemoryVfs::new();
        vfs.add_file(
            "/next.config.js",
            r#"module.exports = { basePath: "/js" };"#,
        );
        vfs.add_file(
            "/next.config.ts",
            "import type { NextConfig } from \"next\";\nconst config: NextConfig = { basePath: \"/ts\" };\nexport default config;\n",
        );

        let snapshot = load_next_config(&vfs, "/");
        assert_eq!(snapshot.base_path, Some("/ts".to_string()));
        assert_eq!(snapshot.asset_prefix, None);
    }

    #[test]
    fn test_load_next_config_without_file() {
        let vfs = MemoryVfs::new();
        assert_eq!(load_next_config(&vfs, "/"), NextConfigSnapshot::default());
    }
}

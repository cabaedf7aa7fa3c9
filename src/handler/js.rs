//! JavaScript code handler.
//!
//! Derives a method signature from the declaration that follows a method
//! comment. Recognized shapes:
//!
//! - `function name(args)`
//! - `name = function (args)` / `obj.name = function (args)`
//! - `name: function (args)`
//! - `const name = (args) =>`
//! - `name(args) {` (class and object literal methods)

use crate::handler::CodeHandler;
use regex::Regex;
use std::sync::LazyLock;

static RE_FUNCTION_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?(?:default\s+)?(?:async\s+)?function\s*\*?\s*([\w$]+)\s*\(([^)]*)\)")
        .unwrap()
});

static RE_FUNCTION_ASSIGN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w$.]+)\s*[:=]\s*(?:async\s+)?function\s*\*?\s*(?:[\w$]+)?\s*\(([^)]*)\)")
        .unwrap()
});

static RE_ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:export\s+)?(?:const|let|var)\s+([\w$]+)\s*=\s*(?:async\s*)?\(([^)]*)\)\s*=>")
        .unwrap()
});

static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:static\s+)?(?:async\s+)?\*?\s*([\w$]+)\s*\(([^)]*)\)\s*\{").unwrap()
});

static RE_SIGNATURE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\w$]+)\s*\(").unwrap());

/// Control-flow keywords that look like `name(args) {`.
const KEYWORDS: &[&str] = &["if", "for", "while", "switch", "catch", "with", "function"];

pub struct JsCodeHandler;

impl CodeHandler for JsCodeHandler {
    fn method_signature(&self, code_line: &str) -> Option<String> {
        let caps = RE_FUNCTION_DECL
            .captures(code_line)
            .or_else(|| RE_FUNCTION_ASSIGN.captures(code_line))
            .or_else(|| RE_ARROW.captures(code_line))
            .or_else(|| {
                RE_METHOD
                    .captures(code_line)
                    .filter(|caps| !KEYWORDS.contains(&&caps[1]))
            })?;

        // `exports.getComments` → `getComments`
        let name = caps[1].rsplit('.').next().unwrap_or(&caps[1]);
        Some(format!("{}({})", name, normalize_args(&caps[2])))
    }

    fn method_name(&self, signature: &str) -> Option<String> {
        RE_SIGNATURE_NAME
            .captures(signature)
            .map(|caps| caps[1].to_string())
    }
}

/// `a,b ,  c` → `a, b, c`
fn normalize_args(args: &str) -> String {
    args.split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

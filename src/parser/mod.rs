//! Comment extraction — `/** ... */` blocks with `@tag` lines.
//!
//! Only comment text is interpreted. The single line of code following a
//! method comment is handed to the code handler, if one was resolved.

pub mod tags;

use crate::handler::CodeHandler;
use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// `/**` not followed by `/` or `*`, so `/**/` and `/*** banner ***/` are plain comments.
static RE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*/\*\*([^/*].*)?$").unwrap());

// Leading whitespace, the `*` gutter and one following space.
static RE_GUTTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\s*\*? ?").unwrap());

/// Extract every doc comment of `source`, in source order.
pub fn parse(source: &str, handler: Option<&dyn CodeHandler>) -> Vec<Comment> {
    let lines: Vec<&str> = source.lines().collect();
    let mut comments = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let Some(caps) = RE_OPEN.captures(lines[i]) else {
            i += 1;
            continue;
        };

        // Collect body lines up to and including the one holding `*/`
        let mut body: Vec<String> = Vec::new();
        let mut rest = caps.get(1).map_or("", |m| m.as_str()).to_string();
        loop {
            if let Some(end) = rest.find("*/") {
                body.push(strip_gutter(&rest[..end]));
                break;
            }
            body.push(strip_gutter(&rest));
            i += 1;
            match lines.get(i) {
                Some(line) => rest = line.to_string(),
                None => break,
            }
        }
        i += 1;

        let code_line = lines
            .get(i..)
            .unwrap_or_default()
            .iter()
            .find(|l| !l.trim().is_empty())
            .copied();
        comments.push(build_comment(&body, code_line, handler));
    }

    debug!(count = comments.len(), "extracted doc comments");
    comments
}

fn strip_gutter(line: &str) -> String {
    RE_GUTTER.replace(line, "").trim_end().to_string()
}

/// Split body lines into text and tags, then classify the comment.
fn build_comment(
    body: &[String],
    code_line: Option<&str>,
    handler: Option<&dyn CodeHandler>,
) -> Comment {
    let mut text_lines: Vec<&str> = Vec::new();
    let mut found: Vec<Tag> = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in body {
        if let Some(start) = tags::tag_start(line) {
            if let Some((name, rest)) = current.replace(start) {
                found.extend(tags::parse_tag(&name, &rest));
            }
        } else if line.trim().is_empty() {
            // A blank line closes the open tag
            if let Some((name, rest)) = current.take() {
                found.extend(tags::parse_tag(&name, &rest));
            }
            text_lines.push(line.as_str());
        } else if let Some((_, ref mut rest)) = current {
            // Continuation of the open tag
            if !rest.is_empty() {
                rest.push(' ');
            }
            rest.push_str(line.trim());
        } else {
            text_lines.push(line.as_str());
        }
    }
    if let Some((name, rest)) = current {
        found.extend(tags::parse_tag(&name, &rest));
    }

    let doc = DocComment::new(text_lines.join("\n").trim(), found);

    if doc.has_tag(TagName::Module) {
        Comment::Module(doc)
    } else if doc.has_tag(TagName::Class) {
        Comment::Type(doc)
    } else if doc.has_tag(TagName::VariableName) {
        Comment::Variable(doc)
    } else {
        Comment::Method(apply_handler(doc, code_line, handler))
    }
}

/// Append the handler-derived signature and name after the explicit tags.
fn apply_handler(
    mut doc: DocComment,
    code_line: Option<&str>,
    handler: Option<&dyn CodeHandler>,
) -> DocComment {
    let Some(handler) = handler else {
        return doc;
    };

    let derived = code_line.and_then(|line| handler.method_signature(line));
    let signature = doc
        .tag_value(TagName::MethodSignature)
        .map(str::to_string)
        .or_else(|| derived.clone());

    if let Some(name) = signature.as_deref().and_then(|s| handler.method_name(s)) {
        doc.tags.push(Tag::MethodName(name));
    }
    if !doc.has_tag(TagName::MethodSignature) {
        if let Some(derived) = derived {
            doc.tags.push(Tag::MethodSignature(derived));
        }
    }
    doc
}

//! `@tag` line parsing.

use crate::model::*;
use regex::Regex;
use std::sync::LazyLock;

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@([A-Za-z]+)(?:\s+(.*))?$").unwrap());

static RE_TYPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\{([^}]*)\}\s*(.*)$").unwrap());

/// Split a body line into `(name, rest)` if it starts a tag.
pub fn tag_start(line: &str) -> Option<(String, String)> {
    RE_TAG.captures(line.trim()).map(|caps| {
        (
            caps[1].to_string(),
            caps.get(2).map_or("", |m| m.as_str()).trim().to_string(),
        )
    })
}

/// Build a tag from its name and the (continuation-joined) rest of its text.
///
/// Unknown tag names yield `None`; tag syntax is not validated.
pub fn parse_tag(name: &str, rest: &str) -> Option<Tag> {
    let rest = rest.trim();
    let tag = match name {
        "module" => Tag::Module(rest.to_string()),
        "author" => Tag::Author(rest.to_string()),
        "constructor" => Tag::Constructor(rest.to_string()),
        "deprecated" => Tag::Deprecated(rest.to_string()),
        "requires" => Tag::Requires(rest.to_string()),
        "see" => Tag::See(rest.to_string()),
        "version" => Tag::Version(rest.to_string()),
        "api" => Tag::Api(rest.to_string()),
        "class" => Tag::Class(rest.to_string()),
        "var" | "variable" | "variableName" | "property" => {
            let (_, rest) = split_type(rest);
            Tag::VariableName(first_word(rest).0.to_string())
        }
        "method" | "function" => Tag::Method(rest.to_string()),
        "methodName" => Tag::MethodName(rest.to_string()),
        "methodSignature" => Tag::MethodSignature(rest.to_string()),
        "param" | "arg" | "argument" => {
            let (ty, rest) = split_type(rest);
            let (name, comment) = first_word(rest);
            Tag::Param(ParamTag {
                name: name.to_string(),
                ty,
                comment: comment.to_string(),
            })
        }
        "private" => Tag::Private,
        "return" | "returns" => Tag::Return(out_tag(rest)),
        "exception" => Tag::Exception(out_tag(rest)),
        "throws" => Tag::Throws(out_tag(rest)),
        _ => return None,
    };
    Some(tag)
}

fn out_tag(rest: &str) -> OutTag {
    let (ty, comment) = split_type(rest);
    OutTag {
        ty,
        comment: comment.to_string(),
    }
}

/// `{Type} rest` → `(Some("Type"), "rest")`
fn split_type(text: &str) -> (Option<String>, &str) {
    match RE_TYPED.captures(text) {
        Some(caps) => {
            let ty = caps[1].trim();
            let rest = caps.get(2).map_or("", |m| m.as_str());
            ((!ty.is_empty()).then(|| ty.to_string()), rest)
        }
        None => (None, text),
    }
}

/// `word rest of text` → `("word", "rest of text")`
fn first_word(text: &str) -> (&str, &str) {
    let text = text.trim();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_start_splits_name() {
        assert_eq!(
            tag_start("@version 1.0.2"),
            Some(("version".to_string(), "1.0.2".to_string()))
        );
        assert_eq!(
            tag_start("@private"),
            Some(("private".to_string(), String::new()))
        );
        assert_eq!(tag_start("plain text"), None);
        assert_eq!(tag_start("email@example.com"), None);
    }

    #[test]
    fn param_with_type() {
        assert_eq!(
            parse_tag("param", "{Number} a the first operand"),
            Some(Tag::Param(ParamTag {
                name: "a".into(),
                ty: Some("Number".into()),
                comment: "the first operand".into(),
            }))
        );
    }

    #[test]
    fn param_without_type_or_comment() {
        assert_eq!(
            parse_tag("param", "a"),
            Some(Tag::Param(ParamTag {
                name: "a".into(),
                ty: None,
                comment: String::new(),
            }))
        );
    }

    #[test]
    fn return_and_throws() {
        assert_eq!(
            parse_tag("returns", "{String} markdown"),
            Some(Tag::Return(OutTag {
                ty: Some("String".into()),
                comment: "markdown".into(),
            }))
        );
        assert_eq!(
            parse_tag("throws", "when broken"),
            Some(Tag::Throws(OutTag {
                ty: None,
                comment: "when broken".into(),
            }))
        );
        assert!(matches!(parse_tag("exception", "{E} x"), Some(Tag::Exception(_))));
    }

    #[test]
    fn variable_aliases() {
        for name in ["var", "variable", "variableName", "property"] {
            assert_eq!(
                parse_tag(name, "{Number} count of things"),
                Some(Tag::VariableName("count".into()))
            );
        }
    }

    #[test]
    fn simple_values() {
        assert_eq!(parse_tag("api", "private"), Some(Tag::Api("private".into())));
        assert_eq!(parse_tag("module", "DocIt"), Some(Tag::Module("DocIt".into())));
        assert_eq!(parse_tag("function", "add"), Some(Tag::Method("add".into())));
        assert_eq!(parse_tag("private", ""), Some(Tag::Private));
    }

    #[test]
    fn unknown_tag_dropped() {
        assert_eq!(parse_tag("todo", "later"), None);
    }
}

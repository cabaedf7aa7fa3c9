//! Markdown style tokens.
//!
//! A style token is one of three shapes:
//!
//! - `-` or `=` — underline heading spanning the text
//! - `#` to `######` — ATX heading, balanced on both sides
//! - anything else — wraps the text with no spaces (`*`, `**`, `` ` ``, ...)

/// Apply a configured style token to `text`.
pub fn apply_style(text: &str, token: &str) -> String {
    match token {
        "-" | "=" => format!("{}\n{}", text, token.repeat(text.chars().count())),
        "#" | "##" | "###" | "####" | "#####" | "######" => {
            format!("{} {} {}", token, text, token)
        }
        _ => format!("{}{}{}", token, text, token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underline_equals() {
        assert_eq!(apply_style("Foo", "="), "Foo\n===");
    }

    #[test]
    fn underline_dash_counts_chars() {
        assert_eq!(apply_style("Größe", "-"), "Größe\n-----");
    }

    #[test]
    fn atx_balanced() {
        assert_eq!(apply_style("Foo", "###"), "### Foo ###");
        assert_eq!(apply_style("Foo", "#"), "# Foo #");
        assert_eq!(apply_style("Foo", "######"), "###### Foo ######");
    }

    #[test]
    fn seven_hashes_wrap() {
        assert_eq!(apply_style("Foo", "#######"), "#######Foo#######");
    }

    #[test]
    fn emphasis_wrap_has_no_spaces() {
        assert_eq!(apply_style("Foo", "*"), "*Foo*");
        assert_eq!(apply_style("Foo", "**"), "**Foo**");
    }

    #[test]
    fn empty_token() {
        assert_eq!(apply_style("Foo", ""), "Foo");
    }
}

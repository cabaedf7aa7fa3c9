//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod style;

use crate::error::{Error, Result};
use crate::model::Comment;
use crate::settings::Settings;

pub use markdown::MarkdownRenderer;
pub use style::apply_style;

/// Trait for rendering a comment sequence into a specific output format.
pub trait Renderer {
    fn render(&self, comments: &[Comment], module_name: Option<&str>) -> Result<String>;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer<'a>(format: &str, settings: &'a Settings) -> Result<Box<dyn Renderer + 'a>> {
    match format {
        "markdown" | "md" => Ok(Box::new(MarkdownRenderer::new(settings))),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(Error::UnknownFormat(format.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        let settings = Settings::default();
        assert_eq!(create_renderer("md", &settings).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("markdown", &settings).unwrap().file_extension(), "md");
        assert_eq!(create_renderer("json", &settings).unwrap().file_extension(), "json");
    }

    #[test]
    fn unknown_format() {
        let settings = Settings::default();
        assert!(matches!(
            create_renderer("xml", &settings),
            Err(Error::UnknownFormat(ref f)) if f == "xml"
        ));
    }
}

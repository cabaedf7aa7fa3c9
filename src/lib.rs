//! docit — language independent translation of code comments into Markdown.
//!
//! Source text goes through two stages:
//!
//! 1. **Extraction** ([`parser`]) — `/** ... */` comments become [`Comment`]
//!    records, with help from the [`CodeHandler`] matching the module name.
//! 2. **Rendering** ([`render`]) — the records become Markdown according to
//!    the [`Settings`].
//!
//! ```
//! use docit::{DocIt, Settings};
//!
//! let source = "/**\n * Adds.\n * @param {Number} a first\n */\nfunction add(a) {}\n";
//! let docit = DocIt::new(Settings::default());
//! let md = docit.translate(source, Some("math.js")).unwrap();
//! assert!(md.contains("add\n---"));
//! assert!(md.contains("* a *Number* first"));
//! ```

pub mod error;
pub mod handler;
pub mod model;
pub mod parser;
pub mod render;
pub mod settings;

pub use error::{Error, Result};
pub use handler::{CodeHandler, CodeHandlerRegistry};
pub use model::{Comment, DocComment, OutTag, ParamTag, Tag, TagName};
pub use render::{apply_style, create_renderer, MarkdownRenderer, Renderer};
pub use settings::Settings;

/// Settings plus the code handlers available to them.
///
/// A different settings override means a different `DocIt` value; nothing is
/// swapped while a render is running.
#[derive(Clone, Default)]
pub struct DocIt {
    settings: Settings,
    handlers: CodeHandlerRegistry,
}

impl DocIt {
    /// Use `settings` with the built-in code handlers.
    pub fn new(settings: Settings) -> Self {
        Self::with_handlers(settings, CodeHandlerRegistry::default())
    }

    pub fn with_handlers(settings: Settings, handlers: CodeHandlerRegistry) -> Self {
        Self { settings, handlers }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Extract the comments of `source`.
    ///
    /// `module_name` selects the code handler; an unresolvable handler is an
    /// error.
    pub fn get_comments(&self, source: &str, module_name: Option<&str>) -> Result<Vec<Comment>> {
        let handler = self.handlers.determine(&self.settings, module_name)?;
        Ok(parser::parse(source, handler))
    }

    /// Render comments as Markdown. `module_name` is the fallback module heading.
    pub fn render(&self, comments: &[Comment], module_name: Option<&str>) -> String {
        MarkdownRenderer::new(&self.settings).markdown(comments, module_name)
    }

    /// [`get_comments`](Self::get_comments) followed by [`render`](Self::render).
    pub fn translate(&self, source: &str, module_name: Option<&str>) -> Result<String> {
        let comments = self.get_comments(source, module_name)?;
        Ok(self.render(&comments, module_name))
    }
}

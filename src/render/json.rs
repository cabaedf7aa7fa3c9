//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the comment model directly, so custom pipelines can apply
//! their own formatting.

use crate::error::{Error, Result};
use crate::model::Comment;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, comments: &[Comment], _module_name: Option<&str>) -> Result<String> {
        let mut out = serde_json::to_string_pretty(comments).map_err(Error::Serialize)?;
        out.push('\n');
        Ok(out)
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

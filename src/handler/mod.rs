//! Code handlers — language-specific defaults applied during extraction.
//!
//! Handlers are registered by name in a [`CodeHandlerRegistry`]. Settings pick
//! one either directly (`codeHandler`) or through the first `codeHandlers`
//! pattern that matches the module name.

pub mod js;

use crate::error::{Error, Result};
use crate::settings::Settings;
use regex::Regex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Language adapter consulted for method comments.
pub trait CodeHandler: Send + Sync {
    /// Signature declared on the first code line after a comment, if any.
    fn method_signature(&self, code_line: &str) -> Option<String>;

    /// Method name derived from a signature.
    fn method_name(&self, signature: &str) -> Option<String>;
}

/// Named code handlers, registered by the host at startup.
#[derive(Clone)]
pub struct CodeHandlerRegistry {
    handlers: HashMap<String, Arc<dyn CodeHandler>>,
}

impl CodeHandlerRegistry {
    /// A registry with no handlers at all.
    pub fn empty() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>, handler: Arc<dyn CodeHandler>) {
        self.handlers.insert(name.into(), handler);
    }

    pub fn get(&self, name: &str) -> Option<&dyn CodeHandler> {
        self.handlers.get(name).map(|h| h.as_ref())
    }

    fn resolve(&self, name: &str) -> Result<&dyn CodeHandler> {
        self.get(name)
            .ok_or_else(|| Error::UnknownCodeHandler(name.to_string()))
    }

    /// Pick the handler for `module_name`.
    ///
    /// An explicit `codeHandler` wins. Otherwise the `codeHandlers` patterns
    /// are searched in order against the module name. Without a module name
    /// no pattern is consulted.
    pub fn determine(
        &self,
        settings: &Settings,
        module_name: Option<&str>,
    ) -> Result<Option<&dyn CodeHandler>> {
        if let Some(ref name) = settings.code_handler {
            debug!(handler = %name, "using configured code handler");
            return self.resolve(name).map(Some);
        }

        let Some(module_name) = module_name else {
            return Ok(None);
        };

        for mapping in &settings.code_handlers {
            for (pattern, name) in mapping {
                let re = Regex::new(pattern).map_err(|source| Error::InvalidHandlerPattern {
                    pattern: pattern.clone(),
                    source,
                })?;
                if re.is_match(module_name) {
                    debug!(module = module_name, %pattern, handler = %name, "matched code handler");
                    return self.resolve(name).map(Some);
                }
            }
        }

        debug!(module = module_name, "no code handler matched");
        Ok(None)
    }
}

impl Default for CodeHandlerRegistry {
    /// Registry with the built-in handlers (`js`).
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("js", Arc::new(js::JsCodeHandler));
        registry
    }
}

//! Rendering settings — built-in defaults merged with user overrides.
//!
//! Option names are the camelCase keys used in JSON settings files and in
//! `--set KEY=VALUE` pairs. Boolean-style options stay strings: a flag is on
//! only when it is exactly `"true"`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One `{pattern: handlerName}` entry of the `codeHandlers` list.
pub type CodeHandlerMapping = BTreeMap<String, String>;

macro_rules! settings {
    ($($(#[$doc:meta])* $field:ident: $key:tt = $default:expr,)*) => {
        /// Effective rendering options. Immutable once a render starts.
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct Settings {
            $(
                $(#[$doc])*
                #[serde(rename = $key)]
                pub $field: String,
            )*
            /// Handler name forced for every module; overrides `code_handlers`.
            #[serde(rename = "codeHandler")]
            pub code_handler: Option<String>,
            /// Ordered pattern → handler name mappings, first match wins.
            #[serde(rename = "codeHandlers")]
            pub code_handlers: Vec<CodeHandlerMapping>,
        }

        impl Default for Settings {
            fn default() -> Self {
                Self {
                    $($field: $default.to_string(),)*
                    code_handler: None,
                    code_handlers: default_code_handlers(),
                }
            }
        }

        impl Settings {
            /// Names of all string-valued options.
            pub const NAMES: &'static [&'static str] = &[$($key,)* "codeHandler"];

            /// Effective value of a named option, `None` for unknown names.
            pub fn get(&self, name: &str) -> Option<&str> {
                match name {
                    $($key => Some(self.$field.as_str()),)*
                    "codeHandler" => self.code_handler.as_deref(),
                    _ => None,
                }
            }

            /// Replace a single named option.
            pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
                match name {
                    $($key => self.$field = value.into(),)*
                    "codeHandler" => self.code_handler = Some(value.into()),
                    _ => return Err(Error::UnknownSetting(name.to_string())),
                }
                Ok(())
            }
        }
    };
}

settings! {
    api_label: "apiLabel" = "API:",
    api_label_markdown: "apiLabelMarkdown" = "*",
    author_label: "authorLabel" = "Author:",
    author_label_markdown: "authorLabelMarkdown" = "*",
    constructor_label: "constructorLabel" = "Constructor:",
    constructor_label_markdown: "constructorLabelMarkdown" = "*",
    /// Heading for module comments without `@module` when no module name is known.
    default_module_heading: "defaultModuleHeading" = "Module",
    deprecated_label: "deprecatedLabel" = "Deprecated:",
    deprecated_label_markdown: "deprecatedLabelMarkdown" = "*",
    /// Render `@private` / `@api private` comments.
    include_private: "includePrivate" = "false",
    include_hr_after_method: "includeHRAfterMethod" = "false",
    include_hr_before_method: "includeHRBeforeMethod" = "true",
    horizontal_rule_markdown: "horizontalRuleMarkdown" = "\n------------------------------------------------\n",
    method_heading_markdown: "methodHeadingMarkdown" = "-",
    method_signature_markdown: "methodSignatureMarkdown" = "###",
    module_heading_markdown: "moduleHeadingMarkdown" = "=",
    params_heading: "paramsHeading" = "Parameters",
    params_heading_markdown: "paramsHeadingMarkdown" = "####",
    params_list_markdown: "paramsListMarkdown" = "*",
    param_type_markdown: "paramTypeMarkdown" = "*",
    private_type_label: "privateTypeLabel" = " (private)",
    private_variable_label: "privateVariableLabel" = " (private)",
    requires_label: "requiresLabel" = "Requires:",
    requires_label_markdown: "requiresLabelMarkdown" = "*",
    return_heading: "returnHeading" = "Returns",
    return_heading_markdown: "returnHeadingMarkdown" = "####",
    return_type_markdown: "returnTypeMarkdown" = "*",
    see_label: "seeLabel" = "See:",
    see_label_markdown: "seeLabelMarkdown" = "*",
    throws_heading: "throwsHeading" = "Throws",
    throws_heading_markdown: "throwsHeadingMarkdown" = "####",
    throws_type_markdown: "throwsTypeMarkdown" = "*",
    type_name_markdown: "typeNameMarkdown" = "###",
    types_heading: "typesHeading" = "Types",
    types_heading_markdown: "typesHeadingMarkdown" = "-",
    variable_name_markdown: "variableNameMarkdown" = "###",
    variables_heading: "variablesHeading" = "Variables",
    variables_heading_markdown: "variablesHeadingMarkdown" = "-",
    version_label: "versionLabel" = "Version:",
    version_label_markdown: "versionLabelMarkdown" = "*",
}

fn default_code_handlers() -> Vec<CodeHandlerMapping> {
    vec![CodeHandlerMapping::from([(
        r"\.js$".to_string(),
        "js".to_string(),
    )])]
}

impl Settings {
    /// Parse a JSON object of overrides; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply `(name, value)` overrides on top of these settings.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (name, value) in overrides {
            self.set(name.as_ref(), value)?;
        }
        Ok(self)
    }

    /// True when the named option is exactly `"true"`.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name) == Some("true")
    }
}

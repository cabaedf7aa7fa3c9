//! Comment model — format-agnostic records produced by the extractor.

use serde::Serialize;

/// A single parsed documentation comment, tagged by what it documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Comment {
    Module(DocComment),
    Type(DocComment),
    Variable(DocComment),
    Method(DocComment),
}

impl Comment {
    pub fn body(&self) -> &DocComment {
        match self {
            Comment::Module(body)
            | Comment::Type(body)
            | Comment::Variable(body)
            | Comment::Method(body) => body,
        }
    }
}

/// Free text plus the ordered tags of one comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocComment {
    pub text: String,
    /// Source order. Lookups are first-match-wins.
    pub tags: Vec<Tag>,
}

impl DocComment {
    pub fn new(text: impl Into<String>, tags: Vec<Tag>) -> Self {
        Self {
            text: text.into(),
            tags,
        }
    }

    /// First tag named `name`, if any.
    pub fn tag(&self, name: TagName) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name() == name)
    }

    /// String value of the first tag named `name`.
    ///
    /// Structured tags (`param`, `return`, ...) and `private` have no string value.
    pub fn tag_value(&self, name: TagName) -> Option<&str> {
        self.tag(name).and_then(Tag::value)
    }

    pub fn has_tag(&self, name: TagName) -> bool {
        self.tag(name).is_some()
    }

    /// `@private`, or `@api private` in any letter case.
    pub fn is_private(&self) -> bool {
        self.has_tag(TagName::Private)
            || self
                .tag_value(TagName::Api)
                .is_some_and(|api| api.eq_ignore_ascii_case("private"))
    }
}

/// Names of the tag vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagName {
    Module,
    Author,
    Constructor,
    Deprecated,
    Requires,
    See,
    Version,
    Api,
    Param,
    Private,
    Return,
    Exception,
    Throws,
    Class,
    VariableName,
    /// Explicit `@method` name
    Method,
    /// Method name derived by a code handler
    MethodName,
    MethodSignature,
}

/// One `@name value` annotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "name", content = "value", rename_all = "camelCase")]
pub enum Tag {
    Module(String),
    Author(String),
    Constructor(String),
    Deprecated(String),
    Requires(String),
    See(String),
    Version(String),
    Api(String),
    Param(ParamTag),
    Private,
    Return(OutTag),
    Exception(OutTag),
    Throws(OutTag),
    Class(String),
    VariableName(String),
    Method(String),
    MethodName(String),
    MethodSignature(String),
}

impl Tag {
    pub fn name(&self) -> TagName {
        match self {
            Tag::Module(_) => TagName::Module,
            Tag::Author(_) => TagName::Author,
            Tag::Constructor(_) => TagName::Constructor,
            Tag::Deprecated(_) => TagName::Deprecated,
            Tag::Requires(_) => TagName::Requires,
            Tag::See(_) => TagName::See,
            Tag::Version(_) => TagName::Version,
            Tag::Api(_) => TagName::Api,
            Tag::Param(_) => TagName::Param,
            Tag::Private => TagName::Private,
            Tag::Return(_) => TagName::Return,
            Tag::Exception(_) => TagName::Exception,
            Tag::Throws(_) => TagName::Throws,
            Tag::Class(_) => TagName::Class,
            Tag::VariableName(_) => TagName::VariableName,
            Tag::Method(_) => TagName::Method,
            Tag::MethodName(_) => TagName::MethodName,
            Tag::MethodSignature(_) => TagName::MethodSignature,
        }
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Tag::Module(v)
            | Tag::Author(v)
            | Tag::Constructor(v)
            | Tag::Deprecated(v)
            | Tag::Requires(v)
            | Tag::See(v)
            | Tag::Version(v)
            | Tag::Api(v)
            | Tag::Class(v)
            | Tag::VariableName(v)
            | Tag::Method(v)
            | Tag::MethodName(v)
            | Tag::MethodSignature(v) => Some(v),
            Tag::Param(_) | Tag::Private | Tag::Return(_) | Tag::Exception(_) | Tag::Throws(_) => {
                None
            }
        }
    }
}

/// Parsed `@param {Type} name comment`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParamTag {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    pub comment: String,
}

/// Parsed `@return` / `@throws` payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OutTag {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub ty: Option<String>,
    pub comment: String,
}

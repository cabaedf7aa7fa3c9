//! Markdown renderer — the comment model to Markdown engine.
//!
//! Every record is rendered into a fragment by the section renderer for its
//! comment type. Fragments are joined by the assembler, which also decides
//! when a "Types" or "Variables" group heading has to be (re-)emitted.

use crate::error::Result;
use crate::model::*;
use crate::render::style::apply_style;
use crate::render::Renderer;
use crate::settings::Settings;

/// `(tag, label option, label style option)` in emission order.
const SIMPLE_TAGS: &[(TagName, &str, &str)] = &[
    (TagName::Author, "authorLabel", "authorLabelMarkdown"),
    (TagName::Constructor, "constructorLabel", "constructorLabelMarkdown"),
    (TagName::Deprecated, "deprecatedLabel", "deprecatedLabelMarkdown"),
    (TagName::Requires, "requiresLabel", "requiresLabelMarkdown"),
    (TagName::See, "seeLabel", "seeLabelMarkdown"),
    (TagName::Version, "versionLabel", "versionLabelMarkdown"),
];

/// Group headings that span runs of comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Types,
    Variables,
}

/// Per-call assembler state.
#[derive(Debug, Default)]
struct RenderState {
    /// Last group heading emitted.
    current_section: Option<Section>,
}

pub struct MarkdownRenderer<'a> {
    settings: &'a Settings,
}

impl<'a> MarkdownRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Render a whole comment sequence. Empty input yields an empty string.
    pub fn markdown(&self, comments: &[Comment], module_name: Option<&str>) -> String {
        let mut state = RenderState::default();
        let mut md = String::new();

        for comment in comments {
            let fragment = match comment {
                Comment::Module(body) => self.module(body, module_name),
                Comment::Type(body) => self.type_comment(body, &mut state),
                Comment::Variable(body) => self.variable(body, &mut state),
                Comment::Method(body) => self.method(body),
            };
            if !fragment.is_empty() {
                md.push_str(&fragment);
                md.push('\n');
            }
        }

        md
    }

    fn get(&self, name: &str) -> &str {
        self.settings.get(name).unwrap_or_default()
    }

    fn styled(&self, text: &str, style_option: &str) -> String {
        apply_style(text, self.get(style_option))
    }

    fn label(&self, label_option: &str, style_option: &str) -> String {
        self.styled(self.get(label_option), style_option)
    }

    fn hidden(&self, body: &DocComment) -> bool {
        !self.settings.flag("includePrivate") && body.is_private()
    }

    fn module(&self, body: &DocComment, module_name: Option<&str>) -> String {
        let name = non_empty(body.tag_value(TagName::Module))
            .or(non_empty(module_name))
            .unwrap_or(self.get("defaultModuleHeading"));

        let mut md = self.styled(name, "moduleHeadingMarkdown");
        md.push_str("\n\n");

        if !body.text.is_empty() {
            md.push_str(&body.text);
            md.push_str("\n\n");
        }

        md.push_str(&self.simple_tags(body));
        md
    }

    fn simple_tags(&self, body: &DocComment) -> String {
        let mut md = String::new();
        for &(tag, label, style) in SIMPLE_TAGS {
            if let Some(value) = non_empty(body.tag_value(tag)) {
                md.push_str(&format!("{} {}\n", self.label(label, style), value));
            }
        }
        md
    }

    fn group_heading(&self, section: Section, state: &mut RenderState) -> String {
        if state.current_section == Some(section) {
            return String::new();
        }
        state.current_section = Some(section);
        let heading = match section {
            Section::Types => self.label("typesHeading", "typesHeadingMarkdown"),
            Section::Variables => self.label("variablesHeading", "variablesHeadingMarkdown"),
        };
        heading + "\n"
    }

    fn type_comment(&self, body: &DocComment, state: &mut RenderState) -> String {
        if self.hidden(body) {
            return String::new();
        }
        let mut md = self.group_heading(Section::Types, state);

        let mut name = body.tag_value(TagName::Class).unwrap_or_default().to_string();
        if body.is_private() {
            name.push_str(self.get("privateTypeLabel"));
        }
        md.push('\n');
        md.push_str(&self.styled(&name, "typeNameMarkdown"));
        md.push('\n');

        md.push_str(&self.simple_tags(body));

        md.push('\n');
        md.push_str(&body.text);
        md.push('\n');
        md
    }

    fn variable(&self, body: &DocComment, state: &mut RenderState) -> String {
        if self.hidden(body) {
            return String::new();
        }
        let mut md = self.group_heading(Section::Variables, state);

        let mut name = body
            .tag_value(TagName::VariableName)
            .unwrap_or_default()
            .to_string();
        if body.is_private() {
            name.push_str(self.get("privateVariableLabel"));
        }
        md.push('\n');
        md.push_str(&self.styled(&name, "variableNameMarkdown"));
        md.push_str("\n\n");

        md.push_str(&body.text);
        md.push('\n');
        md
    }

    fn method(&self, body: &DocComment) -> String {
        if self.hidden(body) {
            return String::new();
        }
        let mut md = String::new();
        if self.settings.flag("includeHRBeforeMethod") {
            md.push_str(self.get("horizontalRuleMarkdown"));
        }

        let name = non_empty(body.tag_value(TagName::Method))
            .or(non_empty(body.tag_value(TagName::MethodName)));
        if let Some(name) = name {
            md.push_str(&self.styled(name, "methodHeadingMarkdown"));
            md.push_str("\n\n");
        }
        if let Some(signature) = non_empty(body.tag_value(TagName::MethodSignature)) {
            md.push_str(&self.styled(signature, "methodSignatureMarkdown"));
            md.push_str("\n\n");
        }

        // Blank line before the next block, except directly after the text.
        let mut line_start = "\n";
        if !body.text.is_empty() {
            md.push_str(&body.text);
            md.push('\n');
            line_start = "";
        }

        let mut params_started = false;
        let mut returns_started = false;
        let mut throws_started = false;
        for tag in &body.tags {
            match tag {
                Tag::Api(_) => {
                    let api = body.tag_value(TagName::Api).unwrap_or_default();
                    md.push_str(line_start);
                    md.push_str(&format!(
                        "{} {}",
                        self.label("apiLabel", "apiLabelMarkdown"),
                        api
                    ));
                }
                Tag::Param(param) => {
                    if !params_started {
                        md.push_str(line_start);
                        md.push_str(&self.label("paramsHeading", "paramsHeadingMarkdown"));
                        md.push_str("\n\n");
                        params_started = true;
                    }
                    md.push_str(&self.param_line(param));
                    md.push('\n');
                }
                Tag::Private => {
                    md.push_str(line_start);
                    md.push_str(&format!(
                        "{} private\n",
                        self.label("apiLabel", "apiLabelMarkdown")
                    ));
                }
                Tag::Return(out) => {
                    if !returns_started {
                        md.push_str(line_start);
                        md.push_str(&self.label("returnHeading", "returnHeadingMarkdown"));
                        md.push_str("\n\n");
                        returns_started = true;
                    }
                    md.push_str(&self.out_line(out, "returnTypeMarkdown"));
                    md.push('\n');
                }
                Tag::Exception(out) | Tag::Throws(out) => {
                    if !throws_started {
                        md.push_str(line_start);
                        md.push_str(&self.label("throwsHeading", "throwsHeadingMarkdown"));
                        md.push_str("\n\n");
                        throws_started = true;
                    }
                    md.push_str(&self.out_line(out, "throwsTypeMarkdown"));
                    md.push('\n');
                }
                _ => continue,
            }
            line_start = "\n";
        }

        if self.settings.flag("includeHRAfterMethod") {
            md.push_str(self.get("horizontalRuleMarkdown"));
        }
        md
    }

    fn param_line(&self, param: &ParamTag) -> String {
        let mut md = format!("{} {} ", self.get("paramsListMarkdown"), param.name);
        if let Some(ty) = non_empty(param.ty.as_deref()) {
            md.push_str(&self.styled(ty, "paramTypeMarkdown"));
            md.push(' ');
        }
        md.push_str(&param.comment);
        md
    }

    /// `return` / `throws` line: optional styled type, then the comment.
    fn out_line(&self, out: &OutTag, type_style: &str) -> String {
        let mut md = String::new();
        if let Some(ty) = non_empty(out.ty.as_deref()) {
            md.push_str(&self.styled(ty, type_style));
            md.push(' ');
        }
        md.push_str(&out.comment);
        md
    }
}

impl Renderer for MarkdownRenderer<'_> {
    fn render(&self, comments: &[Comment], module_name: Option<&str>) -> Result<String> {
        Ok(self.markdown(comments, module_name))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

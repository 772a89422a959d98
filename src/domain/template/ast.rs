// Structured forms produced alongside the generated expressions

use std::fmt;

use super::TemplateError;

/// Dotted path to a field inside a request parameter, e.g. `message.author.id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<String>,
}

impl FieldPath {
    /// Parse the dotted source form. Segment contents are passed through as-is.
    pub fn parse(path: &str) -> Result<Self, TemplateError> {
        if path.is_empty() {
            return Err(TemplateError::EmptyFieldPath);
        }
        Ok(Self {
            segments: path.split('.').map(str::to_string).collect(),
        })
    }

    /// Build from segments collected by the path compiler.
    pub(crate) fn from_segments(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

/// A compiled URL is a sequence of literal runs and field references
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlPart {
    Literal(String),
    Field(FieldPath),
}

/// Output of the path template compiler
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledPath {
    /// Expression evaluating to the request URL
    pub url_expr: String,
    /// Accessor expressions for fields embedded in the URL, in template order
    pub consumed: Vec<String>,
    /// Structured counterpart of `url_expr`
    pub parts: Vec<UrlPart>,
}

impl CompiledPath {
    /// Field paths referenced by the template, one per variable, in order
    pub fn fields(&self) -> Vec<&FieldPath> {
        self.parts
            .iter()
            .filter_map(|part| match part {
                UrlPart::Field(path) => Some(path),
                _ => None,
            })
            .collect()
    }
}

use thiserror::Error;

/// Errors raised while compiling path templates and field paths
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("Field path must not be empty")]
    EmptyFieldPath,

    #[error(
        "Unterminated variable in path template '{template}': \
         '{{' at position {position} is never closed"
    )]
    UnterminatedVariable { template: String, position: usize },
}

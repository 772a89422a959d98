// Error handling for gateway-jsgen

use thiserror::Error;

use crate::domain::template::TemplateError;

/// File-level generation failure. The file produces no output.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("No target service defined in {file}")]
    NoTargetService { file: String },

    #[error("Invalid path template for {service}.{method}: {source}")]
    Template {
        service: String,
        method: String,
        #[source]
        source: TemplateError,
    },

    #[error("Invalid body field for {service}.{method}: {source}")]
    BodyField {
        service: String,
        method: String,
        #[source]
        source: TemplateError,
    },

    #[error("Template rendering error: {0}")]
    Render(String),
}

impl GenError {
    /// True when the file simply has nothing to generate
    pub fn is_no_target_service(&self) -> bool {
        matches!(self, GenError::NoTargetService { .. })
    }
}

// Helper to convert template errors
impl From<askama::Error> for GenError {
    fn from(err: askama::Error) -> Self {
        GenError::Render(err.to_string())
    }
}

// Template module for HTTP path templates
//
// This module compiles gateway path templates such as `/v1/{name=shelves/*}`
// into JavaScript URL expressions, and evaluates the same templates against
// JSON parameter values.

mod accessor;
mod ast;
mod compiler;
mod error;
mod resolver;

pub use accessor::field_accessor;
pub use ast::{CompiledPath, FieldPath, UrlPart};
pub use compiler::PathCompiler;
pub use error::TemplateError;
pub use resolver::{lookup, remove_field, resolve_url, ResolveError};

// Binding resolver: picks one http binding per method and compiles it

use serde_json::Value;

use super::template::{
    field_accessor, remove_field, resolve_url, CompiledPath, FieldPath, PathCompiler,
    ResolveError, TemplateError,
};
use crate::config::descriptor::WHOLE_BODY;
use crate::config::{
    FileDescriptor, GeneratorConfig, HttpBinding, HttpVerb, MethodDescriptor, ServiceDescriptor,
};
use crate::error::GenError;

/// Where the HTTP body of a request comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyExpr {
    None,
    WholeParam,
    Field { path: FieldPath, accessor: String },
}

/// A binding compiled into the pieces a stub is rendered from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledBinding {
    pub path: CompiledPath,
    pub body: BodyExpr,
}

/// What a stub sends for one call
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParts {
    pub url: String,
    pub query: Option<Value>,
    pub body: Option<Value>,
}

impl CompiledBinding {
    pub fn url_expr(&self) -> &str {
        &self.path.url_expr
    }

    pub fn consumed(&self) -> &[String] {
        &self.path.consumed
    }

    /// Split a parameter value the way the generated stub does.
    ///
    /// Path fields are removed from the parameter after the URL is built, then
    /// the body is taken out. The residual is returned instead of mutated in place.
    pub fn split(&self, mut param: Value) -> Result<RequestParts, ResolveError> {
        let url = resolve_url(&self.path, &param)?;
        for path in self.path.fields() {
            remove_field(&mut param, path);
        }

        let parts = match &self.body {
            BodyExpr::None => RequestParts {
                url,
                query: Some(param),
                body: None,
            },
            BodyExpr::WholeParam => RequestParts {
                url,
                query: None,
                body: Some(param),
            },
            BodyExpr::Field { path, .. } => {
                let body = remove_field(&mut param, path).unwrap_or(Value::Null);
                RequestParts {
                    url,
                    query: Some(param),
                    body: Some(body),
                }
            }
        };
        Ok(parts)
    }
}

/// The unit the stub emitter renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodStub {
    pub service: String,
    pub method: String,
    pub verb: HttpVerb,
    pub binding: CompiledBinding,
}

impl MethodStub {
    pub fn function_name(&self) -> String {
        format!("{}{}", self.service, self.method)
    }
}

pub struct BindingResolver<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> BindingResolver<'a> {
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Compile a single binding.
    pub fn compile(&self, binding: &HttpBinding) -> Result<CompiledBinding, ResolveFailure> {
        let template = self.config.strip_prefix(&binding.path);
        let path = PathCompiler::compile(template, &self.config.param_var)
            .map_err(ResolveFailure::Template)?;

        let body = match binding.body.as_deref() {
            None => BodyExpr::None,
            Some(WHOLE_BODY) | Some("") => BodyExpr::WholeParam,
            Some(raw) => {
                let path = FieldPath::parse(raw).map_err(ResolveFailure::BodyField)?;
                let accessor = field_accessor(&self.config.param_var, &path);
                BodyExpr::Field { path, accessor }
            }
        };

        Ok(CompiledBinding { path, body })
    }

    /// Resolve the first binding of `method`. Methods without bindings yield `None`.
    pub fn resolve_method(
        &self,
        service: &ServiceDescriptor,
        method: &MethodDescriptor,
    ) -> Result<Option<MethodStub>, GenError> {
        tracing::debug!("Processing {}.{}", service.name, method.name);

        let Some(first) = method.bindings.first() else {
            tracing::debug!(
                "{}.{} has no http binding, no stub generated",
                service.name,
                method.name
            );
            return Ok(None);
        };

        if method.bindings.len() > 1 {
            tracing::debug!(
                "{}.{}: ignoring {} additional binding(s), only the first is generated",
                service.name,
                method.name,
                method.bindings.len() - 1
            );
        }

        let binding = self.compile(first).map_err(|failure| match failure {
            ResolveFailure::Template(source) => GenError::Template {
                service: service.name.clone(),
                method: method.name.clone(),
                source,
            },
            ResolveFailure::BodyField(source) => GenError::BodyField {
                service: service.name.clone(),
                method: method.name.clone(),
                source,
            },
        })?;

        Ok(Some(MethodStub {
            service: service.name.clone(),
            method: method.name.clone(),
            verb: first.verb,
            binding,
        }))
    }

    /// Resolve every method of every service in `file`, in input order.
    pub fn resolve_file(&self, file: &FileDescriptor) -> Result<Vec<MethodStub>, GenError> {
        let mut stubs = Vec::new();
        for service in &file.services {
            for method in &service.methods {
                if let Some(stub) = self.resolve_method(service, method)? {
                    stubs.push(stub);
                }
            }
        }

        if stubs.is_empty() {
            return Err(GenError::NoTargetService {
                file: file.name.clone(),
            });
        }
        Ok(stubs)
    }
}

/// Why a single binding failed to compile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveFailure {
    Template(TemplateError),
    BodyField(TemplateError),
}

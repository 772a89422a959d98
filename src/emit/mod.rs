// Stub emitter: renders compiled bindings into a CommonJS client module

use askama::Template;
use std::collections::HashSet;

use crate::config::{GeneratorConfig, ServiceDescriptor};
use crate::domain::{BodyExpr, MethodStub};
use crate::error::GenError;

// Template structs
#[derive(Template)]
#[template(path = "header.js", escape = "none")]
struct HeaderTemplate<'a> {
    transport: &'a str,
    transport_module: &'a str,
}

#[derive(Template)]
#[template(path = "handler.js", escape = "none")]
struct HandlerTemplate<'a> {
    function_name: String,
    param: &'a str,
    transport: &'a str,
    verb: &'static str,
    url_expr: &'a str,
    consumed: &'a [String],
    has_body_field: bool,
    body_accessor: &'a str,
    whole_param: bool,
}

#[derive(Template)]
#[template(path = "trailer.js", escape = "none")]
struct TrailerTemplate {
    services: Vec<ServiceExports>,
}

struct ServiceExports {
    name: String,
    methods: Vec<MethodExport>,
}

struct MethodExport {
    name: String,
    function_name: String,
}

/// Accumulates one generated file: header, one function per stub, trailer.
pub struct StubEmitter<'a> {
    config: &'a GeneratorConfig,
    buf: String,
    exported: Vec<String>,
}

impl<'a> StubEmitter<'a> {
    /// Start a new file by rendering the header.
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, GenError> {
        let mut emitter = Self {
            config,
            buf: String::new(),
            exported: Vec::new(),
        };
        let header = HeaderTemplate {
            transport: &config.transport_ident,
            transport_module: &config.transport_module,
        };
        emitter.push_rendered(&header)?;
        Ok(emitter)
    }

    pub fn emit_stub(&mut self, stub: &MethodStub) -> Result<(), GenError> {
        let binding = &stub.binding;
        let url_expr = match binding.url_expr() {
            "" => "''",
            expr => expr,
        };
        let (has_body_field, body_accessor, whole_param) = match &binding.body {
            BodyExpr::None => (false, "", false),
            BodyExpr::WholeParam => (false, "", true),
            BodyExpr::Field { accessor, .. } => (true, accessor.as_str(), false),
        };

        let function_name = stub.function_name();
        let handler = HandlerTemplate {
            function_name: function_name.clone(),
            param: &self.config.param_var,
            transport: &self.config.transport_ident,
            verb: stub.verb.as_str(),
            url_expr,
            consumed: binding.consumed(),
            has_body_field,
            body_accessor,
            whole_param,
        };

        self.buf.push('\n');
        self.push_rendered(&handler)?;
        self.exported.push(function_name);
        Ok(())
    }

    /// Render the export table and return the finished file.
    ///
    /// Every service is listed in input order; methods appear only if a stub
    /// was emitted for them.
    pub fn finish(mut self, services: &[ServiceDescriptor]) -> Result<String, GenError> {
        let exported: HashSet<&str> = self.exported.iter().map(String::as_str).collect();
        let services = services
            .iter()
            .map(|service| ServiceExports {
                name: service.name.clone(),
                methods: service
                    .methods
                    .iter()
                    .map(|method| MethodExport {
                        name: method.name.clone(),
                        function_name: format!("{}{}", service.name, method.name),
                    })
                    .filter(|export| exported.contains(export.function_name.as_str()))
                    .collect(),
            })
            .collect();

        self.buf.push('\n');
        self.push_rendered(&TrailerTemplate { services })?;
        Ok(self.buf)
    }

    fn push_rendered(&mut self, template: &impl Template) -> Result<(), GenError> {
        let rendered = template.render()?;
        self.buf.push_str(rendered.trim_end());
        self.buf.push('\n');
        Ok(())
    }
}

/// Render a complete file from already resolved stubs.
pub fn render_file(
    config: &GeneratorConfig,
    services: &[ServiceDescriptor],
    stubs: &[MethodStub],
) -> Result<String, GenError> {
    let mut emitter = StubEmitter::new(config)?;
    for stub in stubs {
        emitter.emit_stub(stub)?;
    }
    emitter.finish(services)
}

// Generator settings, passed explicitly through every stage

pub const DEFAULT_TRANSPORT_MODULE: &str = "../lib/xhr.js";
pub const DEFAULT_TRANSPORT_IDENT: &str = "xhr";
pub const DEFAULT_PARAM_VAR: &str = "p";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Stripped from the front of every path template before compiling
    pub path_prefix: String,
    /// Module path the generated file `require`s the transport from
    pub transport_module: String,
    /// Name the transport function is bound to in the generated file
    pub transport_ident: String,
    /// Name of the request parameter in generated stubs
    pub param_var: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            path_prefix: String::new(),
            transport_module: DEFAULT_TRANSPORT_MODULE.to_string(),
            transport_ident: DEFAULT_TRANSPORT_IDENT.to_string(),
            param_var: DEFAULT_PARAM_VAR.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_path_prefix(mut self, prefix: &str) -> Self {
        self.path_prefix = prefix.to_string();
        self
    }

    pub fn with_transport_module(mut self, module: &str) -> Self {
        self.transport_module = module.to_string();
        self
    }

    pub fn with_param_var(mut self, param: &str) -> Self {
        self.param_var = param.to_string();
        self
    }

    /// Remove the configured prefix from `path`; paths without it are returned unchanged.
    pub fn strip_prefix<'p>(&self, path: &'p str) -> &'p str {
        path.strip_prefix(self.path_prefix.as_str()).unwrap_or(path)
    }
}

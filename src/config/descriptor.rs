// Interface description input: files -> services -> methods -> http bindings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Body value that maps the whole request parameter to the HTTP body
pub const WHOLE_BODY: &str = "*";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DescriptorSet {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(default)]
    pub services: Vec<ServiceDescriptor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ServiceDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub bindings: Vec<HttpBinding>,
}

/// One REST mapping of an rpc method
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct HttpBinding {
    pub verb: HttpVerb,
    pub path: String,
    /// Absent: no body. `"*"`: the whole parameter. Otherwise a dotted field path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Put,
    Post,
    Delete,
    Patch,
}

impl HttpVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Put => "PUT",
            HttpVerb::Post => "POST",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DescriptorSet {
    /// Parse a descriptor document. YAML for `.yml`/`.yaml`, JSON otherwise.
    pub fn from_str_with_format(contents: &str, yaml: bool) -> Result<Self> {
        if yaml {
            serde_yaml::from_str(contents).context("Invalid YAML descriptor")
        } else {
            serde_json::from_str(contents).context("Invalid JSON descriptor")
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read descriptor {}", path.display()))?;
        let yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yml") | Some("yaml")
        );
        Self::from_str_with_format(&contents, yaml)
            .with_context(|| format!("Failed to load {}", path.display()))
    }

    /// Concatenate the files of several descriptor documents, preserving order.
    pub fn merge(sets: impl IntoIterator<Item = DescriptorSet>) -> Self {
        Self {
            files: sets.into_iter().flat_map(|set| set.files).collect(),
        }
    }
}

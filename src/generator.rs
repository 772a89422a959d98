// Generation pipeline: one output module per descriptor file

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

use crate::config::{DescriptorSet, FileDescriptor, GeneratorConfig};
use crate::domain::BindingResolver;
use crate::emit;
use crate::error::GenError;

/// Extension given to generated modules
pub const OUTPUT_EXTENSION: &str = "js";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub content: String,
}

/// Generate the client module for a single file.
///
/// Bindings are resolved before anything is rendered, so a failing file
/// produces no partial output.
pub fn generate_file(file: &FileDescriptor, config: &GeneratorConfig) -> Result<String, GenError> {
    let stubs = BindingResolver::new(config).resolve_file(file)?;
    emit::render_file(config, &file.services, &stubs)
}

/// Generate every file in `set`. Files that fail are reported and skipped.
pub fn generate(set: &DescriptorSet, config: &GeneratorConfig) -> Vec<GeneratedFile> {
    let mut generated = Vec::new();

    for file in &set.files {
        match generate_file(file, config) {
            Ok(content) => generated.push(GeneratedFile {
                name: output_name(&file.name),
                content,
            }),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", file.name, e);
            }
        }
    }

    generated
}

/// `foo/bar.proto` -> `foo/bar.js`
pub fn output_name(input: &str) -> String {
    Path::new(input)
        .with_extension(OUTPUT_EXTENSION)
        .to_string_lossy()
        .into_owned()
}

/// True if `name` stays below the directory it is joined onto
fn is_contained(name: &str) -> bool {
    Path::new(name).components().all(|component| {
        !matches!(
            component,
            Component::RootDir | Component::Prefix(_) | Component::ParentDir
        )
    })
}

/// Write generated files below `out_dir`, creating directories as needed.
///
/// Names that are absolute or climb out with `..` are skipped.
pub fn write_files(files: &[GeneratedFile], out_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        if !is_contained(&file.name) {
            tracing::warn!(
                "Skipping {}: output path escapes {}",
                file.name,
                out_dir.display()
            );
            continue;
        }

        let path = out_dir.join(&file.name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }
        std::fs::write(&path, &file.content)
            .with_context(|| format!("Could not write {}", path.display()))?;
        tracing::info!("Wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

//! Loading syntax trees and build options from documents.

use crate::ast::Node;
use crate::config::BuildOptions;
use crate::error::BuildError;
use crate::source::{FileSystemProvider, SourceProvider};
use std::path::Path;

/// Read and decode the JSON syntax tree at `path` from the filesystem.
pub fn load_tree(path: &Path) -> Result<Node, BuildError> {
    load_tree_with_provider(path, &FileSystemProvider)
}

/// Read and decode the JSON syntax tree at `path` using `provider`.
pub fn load_tree_with_provider(
    path: &Path,
    provider: &dyn SourceProvider,
) -> Result<Node, BuildError> {
    let text = read(path, provider)?;
    parse_tree(&text).map_err(|e| match e {
        BuildError::Load(msg) => BuildError::Load(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

/// Decode a JSON syntax tree document.
pub fn parse_tree(json: &str) -> Result<Node, BuildError> {
    serde_json::from_str(json).map_err(|e| BuildError::Load(format!("invalid syntax tree: {}", e)))
}

/// Read and decode TOML build options at `path` using `provider`.
pub fn load_options_with_provider(
    path: &Path,
    provider: &dyn SourceProvider,
) -> Result<BuildOptions, BuildError> {
    let text = read(path, provider)?;
    BuildOptions::from_toml_str(&text).map_err(|e| match e {
        BuildError::Load(msg) => BuildError::Load(format!("{}: {}", path.display(), msg)),
        other => other,
    })
}

pub fn load_options(path: &Path) -> Result<BuildOptions, BuildError> {
    load_options_with_provider(path, &FileSystemProvider)
}

fn read(path: &Path, provider: &dyn SourceProvider) -> Result<String, BuildError> {
    provider
        .read_source(path)
        .map_err(|e| BuildError::Load(format!("cannot open file '{}': {}", path.display(), e)))
}

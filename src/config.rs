//! Configuration surface for a generation run.
//!
//! Configuration comes from a `typefence.toml` file sitting alongside the
//! declaration file (auto-detected) or passed explicitly; every field has a
//! default so running without a config file works. Relative paths are
//! resolved against the current working directory.

use crate::error::GeneratorError;
use crate::spec::Operation;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// File name auto-detected alongside the declaration file.
pub const CONFIG_FILE_NAME: &str = "typefence.toml";

/// Default class-map artifact name inside the output directory.
pub const DEFAULT_CLASS_MAP_FILE: &str = "class_map.rs";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Target directory for generated artifacts; created if absent and
    /// resolved to an absolute path at the start of a run.
    #[serde(default = "default_generated_files_dir")]
    pub generated_files_dir: PathBuf,

    /// Target path for the class-map artifact; defaults to
    /// `<generated_files_dir>/class_map.rs`.
    #[serde(default)]
    pub generated_class_map_file: Option<PathBuf>,

    /// Operation name -> annotation identifier that triggers it.
    #[serde(default = "default_method_annotations_map")]
    pub method_annotations_map: BTreeMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            generated_files_dir: default_generated_files_dir(),
            generated_class_map_file: None,
            method_annotations_map: default_method_annotations_map(),
        }
    }
}

impl GeneratorConfig {
    /// The effective class-map artifact path.
    pub fn class_map_path(&self) -> PathBuf {
        self.generated_class_map_file
            .clone()
            .unwrap_or_else(|| self.generated_files_dir.join(DEFAULT_CLASS_MAP_FILE))
    }

    /// Invert `method_annotations_map` into annotation identifier ->
    /// operation, validating both sides.
    pub fn annotation_operations(&self) -> Result<BTreeMap<String, Operation>, GeneratorError> {
        let mut map = BTreeMap::new();
        for (op, annotation) in &self.method_annotations_map {
            let op = Operation::from_str(op).map_err(|reason| GeneratorError::InvalidConfig {
                reason: format!("method_annotations_map: {reason}"),
            })?;
            if map.insert(annotation.clone(), op).is_some() {
                return Err(GeneratorError::InvalidConfig {
                    reason: format!(
                        "method_annotations_map: annotation `{annotation}` mapped twice"
                    ),
                });
            }
        }
        Ok(map)
    }
}

fn default_generated_files_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_method_annotations_map() -> BTreeMap<String, String> {
    Operation::ALL
        .into_iter()
        .map(|op| {
            let mut annotation = op.as_str().to_string();
            if let Some(first) = annotation.get_mut(0..1) {
                first.make_ascii_uppercase();
            }
            (op.as_str().to_string(), annotation)
        })
        .collect()
}

/// Load configuration from a TOML file.
///
/// Returns `Ok(None)` when the file does not exist (not an error), `Err`
/// when it exists but fails to parse.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", config_path.display()))?;
    Ok(Some(config))
}

/// Look for `typefence.toml` in the same directory as the declaration file.
pub fn auto_detect_config_path(spec_path: &Path) -> Option<PathBuf> {
    let config_path = spec_path.parent()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config path: explicitly provided path first, then
/// auto-detected alongside the declaration file, then none.
pub fn resolve_config_path(explicit_path: Option<&Path>, spec_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }
    auto_detect_config_path(spec_path)
}

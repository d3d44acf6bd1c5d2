use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// A declaration file as parsed, before validation and defaulting.
///
/// This is the serialized output of the annotation-discovery front end: one
/// entry per annotated class, one entry per annotated property.
#[derive(Debug, Clone, Deserialize)]
pub struct DeclarationFile {
    /// Optional label for the declaration set, used in progress output.
    #[serde(default)]
    pub name: Option<String>,
    pub classes: Vec<RawClassDeclaration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawClassDeclaration {
    pub name: String,
    #[serde(default)]
    pub properties: Vec<RawPropertyDeclaration>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPropertyDeclaration {
    pub name: String,
    /// Element type identifier: `string`, `int`, `float`, `bool`, or a named
    /// type/interface. Mutually exclusive with `enum`.
    #[serde(rename = "type", default)]
    pub type_name: Option<String>,
    /// Enumerated literal set. Mutually exclusive with `type`.
    #[serde(rename = "enum", default)]
    pub one_of: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub collection: bool,
    /// Explicit operation list; mutually exclusive with `annotations`.
    #[serde(default)]
    pub operations: Option<Vec<String>>,
    /// Annotation identifiers to resolve through the configured
    /// `method_annotations_map`; mutually exclusive with `operations`.
    #[serde(default)]
    pub annotations: Option<Vec<String>>,
    /// Operation name -> explicit accessor name.
    #[serde(default)]
    pub method_names: BTreeMap<String, String>,
}

/// Load a declaration file, YAML or JSON by extension.
pub fn load_declarations(path: &Path) -> anyhow::Result<DeclarationFile> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = if path
        .extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
    {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    let file: DeclarationFile = serde_json::from_value(value)?;
    tracing::debug!(
        path = %path.display(),
        classes = file.classes.len(),
        "loaded declaration file"
    );
    Ok(file)
}

use askama::Template;
use std::path::Path;

use super::class_map::ClassMapEntry;
use super::methods::PropertyRender;
use crate::error::GeneratorError;
use crate::spec::Operation;

/// Template data for one generated class artifact.
#[derive(Template)]
#[template(path = "class.rs.txt", escape = "none")]
pub struct ClassTemplateData {
    /// Owner class name from the declaration.
    pub source_class: String,
    /// Generated class name (owner plus fixed suffix).
    pub generated_class: String,
    /// Whether any property is a collection (drives imports).
    pub has_collections: bool,
    /// Whether any property is a scalar (drives imports).
    pub has_scalars: bool,
    /// Whether any accessor can fail (everything except a get-only class).
    pub has_fallible: bool,
    /// Properties in declaration order.
    pub properties: Vec<PropertyRender>,
}

impl ClassTemplateData {
    pub fn new(
        source_class: String,
        generated_class: String,
        properties: Vec<PropertyRender>,
    ) -> Self {
        let has_collections = properties.iter().any(|p| p.collection);
        let has_scalars = properties.iter().any(|p| !p.collection);
        let has_fallible = properties
            .iter()
            .flat_map(|p| p.methods.iter())
            .any(|m| m.op != Operation::Get.as_str());
        ClassTemplateData {
            source_class,
            generated_class,
            has_collections,
            has_scalars,
            has_fallible,
            properties,
        }
    }
}

/// Template data for the class-map artifact.
#[derive(Template)]
#[template(path = "class_map.rs.txt", escape = "none")]
pub struct ClassMapTemplateData {
    /// Entries sorted by source class name.
    pub entries: Vec<ClassMapEntry>,
}

/// Template data for the generated mod.rs.
#[derive(Template)]
#[template(path = "mod.rs.txt", escape = "none")]
pub struct ModRsTemplateData {
    pub modules: Vec<String>,
}

/// Render and write one class artifact.
pub fn write_class(path: &Path, data: &ClassTemplateData) -> Result<(), GeneratorError> {
    let rendered = data.render()?;
    std::fs::write(path, rendered).map_err(|e| GeneratorError::write(path, e))?;
    println!("✅ Generated {} → {path:?}", data.generated_class);
    Ok(())
}

/// Render and write the class-map artifact.
pub fn write_class_map(path: &Path, data: &ClassMapTemplateData) -> Result<(), GeneratorError> {
    let rendered = data.render()?;
    std::fs::write(path, rendered).map_err(|e| GeneratorError::write(path, e))?;
    println!("✅ Generated class map → {path:?}");
    Ok(())
}

/// Render and write a mod.rs declaring the generated modules.
pub fn write_mod_rs(dir: &Path, modules: &[String]) -> Result<(), GeneratorError> {
    let path = dir.join("mod.rs");
    let rendered = ModRsTemplateData {
        modules: modules.to_vec(),
    }
    .render()?;
    std::fs::write(&path, rendered).map_err(|e| GeneratorError::write(&path, e))?;
    println!("✅ Updated mod.rs → {path:?}");
    Ok(())
}

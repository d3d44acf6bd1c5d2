use std::fs;
use std::path::PathBuf;

use super::class_map::{ClassMapBuilder, ClassMapEntry};
use super::methods::render_property;
use super::naming::{generated_class_name, generated_module_name};
use super::templates::{
    write_class, write_class_map, write_mod_rs, ClassMapTemplateData, ClassTemplateData,
};
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::spec::{is_identifier, DeclarationSet, RejectedClass};

/// One successfully generated class artifact.
#[derive(Debug, Clone)]
pub struct GeneratedClass {
    pub source_class: String,
    pub generated_class: String,
    pub path: PathBuf,
}

/// The outcome of one generation run.
#[derive(Debug)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub class_map_path: PathBuf,
    pub generated: Vec<GeneratedClass>,
    /// Classes whose declarations were rejected; their artifacts were not
    /// written, sibling classes were unaffected.
    pub skipped: Vec<RejectedClass>,
}

/// Generate all artifacts for a validated declaration set.
///
/// The declaration set is consumed: declarations feed exactly one run.
pub fn generate(
    config: &GeneratorConfig,
    set: DeclarationSet,
) -> Result<GenerationReport, GeneratorError> {
    generate_with_options(config, set, false)
}

/// Like [`generate`], with a dry-run mode that renders nothing to disk and
/// only reports what would be written.
pub fn generate_with_options(
    config: &GeneratorConfig,
    set: DeclarationSet,
    dry_run: bool,
) -> Result<GenerationReport, GeneratorError> {
    let mut output_dir = config.generated_files_dir.clone();
    if !dry_run {
        fs::create_dir_all(&output_dir).map_err(|e| GeneratorError::write(&output_dir, e))?;
        output_dir = fs::canonicalize(&output_dir).map_err(|e| GeneratorError::write(&output_dir, e))?;
    }

    let configured_map_path = config.class_map_path();
    let class_map_in_output_dir = configured_map_path.parent() == Some(config.generated_files_dir.as_path());
    let class_map_path = if class_map_in_output_dir {
        output_dir.join(configured_map_path.file_name().unwrap_or_default())
    } else {
        configured_map_path
    };

    tracing::debug!(
        classes = set.classes.len(),
        rejected = set.rejected.len(),
        output_dir = %output_dir.display(),
        dry_run,
        "starting generation run"
    );

    let mut builder = ClassMapBuilder::new();
    let mut generated = Vec::new();
    let mut modules = Vec::new();

    for class in &set.classes {
        let properties = class.properties.iter().map(render_property).collect();
        let class_name = generated_class_name(&class.name);
        let module = generated_module_name(&class.name);
        let file = format!("{module}.rs");
        let path = output_dir.join(&file);

        let data = ClassTemplateData::new(class.name.clone(), class_name.clone(), properties);
        if dry_run {
            println!("📝 Would generate {class_name} → {path:?}");
        } else {
            write_class(&path, &data)?;
        }

        builder.insert(ClassMapEntry {
            source_class: class.name.clone(),
            generated_class: class_name.clone(),
            file,
        })?;
        modules.push(module);
        generated.push(GeneratedClass {
            source_class: class.name.clone(),
            generated_class: class_name,
            path,
        });
    }

    let map = builder.finalize();
    if dry_run {
        println!("📝 Would generate class map → {class_map_path:?}");
    } else {
        if let Some(parent) = class_map_path.parent() {
            fs::create_dir_all(parent).map_err(|e| GeneratorError::write(parent, e))?;
        }
        write_class_map(&class_map_path, &ClassMapTemplateData { entries: map.entries })?;

        let mut module_list = Vec::new();
        if class_map_in_output_dir {
            if let Some(stem) = class_map_path.file_stem().and_then(|s| s.to_str()) {
                if is_identifier(stem) {
                    module_list.push(stem.to_string());
                }
            }
        }
        module_list.extend(modules);
        write_mod_rs(&output_dir, &module_list)?;
    }

    for rejected in &set.rejected {
        println!("⚠️  Skipping class {}: {}", rejected.name, rejected.error);
    }

    Ok(GenerationReport {
        output_dir,
        class_map_path,
        generated,
        skipped: set.rejected,
    })
}

use super::load::{DeclarationFile, RawClassDeclaration, RawPropertyDeclaration};
use super::types::{ClassDeclaration, Operation, PropertyDeclaration};
use crate::checker::TypeDescriptor;
use crate::error::GeneratorError;
use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::str::FromStr;

/// The outcome of validating one declaration file.
///
/// Classes whose declarations violate a data-model invariant are rejected
/// individually; valid sibling classes still generate.
#[derive(Debug)]
pub struct DeclarationSet {
    pub classes: Vec<ClassDeclaration>,
    pub rejected: Vec<RejectedClass>,
}

#[derive(Debug)]
pub struct RejectedClass {
    pub name: String,
    pub error: GeneratorError,
}

/// Validate and default a parsed declaration file.
///
/// Duplicate class names fail the whole run (duplicate policy: reject);
/// per-class malformations are collected in [`DeclarationSet::rejected`]
/// without affecting siblings. `annotation_operations` maps annotation
/// identifiers to the operations they trigger (the inverted
/// `method_annotations_map` from configuration).
pub fn build_declarations(
    file: &DeclarationFile,
    annotation_operations: &BTreeMap<String, Operation>,
) -> Result<DeclarationSet, GeneratorError> {
    let mut seen = HashSet::new();
    for class in &file.classes {
        if !seen.insert(class.name.as_str()) {
            return Err(GeneratorError::DuplicateClassMapEntry {
                class: class.name.clone(),
            });
        }
    }

    let mut classes = Vec::new();
    let mut rejected = Vec::new();
    for raw in &file.classes {
        match build_class(raw, annotation_operations) {
            Ok(class) => classes.push(class),
            Err(error) => {
                tracing::debug!(class = %raw.name, %error, "rejected class declaration");
                rejected.push(RejectedClass {
                    name: raw.name.clone(),
                    error,
                });
            }
        }
    }
    Ok(DeclarationSet { classes, rejected })
}

/// Validate one class declaration.
pub fn build_class(
    raw: &RawClassDeclaration,
    annotation_operations: &BTreeMap<String, Operation>,
) -> Result<ClassDeclaration, GeneratorError> {
    if !is_identifier(&raw.name) {
        return Err(GeneratorError::malformed(
            &raw.name,
            "",
            "class name is not a valid identifier",
        ));
    }
    if raw.properties.is_empty() {
        return Err(GeneratorError::malformed(
            &raw.name,
            "",
            "no properties declared",
        ));
    }
    let mut names = HashSet::new();
    let mut properties = Vec::new();
    for prop in &raw.properties {
        if !names.insert(prop.name.as_str()) {
            return Err(GeneratorError::malformed(
                &raw.name,
                &prop.name,
                "property declared twice",
            ));
        }
        properties.push(build_property(&raw.name, prop, annotation_operations)?);
    }
    Ok(ClassDeclaration {
        name: raw.name.clone(),
        properties,
    })
}

fn build_property(
    class: &str,
    raw: &RawPropertyDeclaration,
    annotation_operations: &BTreeMap<String, Operation>,
) -> Result<PropertyDeclaration, GeneratorError> {
    if !is_identifier(&raw.name) {
        return Err(GeneratorError::malformed(
            class,
            &raw.name,
            "property name is not a valid identifier",
        ));
    }

    let element_type = build_element_type(class, raw)?;
    let operations = build_operations(class, raw, annotation_operations)?;
    let method_names = build_method_names(class, raw, &operations)?;

    Ok(PropertyDeclaration {
        owner_class: class.to_string(),
        name: raw.name.clone(),
        element_type,
        collection: raw.collection,
        operations,
        method_names,
    })
}

fn build_element_type(
    class: &str,
    raw: &RawPropertyDeclaration,
) -> Result<TypeDescriptor, GeneratorError> {
    let descriptor = match (&raw.type_name, &raw.one_of) {
        (Some(_), Some(_)) => {
            return Err(GeneratorError::malformed(
                class,
                &raw.name,
                "`type` and `enum` are mutually exclusive",
            ));
        }
        (None, None) => {
            return Err(GeneratorError::malformed(
                class,
                &raw.name,
                "one of `type` or `enum` is required",
            ));
        }
        (Some(name), None) => match name.as_str() {
            "string" => TypeDescriptor::string(),
            "int" => TypeDescriptor::int(),
            "float" => TypeDescriptor::float(),
            "bool" => TypeDescriptor::boolean(),
            other => {
                if !is_identifier(other) {
                    return Err(GeneratorError::malformed(
                        class,
                        &raw.name,
                        format!("`{other}` is not a valid type identifier"),
                    ));
                }
                TypeDescriptor::named(other)
            }
        },
        (None, Some(literals)) => {
            if literals.is_empty() {
                return Err(GeneratorError::malformed(
                    class,
                    &raw.name,
                    "`enum` must list at least one literal",
                ));
            }
            let mut values = Vec::with_capacity(literals.len());
            for literal in literals {
                values.push(literal_value(class, &raw.name, literal)?);
            }
            TypeDescriptor::one_of(values)
        }
    };
    Ok(if raw.nullable {
        descriptor.nullable()
    } else {
        descriptor
    })
}

fn literal_value(
    class: &str,
    property: &str,
    literal: &serde_json::Value,
) -> Result<Value, GeneratorError> {
    match literal {
        serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(GeneratorError::malformed(
                    class,
                    property,
                    format!("enum literal `{n}` is out of range"),
                ))
            }
        }
        serde_json::Value::String(s) => Ok(Value::str(s)),
        serde_json::Value::Null => Err(GeneratorError::malformed(
            class,
            property,
            "null is not an enum literal; use `nullable` instead",
        )),
        other => Err(GeneratorError::malformed(
            class,
            property,
            format!("enum literal `{other}` is not a scalar"),
        )),
    }
}

fn build_operations(
    class: &str,
    raw: &RawPropertyDeclaration,
    annotation_operations: &BTreeMap<String, Operation>,
) -> Result<BTreeSet<Operation>, GeneratorError> {
    let operations: BTreeSet<Operation> = match (&raw.operations, &raw.annotations) {
        (Some(_), Some(_)) => {
            return Err(GeneratorError::malformed(
                class,
                &raw.name,
                "`operations` and `annotations` are mutually exclusive",
            ));
        }
        (None, None) => PropertyDeclaration::default_operations(raw.collection),
        (Some(ops), None) => {
            let mut set = BTreeSet::new();
            for op in ops {
                let op = Operation::from_str(op)
                    .map_err(|reason| GeneratorError::malformed(class, &raw.name, reason))?;
                set.insert(op);
            }
            set
        }
        (None, Some(annotations)) => {
            let mut set = BTreeSet::new();
            for annotation in annotations {
                let op = annotation_operations.get(annotation).ok_or_else(|| {
                    GeneratorError::malformed(
                        class,
                        &raw.name,
                        format!("unknown annotation `{annotation}`"),
                    )
                })?;
                set.insert(*op);
            }
            set
        }
    };
    if operations.is_empty() {
        return Err(GeneratorError::malformed(
            class,
            &raw.name,
            "no operations requested",
        ));
    }
    if !raw.collection {
        if let Some(op) = operations.iter().find(|op| op.requires_collection()) {
            return Err(GeneratorError::malformed(
                class,
                &raw.name,
                format!("operation `{op}` requires `collection: true`"),
            ));
        }
    }
    Ok(operations)
}

fn build_method_names(
    class: &str,
    raw: &RawPropertyDeclaration,
    operations: &BTreeSet<Operation>,
) -> Result<BTreeMap<Operation, String>, GeneratorError> {
    let mut method_names = BTreeMap::new();
    for (op, name) in &raw.method_names {
        let op = Operation::from_str(op)
            .map_err(|reason| GeneratorError::malformed(class, &raw.name, reason))?;
        if !operations.contains(&op) {
            return Err(GeneratorError::malformed(
                class,
                &raw.name,
                format!("method name override for unrequested operation `{op}`"),
            ));
        }
        if !is_identifier(name) {
            return Err(GeneratorError::malformed(
                class,
                &raw.name,
                format!("method name `{name}` is not a valid identifier"),
            ));
        }
        method_names.insert(op, name.clone());
    }
    Ok(method_names)
}

/// Whether `s` is a plain ASCII identifier (letters, digits, underscores,
/// not starting with a digit).
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::config::GeneratorConfig;

    fn raw_property(name: &str) -> RawPropertyDeclaration {
        RawPropertyDeclaration {
            name: name.to_string(),
            type_name: Some("DateTimeInterface".to_string()),
            one_of: None,
            nullable: false,
            collection: true,
            operations: None,
            annotations: None,
            method_names: BTreeMap::new(),
        }
    }

    fn annotation_operations() -> BTreeMap<String, Operation> {
        GeneratorConfig::default().annotation_operations().unwrap()
    }

    #[test]
    fn collection_defaults_to_all_operations() {
        let raw = RawClassDeclaration {
            name: "Foo".to_string(),
            properties: vec![raw_property("eventDates")],
        };
        let class = build_class(&raw, &annotation_operations()).unwrap();
        assert_eq!(class.properties[0].operations.len(), 5);
    }

    #[test]
    fn scalar_rejects_collection_operations() {
        let mut prop = raw_property("title");
        prop.collection = false;
        prop.operations = Some(vec!["set".to_string(), "add".to_string()]);
        let raw = RawClassDeclaration {
            name: "Foo".to_string(),
            properties: vec![prop],
        };
        let err = build_class(&raw, &annotation_operations()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::MalformedDeclaration { .. }
        ));
    }

    #[test]
    fn annotations_resolve_through_map() {
        let mut prop = raw_property("eventDates");
        prop.annotations = Some(vec!["Add".to_string(), "Get".to_string()]);
        let raw = RawClassDeclaration {
            name: "Foo".to_string(),
            properties: vec![prop],
        };
        let class = build_class(&raw, &annotation_operations()).unwrap();
        let ops: Vec<Operation> = class.properties[0].operations.iter().copied().collect();
        assert_eq!(ops, vec![Operation::Get, Operation::Add]);
    }

    #[test]
    fn duplicate_classes_reject_the_run() {
        let file = DeclarationFile {
            name: None,
            classes: vec![
                RawClassDeclaration {
                    name: "Foo".to_string(),
                    properties: vec![raw_property("eventDates")],
                },
                RawClassDeclaration {
                    name: "Foo".to_string(),
                    properties: vec![raw_property("tags")],
                },
            ],
        };
        let err = build_declarations(&file, &annotation_operations()).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::DuplicateClassMapEntry { .. }
        ));
    }

    #[test]
    fn malformed_class_is_isolated_from_siblings() {
        let mut bad = raw_property("broken");
        bad.type_name = None;
        let file = DeclarationFile {
            name: None,
            classes: vec![
                RawClassDeclaration {
                    name: "Bad".to_string(),
                    properties: vec![bad],
                },
                RawClassDeclaration {
                    name: "Good".to_string(),
                    properties: vec![raw_property("eventDates")],
                },
            ],
        };
        let set = build_declarations(&file, &annotation_operations()).unwrap();
        assert_eq!(set.classes.len(), 1);
        assert_eq!(set.classes[0].name, "Good");
        assert_eq!(set.rejected.len(), 1);
        assert_eq!(set.rejected[0].name, "Bad");
    }
}

//! Turns validated property declarations into template render data.
//!
//! Each property becomes one backing field plus one [`MethodRender`] per
//! requested operation, emitted in the canonical order (set, get, add,
//! remove, contains). Descriptor construction is embedded in the artifact as
//! a Rust expression so the generated class re-creates the exact validation
//! rule the declaration described.

use super::naming::{method_name, rust_field_ident, rust_method_ident};
use crate::checker::{ScalarType, TypeDescriptor, TypeKind};
use crate::spec::PropertyDeclaration;
use crate::value::Value;

/// One accessor method to render.
#[derive(Debug, Clone)]
pub struct MethodRender {
    /// Operation discriminator used by the template: `set`, `get`, `add`,
    /// `remove` or `contains`.
    pub op: String,
    /// Rust method identifier, e.g. `add_event_date`.
    pub name: String,
    /// Backing field identifier.
    pub field: String,
    /// Declared property name, for doc comments.
    pub property: String,
}

/// One property of a generated class.
#[derive(Debug, Clone)]
pub struct PropertyRender {
    pub field: String,
    /// Rust expression re-creating the property's [`TypeDescriptor`].
    pub descriptor_expr: String,
    pub collection: bool,
    pub methods: Vec<MethodRender>,
}

/// Build render data for one property declaration.
pub fn render_property(decl: &PropertyDeclaration) -> PropertyRender {
    let field = rust_field_ident(&decl.name);
    let methods = decl
        .operations
        .iter()
        .map(|op| {
            let conceptual = method_name(*op, &decl.name, &decl.method_names);
            MethodRender {
                op: op.as_str().to_string(),
                name: rust_method_ident(&conceptual),
                field: field.clone(),
                property: decl.name.clone(),
            }
        })
        .collect();
    PropertyRender {
        field,
        descriptor_expr: descriptor_literal(&decl.element_type),
        collection: decl.collection,
        methods,
    }
}

/// Rust source expression constructing `descriptor`.
pub fn descriptor_literal(descriptor: &TypeDescriptor) -> String {
    let base = match descriptor.kind() {
        TypeKind::Scalar(ScalarType::Str) => "TypeDescriptor::string()".to_string(),
        TypeKind::Scalar(ScalarType::Int) => "TypeDescriptor::int()".to_string(),
        TypeKind::Scalar(ScalarType::Float) => "TypeDescriptor::float()".to_string(),
        TypeKind::Scalar(ScalarType::Bool) => "TypeDescriptor::boolean()".to_string(),
        TypeKind::OneOf(values) => {
            let literals: Vec<String> = values.iter().map(value_literal).collect();
            format!("TypeDescriptor::one_of(vec![{}])", literals.join(", "))
        }
        TypeKind::Named(name) => format!("TypeDescriptor::named({name:?})"),
    };
    if descriptor.is_nullable() {
        format!("{base}.nullable()")
    } else {
        base
    }
}

fn value_literal(value: &Value) -> String {
    match value {
        Value::Null => "Value::Null".to_string(),
        Value::Bool(b) => format!("Value::Bool({b})"),
        Value::Int(i) => format!("Value::Int({i})"),
        Value::Float(x) => format!("Value::Float({x:?})"),
        Value::Str(s) => format!("Value::str({s:?})"),
        // Declaration building only admits scalar literals; compound values
        // cannot reach an enumerated set.
        Value::Seq(_) | Value::Object(_) => "Value::Null".to_string(),
    }
}

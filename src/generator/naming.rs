use crate::spec::Operation;
use std::collections::BTreeMap;

/// Fixed suffix appended to the owner class name.
pub const GENERATED_CLASS_SUFFIX: &str = "Generated";

/// Convert a snake_case or camelCase string to CamelCase.
pub fn to_camel_case(s: &str) -> String {
    s.split('_')
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert a camelCase or CamelCase string to snake_case.
pub fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            out.push(c);
        }
    }
    out
}

/// Singularize a (camelCase) property name for element-wise accessors:
/// `eventDates` -> `eventDate`, `categories` -> `category`,
/// `statuses` -> `status`. Uninflected names pass through unchanged.
pub fn singularize(s: &str) -> String {
    if let Some(stem) = s.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["ses", "xes", "zes", "ches", "shes"] {
        if let Some(stem) = s.strip_suffix(suffix) {
            if !stem.is_empty() {
                return format!("{stem}{}", &suffix[..suffix.len() - 2]);
            }
        }
    }
    if s.ends_with('s') && !s.ends_with("ss") && s.len() > 1 {
        return s[..s.len() - 1].to_string();
    }
    s.to_string()
}

/// Conventional accessor name for one operation: verb plus the CamelCased
/// property name, singularized for the element-wise operations
/// (`eventDates`/add -> `addEventDate`). Overrides win as given.
pub fn method_name(
    op: Operation,
    property: &str,
    overrides: &BTreeMap<Operation, String>,
) -> String {
    if let Some(name) = overrides.get(&op) {
        return name.clone();
    }
    let subject = match op {
        Operation::Set | Operation::Get => to_camel_case(property),
        Operation::Add | Operation::Remove | Operation::Contains => {
            to_camel_case(&singularize(property))
        }
    };
    format!("{}{}", op.as_str(), subject)
}

/// Rust identifier for an accessor: snake_case of the conventional name,
/// keyword-sanitized.
pub fn rust_method_ident(conceptual_name: &str) -> String {
    sanitize_rust_identifier(&to_snake_case(conceptual_name))
}

/// Rust identifier for the backing field of a property.
pub fn rust_field_ident(property: &str) -> String {
    sanitize_rust_identifier(&to_snake_case(property))
}

/// Generated class name: owner class plus a fixed suffix.
pub fn generated_class_name(source_class: &str) -> String {
    format!("{source_class}{GENERATED_CLASS_SUFFIX}")
}

/// Module (and file stem) name of a generated class artifact.
pub fn generated_module_name(source_class: &str) -> String {
    to_snake_case(&generated_class_name(source_class))
}

pub(crate) fn sanitize_rust_identifier(name: &str) -> String {
    const KEYWORDS: &[&str] = &[
        "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn",
        "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref",
        "return", "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe",
        "use", "where", "while", "async", "await", "dyn",
    ];
    if KEYWORDS.contains(&name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

//! # Declaration Linter Module
//!
//! Checks a declaration file for structural errors and convention drift
//! before generation:
//!
//! 1. **Duplicate classes** - Each owner class may be declared once
//! 2. **Element type** - Exactly one of `type` / `enum` per property
//! 3. **Operation scope** - `add`/`remove`/`contains` need `collection: true`
//! 4. **Unknown annotations/operations** - Must resolve through the
//!    configured `method_annotations_map` or the canonical operation names
//! 5. **Naming conventions** - camelCase properties, CamelCase named types
//! 6. **Enum hygiene** - Non-empty sets, no duplicate literals
//!
//! Errors will also fail generation; warnings generate but deserve a look.

use crate::config::GeneratorConfig;
use crate::spec::{
    is_identifier, load_declarations, Operation, RawClassDeclaration, RawPropertyDeclaration,
};
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - Will cause generation to reject the class or the run
    Error,
    /// Warning - Generates, but likely not what the author intended
    Warning,
    /// Info - Best practice suggestion
    Info,
}

/// A lint issue found in a declaration file
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "class:Foo", "property:Foo.eventDates")
    pub location: String,
    /// Severity of the issue
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "operation_scope", "duplicate_class")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a declaration file against the active configuration.
pub fn lint_declarations(
    spec_path: &Path,
    config: &GeneratorConfig,
) -> anyhow::Result<Vec<LintIssue>> {
    let file = load_declarations(spec_path)?;
    let annotation_operations = config.annotation_operations()?;
    let known_annotations: HashSet<&String> = annotation_operations.keys().collect();

    let mut issues = Vec::new();
    let mut seen_classes = HashSet::new();
    for class in &file.classes {
        let class_location = format!("class:{}", class.name);
        if !seen_classes.insert(class.name.as_str()) {
            issues.push(LintIssue::new(
                class_location.clone(),
                LintSeverity::Error,
                "duplicate_class",
                format!("class `{}` is declared more than once", class.name),
            ));
            continue;
        }
        if class.properties.is_empty() {
            issues.push(LintIssue::new(
                class_location,
                LintSeverity::Error,
                "empty_class",
                "class declares no properties",
            ));
            continue;
        }
        for property in &class.properties {
            lint_property(&mut issues, class, property, &known_annotations);
        }
    }
    Ok(issues)
}

fn lint_property(
    issues: &mut Vec<LintIssue>,
    class: &RawClassDeclaration,
    property: &RawPropertyDeclaration,
    known_annotations: &HashSet<&String>,
) {
    let location = format!("property:{}.{}", class.name, property.name);

    if !is_camel_case(&property.name) {
        issues.push(
            LintIssue::new(
                location.clone(),
                LintSeverity::Warning,
                "property_casing",
                format!("property `{}` is not camelCase", property.name),
            )
            .with_suggestion("name properties like `eventDates`"),
        );
    }

    match (&property.type_name, &property.one_of) {
        (Some(_), Some(_)) => issues.push(LintIssue::new(
            location.clone(),
            LintSeverity::Error,
            "element_type",
            "`type` and `enum` are mutually exclusive",
        )),
        (None, None) => issues.push(LintIssue::new(
            location.clone(),
            LintSeverity::Error,
            "element_type",
            "one of `type` or `enum` is required",
        )),
        (Some(name), None) => {
            let scalar = matches!(name.as_str(), "string" | "int" | "float" | "bool");
            if !scalar && !name.starts_with(|c: char| c.is_ascii_uppercase()) {
                issues.push(
                    LintIssue::new(
                        location.clone(),
                        LintSeverity::Warning,
                        "type_casing",
                        format!("named type `{name}` does not start with an uppercase letter"),
                    )
                    .with_suggestion("scalar types are `string`, `int`, `float`, `bool`"),
                );
            }
        }
        (None, Some(literals)) => {
            if literals.is_empty() {
                issues.push(LintIssue::new(
                    location.clone(),
                    LintSeverity::Error,
                    "empty_enum",
                    "`enum` must list at least one literal",
                ));
            }
            let mut seen = Vec::new();
            for literal in literals {
                if seen.contains(&literal) {
                    issues.push(LintIssue::new(
                        location.clone(),
                        LintSeverity::Warning,
                        "duplicate_literal",
                        format!("enum literal `{literal}` is listed twice"),
                    ));
                } else {
                    seen.push(literal);
                }
            }
        }
    }

    if property.operations.is_some() && property.annotations.is_some() {
        issues.push(LintIssue::new(
            location.clone(),
            LintSeverity::Error,
            "operation_source",
            "`operations` and `annotations` are mutually exclusive",
        ));
    }
    if let Some(operations) = &property.operations {
        if operations.is_empty() {
            issues.push(LintIssue::new(
                location.clone(),
                LintSeverity::Warning,
                "no_operations",
                "empty `operations` list requests nothing to generate",
            ));
        }
        for op in operations {
            match Operation::from_str(op) {
                Ok(op) if op.requires_collection() && !property.collection => {
                    issues.push(
                        LintIssue::new(
                            location.clone(),
                            LintSeverity::Error,
                            "operation_scope",
                            format!("operation `{op}` requires `collection: true`"),
                        )
                        .with_suggestion("scalar properties support `set` and `get`"),
                    );
                }
                Ok(_) => {}
                Err(reason) => issues.push(LintIssue::new(
                    location.clone(),
                    LintSeverity::Error,
                    "unknown_operation",
                    reason,
                )),
            }
        }
    }
    if let Some(annotations) = &property.annotations {
        for annotation in annotations {
            if !known_annotations.contains(annotation) {
                issues.push(
                    LintIssue::new(
                        location.clone(),
                        LintSeverity::Error,
                        "unknown_annotation",
                        format!("annotation `{annotation}` is not in method_annotations_map"),
                    )
                    .with_suggestion("map it in typefence.toml under [method_annotations_map]"),
                );
            }
        }
    }

    for op in property.method_names.keys() {
        if Operation::from_str(op).is_err() {
            issues.push(LintIssue::new(
                location.clone(),
                LintSeverity::Error,
                "unknown_operation",
                format!("method name override for unknown operation `{op}`"),
            ));
        }
    }
}

fn is_camel_case(s: &str) -> bool {
    is_identifier(s)
        && s.starts_with(|c: char| c.is_ascii_lowercase())
        && !s.contains('_')
}

/// Print lint issues grouped by severity.
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let errors: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .collect();
    let warnings: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Warning)
        .collect();
    let infos: Vec<_> = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Info)
        .collect();

    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    if !errors.is_empty() {
        println!("❌ Errors (must fix):");
        for issue in &errors {
            print_issue(issue);
        }
        println!();
    }

    if !warnings.is_empty() {
        println!("⚠️  Warnings:");
        for issue in &warnings {
            print_issue(issue);
        }
        println!();
    }

    if !infos.is_empty() {
        println!("💡 Info:");
        for issue in &infos {
            print_issue(issue);
        }
        println!();
    }
}

fn print_issue(issue: &LintIssue) {
    println!("   [{}] {}", issue.kind, issue.location);
    println!("      {}", issue.message);
    if let Some(suggestion) = &issue.suggestion {
        println!("      💡 Suggestion: {suggestion}");
    }
}

/// Exit with a non-zero status when any error-severity issue is present.
pub fn fail_if_errors(issues: &[LintIssue]) {
    let has_errors = issues
        .iter()
        .any(|i| i.severity == LintSeverity::Error);
    if has_errors {
        std::process::exit(1);
    }
}

#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::checker::TypeDescriptor;
use crate::spec::{Operation, PropertyDeclaration};
use crate::value::Value;
use askama::Template;
use std::collections::BTreeMap;

fn collection_declaration(name: &str) -> PropertyDeclaration {
    PropertyDeclaration {
        owner_class: "Foo".to_string(),
        name: name.to_string(),
        element_type: TypeDescriptor::named("DateTimeInterface"),
        collection: true,
        operations: PropertyDeclaration::default_operations(true),
        method_names: BTreeMap::new(),
    }
}

#[test]
fn test_to_camel_case() {
    assert_eq!(to_camel_case("event_dates"), "EventDates");
    assert_eq!(to_camel_case("eventDates"), "EventDates");
    assert_eq!(to_camel_case("single"), "Single");
    assert_eq!(to_camel_case(""), "");
}

#[test]
fn test_to_snake_case() {
    assert_eq!(to_snake_case("eventDates"), "event_dates");
    assert_eq!(to_snake_case("EventDates"), "event_dates");
    assert_eq!(to_snake_case("FooGenerated"), "foo_generated");
    assert_eq!(to_snake_case("title"), "title");
}

#[test]
fn test_singularize() {
    assert_eq!(singularize("eventDates"), "eventDate");
    assert_eq!(singularize("categories"), "category");
    assert_eq!(singularize("statuses"), "status");
    assert_eq!(singularize("boxes"), "box");
    assert_eq!(singularize("address"), "address");
    assert_eq!(singularize("sheep"), "sheep");
}

#[test]
fn test_method_name_convention() {
    let overrides = BTreeMap::new();
    assert_eq!(
        method_name(Operation::Set, "eventDates", &overrides),
        "setEventDates"
    );
    assert_eq!(
        method_name(Operation::Get, "eventDates", &overrides),
        "getEventDates"
    );
    assert_eq!(
        method_name(Operation::Add, "eventDates", &overrides),
        "addEventDate"
    );
    assert_eq!(
        method_name(Operation::Remove, "eventDates", &overrides),
        "removeEventDate"
    );
    assert_eq!(
        method_name(Operation::Contains, "eventDates", &overrides),
        "containsEventDate"
    );
}

#[test]
fn test_method_name_override_wins() {
    let mut overrides = BTreeMap::new();
    overrides.insert(Operation::Add, "addImportantDate".to_string());
    assert_eq!(
        method_name(Operation::Add, "eventDates", &overrides),
        "addImportantDate"
    );
    assert_eq!(
        method_name(Operation::Remove, "eventDates", &overrides),
        "removeEventDate"
    );
}

#[test]
fn test_rust_idents() {
    assert_eq!(rust_method_ident("addEventDate"), "add_event_date");
    assert_eq!(rust_field_ident("eventDates"), "event_dates");
    assert_eq!(rust_field_ident("type"), "r#type");
}

#[test]
fn test_generated_names() {
    assert_eq!(generated_class_name("Foo"), "FooGenerated");
    assert_eq!(generated_module_name("CalendarEntry"), "calendar_entry_generated");
}

#[test]
fn test_descriptor_literal() {
    assert_eq!(
        descriptor_literal(&TypeDescriptor::string()),
        "TypeDescriptor::string()"
    );
    assert_eq!(
        descriptor_literal(&TypeDescriptor::int().nullable()),
        "TypeDescriptor::int().nullable()"
    );
    assert_eq!(
        descriptor_literal(&TypeDescriptor::named("DateTimeInterface")),
        "TypeDescriptor::named(\"DateTimeInterface\")"
    );
    assert_eq!(
        descriptor_literal(&TypeDescriptor::one_of(vec![
            Value::str("draft"),
            Value::Int(2),
            Value::Bool(true),
        ])),
        "TypeDescriptor::one_of(vec![Value::str(\"draft\"), Value::Int(2), Value::Bool(true)])"
    );
}

#[test]
fn test_render_property_canonical_order() {
    let rendered = render_property(&collection_declaration("eventDates"));
    let ops: Vec<&str> = rendered.methods.iter().map(|m| m.op.as_str()).collect();
    assert_eq!(ops, vec!["set", "get", "add", "remove", "contains"]);
    let names: Vec<&str> = rendered.methods.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "set_event_dates",
            "get_event_dates",
            "add_event_date",
            "remove_event_date",
            "contains_event_date"
        ]
    );
}

#[test]
fn test_class_template_flags() {
    let mut scalar = collection_declaration("title");
    scalar.collection = false;
    scalar.element_type = TypeDescriptor::string();
    scalar.operations = [Operation::Get].into_iter().collect();

    let data = ClassTemplateData::new(
        "Foo".to_string(),
        "FooGenerated".to_string(),
        vec![render_property(&scalar)],
    );
    assert!(!data.has_collections);
    assert!(data.has_scalars);
    assert!(!data.has_fallible);
}

#[test]
fn test_class_render_contains_accessors() {
    let data = ClassTemplateData::new(
        "Foo".to_string(),
        "FooGenerated".to_string(),
        vec![render_property(&collection_declaration("eventDates"))],
    );
    let rendered = data.render().unwrap();
    assert!(rendered.contains("pub struct FooGenerated"));
    assert!(rendered.contains("event_dates: CollectionProperty"));
    assert!(rendered.contains("CollectionProperty::new(TypeDescriptor::named(\"DateTimeInterface\"))"));
    assert!(rendered.contains("pub fn set_event_dates(&mut self, value: Value) -> Result<(), TypeCheckError>"));
    assert!(rendered.contains("pub fn get_event_dates(&self) -> Vec<Value>"));
    assert!(rendered.contains("pub fn add_event_date(&mut self, item: Value)"));
    assert!(rendered.contains("pub fn remove_event_date(&mut self, item: &Value) -> Result<bool, TypeCheckError>"));
    assert!(rendered.contains("pub fn contains_event_date(&self, item: &Value) -> Result<bool, TypeCheckError>"));
    assert!(!rendered.contains("ScalarProperty"));
}

#[test]
fn test_class_render_is_deterministic() {
    let render = || {
        ClassTemplateData::new(
            "Foo".to_string(),
            "FooGenerated".to_string(),
            vec![render_property(&collection_declaration("eventDates"))],
        )
        .render()
        .unwrap()
    };
    assert_eq!(render(), render());
}

#[test]
fn test_scalar_only_class_skips_collection_import() {
    let mut scalar = collection_declaration("title");
    scalar.collection = false;
    scalar.element_type = TypeDescriptor::string().nullable();
    scalar.operations = PropertyDeclaration::default_operations(false);

    let data = ClassTemplateData::new(
        "Article".to_string(),
        "ArticleGenerated".to_string(),
        vec![render_property(&scalar)],
    );
    let rendered = data.render().unwrap();
    assert!(rendered.contains("use typefence::typed::ScalarProperty;"));
    assert!(!rendered.contains("CollectionProperty"));
    assert!(rendered.contains("pub fn set_title(&mut self, value: Value)"));
    assert!(rendered.contains("pub fn get_title(&self) -> Value"));
}

#[test]
fn test_class_map_render_sorted() {
    let mut builder = ClassMapBuilder::new();
    for class in ["Zoo", "Bar"] {
        builder
            .insert(ClassMapEntry {
                source_class: class.to_string(),
                generated_class: generated_class_name(class),
                file: format!("{}.rs", generated_module_name(class)),
            })
            .unwrap();
    }
    let rendered = ClassMapTemplateData {
        entries: builder.finalize().entries,
    }
    .render()
    .unwrap();
    let bar = rendered.find("\"Bar\"").unwrap();
    let zoo = rendered.find("\"Zoo\"").unwrap();
    assert!(bar < zoo);
    assert!(rendered.contains("(\"Bar\", \"BarGenerated\", \"bar_generated.rs\")"));
}

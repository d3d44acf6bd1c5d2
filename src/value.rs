//! Runtime value model guarded by generated accessors.
//!
//! Generated classes store and check [`Value`]s rather than static Rust types:
//! the declaration file decides at generation time which shapes a property
//! accepts, and the checker enforces that decision on every mutation at call
//! time. Object identity (`class` plus implemented interfaces) has no JSON
//! representation, so this is a dedicated enum instead of `serde_json::Value`.

use std::collections::BTreeMap;
use std::fmt;

/// A dynamically typed runtime value.
///
/// Equality is structural (`PartialEq` derive), which is the equality used by
/// the generated `remove`/`contains` accessors.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// An ordered sequence; the container shape expected by collection `set`.
    Seq(Vec<Value>),
    Object(ObjectValue),
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn seq(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Seq(items.into_iter().collect())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the value's runtime shape, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Seq(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => write!(f, "{}", obj.class),
        }
    }
}

impl From<ObjectValue> for Value {
    fn from(obj: ObjectValue) -> Self {
        Value::Object(obj)
    }
}

/// An object instance: a class name, the interfaces it satisfies, and its
/// fields in deterministic order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    pub class: String,
    pub implements: Vec<String>,
    pub fields: BTreeMap<String, Value>,
}

impl ObjectValue {
    pub fn new(class: impl Into<String>) -> Self {
        ObjectValue {
            class: class.into(),
            implements: Vec::new(),
            fields: BTreeMap::new(),
        }
    }

    /// Declare an interface this object satisfies.
    pub fn implementing(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// True when `type_name` is this object's class or one of its interfaces.
    pub fn instance_of(&self, type_name: &str) -> bool {
        self.class == type_name || self.implements.iter().any(|i| i == type_name)
    }
}

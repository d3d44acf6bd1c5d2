//! Type descriptors and the runtime type checker.
//!
//! A [`TypeDescriptor`] is the validation rule attached to one declared
//! property: a scalar primitive, an enumerated set of literals, or a named
//! type/interface, optionally nullable. The same descriptor is used twice:
//! at generation time to choose the constructor expression embedded in the
//! artifact, and at call time by the generated accessors to vet every value
//! before any mutation happens.
//!
//! Check precedence:
//!
//! 1. `Null` is valid iff the descriptor is nullable.
//! 2. Scalar kinds match on the value's runtime shape.
//! 3. Enumerated kinds match on structural membership in the literal set.
//! 4. Named kinds match when the value is an object instance of the name.
//! 5. For collection `set`, the container itself must be a sequence; this is
//!    checked before any element is inspected ("array expected").

use crate::value::Value;
use thiserror::Error;

/// A value failed the type check; `expected` names the accepted shape.
///
/// Displays as `"{expected} expected"`, e.g. `DateTimeInterface expected` or
/// `array expected`, and is raised before any state change at the call site.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{expected} expected")]
pub struct TypeCheckError {
    pub expected: String,
}

impl TypeCheckError {
    pub(crate) fn new(expected: impl Into<String>) -> Self {
        TypeCheckError {
            expected: expected.into(),
        }
    }

    /// The container-shape failure for collection operations.
    pub(crate) fn sequence_expected() -> Self {
        TypeCheckError::new("array")
    }
}

/// Scalar primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Bool,
    Int,
    Float,
    Str,
}

impl ScalarType {
    pub fn label(&self) -> &'static str {
        match self {
            ScalarType::Bool => "bool",
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::Str => "string",
        }
    }

    fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (ScalarType::Bool, Value::Bool(_))
                | (ScalarType::Int, Value::Int(_))
                | (ScalarType::Float, Value::Float(_))
                | (ScalarType::Str, Value::Str(_))
        )
    }
}

/// The base validation rule, before nullability.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    Scalar(ScalarType),
    /// Enumerated literal set; membership is structural equality.
    OneOf(Vec<Value>),
    /// A named type or interface the value must be an instance of.
    Named(String),
}

/// One element type's identity and validation rule.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    kind: TypeKind,
    nullable: bool,
}

impl TypeDescriptor {
    pub fn scalar(scalar: ScalarType) -> Self {
        TypeDescriptor {
            kind: TypeKind::Scalar(scalar),
            nullable: false,
        }
    }

    pub fn string() -> Self {
        Self::scalar(ScalarType::Str)
    }

    pub fn int() -> Self {
        Self::scalar(ScalarType::Int)
    }

    pub fn float() -> Self {
        Self::scalar(ScalarType::Float)
    }

    pub fn boolean() -> Self {
        Self::scalar(ScalarType::Bool)
    }

    pub fn one_of(values: Vec<Value>) -> Self {
        TypeDescriptor {
            kind: TypeKind::OneOf(values),
            nullable: false,
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeDescriptor {
            kind: TypeKind::Named(name.into()),
            nullable: false,
        }
    }

    /// Accept `Null` in addition to the base rule.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Human-readable label of the accepted shape, without the trailing
    /// "expected".
    pub fn expected(&self) -> String {
        let base = match &self.kind {
            TypeKind::Scalar(s) => s.label().to_string(),
            TypeKind::OneOf(values) => {
                let literals: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                format!("one of {{{}}}", literals.join(", "))
            }
            TypeKind::Named(name) => name.clone(),
        };
        if self.nullable {
            format!("{base} or null")
        } else {
            base
        }
    }

    fn error(&self) -> TypeCheckError {
        TypeCheckError::new(self.expected())
    }

    /// Check one value against this descriptor (rules 1-4).
    pub fn check(&self, value: &Value) -> Result<(), TypeCheckError> {
        if value.is_null() {
            return if self.nullable {
                Ok(())
            } else {
                Err(self.error())
            };
        }
        let ok = match &self.kind {
            TypeKind::Scalar(scalar) => scalar.matches(value),
            TypeKind::OneOf(values) => values.contains(value),
            TypeKind::Named(name) => match value {
                Value::Object(obj) => obj.instance_of(name),
                _ => false,
            },
        };
        if ok {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// Check a container argument for a collection operation: the value must
    /// be a sequence (rule 5, failing with "array expected" before any
    /// element is inspected), then every element must pass [`check`] in
    /// order.
    ///
    /// [`check`]: TypeDescriptor::check
    pub fn check_sequence(&self, value: &Value) -> Result<(), TypeCheckError> {
        let Value::Seq(items) = value else {
            return Err(TypeCheckError::sequence_expected());
        };
        for item in items {
            self.check(item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::value::ObjectValue;

    #[test]
    fn null_is_valid_only_when_nullable() {
        assert!(TypeDescriptor::string().check(&Value::Null).is_err());
        assert!(TypeDescriptor::string()
            .nullable()
            .check(&Value::Null)
            .is_ok());
    }

    #[test]
    fn expected_label_mentions_null_when_nullable() {
        assert_eq!(TypeDescriptor::named("Foo").expected(), "Foo");
        assert_eq!(
            TypeDescriptor::named("Foo").nullable().expected(),
            "Foo or null"
        );
    }

    #[test]
    fn named_check_accepts_class_and_interface() {
        let descriptor = TypeDescriptor::named("DateTimeInterface");
        let date =
            Value::Object(ObjectValue::new("DateTimeImmutable").implementing("DateTimeInterface"));
        assert!(descriptor.check(&date).is_ok());
        let err = descriptor.check(&Value::Int(1)).unwrap_err();
        assert_eq!(err.to_string(), "DateTimeInterface expected");
    }

    #[test]
    fn sequence_check_rejects_non_container_first() {
        let descriptor = TypeDescriptor::named("DateTimeInterface");
        let err = descriptor.check_sequence(&Value::Int(7)).unwrap_err();
        assert_eq!(err.to_string(), "array expected");
    }
}

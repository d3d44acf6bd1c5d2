//! Typed property containers backing the generated accessors.
//!
//! Every generated class delegates to these containers, so the mutation
//! contract lives in exactly one place: a failed check surfaces to the
//! caller before any state change, and a successful `set` replaces the
//! previous contents wholesale.

use crate::checker::{TypeCheckError, TypeDescriptor};
use crate::value::Value;

/// A homogeneous collection of checked elements.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionProperty {
    descriptor: TypeDescriptor,
    items: Vec<Value>,
}

impl CollectionProperty {
    pub fn new(descriptor: TypeDescriptor) -> Self {
        CollectionProperty {
            descriptor,
            items: Vec::new(),
        }
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Replace the whole collection with `value`.
    ///
    /// The container shape is checked first ("array expected"), then every
    /// element in order; the first failure aborts the call with the prior
    /// contents untouched.
    pub fn set(&mut self, value: Value) -> Result<(), TypeCheckError> {
        self.descriptor.check_sequence(&value)?;
        if let Value::Seq(items) = value {
            self.items = items;
        }
        Ok(())
    }

    /// Snapshot of the current contents; mutating the returned sequence does
    /// not affect the stored collection.
    pub fn get(&self) -> Vec<Value> {
        self.items.clone()
    }

    /// Append one checked element, preserving order and duplicates.
    pub fn add(&mut self, value: Value) -> Result<(), TypeCheckError> {
        self.descriptor.check(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// Remove the first element structurally equal to `value`.
    ///
    /// Returns whether an element was removed; removing an absent element is
    /// a no-op, not an error. A wrong-typed argument fails before lookup.
    pub fn remove(&mut self, value: &Value) -> Result<bool, TypeCheckError> {
        self.descriptor.check(value)?;
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Whether any element is structurally equal to `value`.
    ///
    /// A wrong-typed argument is an error, not `false`.
    pub fn contains(&self, value: &Value) -> Result<bool, TypeCheckError> {
        self.descriptor.check(value)?;
        Ok(self.items.iter().any(|item| item == value))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A single checked value.
///
/// Holds `Null` until the first successful `set`; nullability is enforced
/// from the first mutation on.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarProperty {
    descriptor: TypeDescriptor,
    value: Value,
}

impl ScalarProperty {
    pub fn new(descriptor: TypeDescriptor) -> Self {
        ScalarProperty {
            descriptor,
            value: Value::Null,
        }
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn set(&mut self, value: Value) -> Result<(), TypeCheckError> {
        self.descriptor.check(&value)?;
        self.value = value;
        Ok(())
    }

    pub fn get(&self) -> Value {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn failed_set_leaves_prior_contents() {
        let mut prop = CollectionProperty::new(TypeDescriptor::int());
        prop.set(Value::seq([Value::Int(1), Value::Int(2)]))
            .unwrap();
        let err = prop
            .set(Value::seq([Value::Int(3), Value::str("nope")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "int expected");
        assert_eq!(prop.get(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn scalar_property_round_trip() {
        let mut prop = ScalarProperty::new(TypeDescriptor::string().nullable());
        assert_eq!(prop.get(), Value::Null);
        prop.set(Value::str("hello")).unwrap();
        assert_eq!(prop.get(), Value::str("hello"));
        prop.set(Value::Null).unwrap();
        assert_eq!(prop.get(), Value::Null);
    }
}

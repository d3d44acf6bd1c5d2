use crate::checker::TypeDescriptor;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// One generated accessor operation.
///
/// Variant order is the canonical emission order: methods appear in the
/// artifact as set, get, add, remove, contains regardless of declaration
/// order in the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Set,
    Get,
    Add,
    Remove,
    Contains,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Set,
        Operation::Get,
        Operation::Add,
        Operation::Remove,
        Operation::Contains,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Set => "set",
            Operation::Get => "get",
            Operation::Add => "add",
            Operation::Remove => "remove",
            Operation::Contains => "contains",
        }
    }

    /// Whether this operation only makes sense on a collection property.
    pub fn requires_collection(&self) -> bool {
        matches!(
            self,
            Operation::Add | Operation::Remove | Operation::Contains
        )
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "set" => Ok(Operation::Set),
            "get" => Ok(Operation::Get),
            "add" => Ok(Operation::Add),
            "remove" => Ok(Operation::Remove),
            "contains" => Ok(Operation::Contains),
            other => Err(format!("unknown operation `{other}`")),
        }
    }
}

/// One validated accessor group for one class property.
///
/// Immutable once built; consumed exactly once per generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDeclaration {
    pub owner_class: String,
    /// Property name as declared (conventionally camelCase, e.g.
    /// `eventDates`).
    pub name: String,
    pub element_type: TypeDescriptor,
    pub collection: bool,
    /// Requested operations; iteration follows the canonical order.
    pub operations: BTreeSet<Operation>,
    /// Explicit method names overriding the derived convention, given in the
    /// same camelCase convention as derived names (e.g. `addImportantDate`).
    pub method_names: BTreeMap<Operation, String>,
}

impl PropertyDeclaration {
    /// The default operation set for a property shape: all five for a
    /// collection, set/get for a scalar.
    pub fn default_operations(collection: bool) -> BTreeSet<Operation> {
        if collection {
            Operation::ALL.into_iter().collect()
        } else {
            [Operation::Set, Operation::Get].into_iter().collect()
        }
    }
}

/// All declarations for one owner class, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDeclaration {
    pub name: String,
    pub properties: Vec<PropertyDeclaration>,
}

//! # TypeFence
//!
//! **TypeFence** is a declaration-driven code generator: it reads a list of
//! per-class property declarations (element type, nullability, collection
//! semantics, requested operations) and emits one deterministic Rust source
//! artifact per class implementing a runtime-type-checked accessor API, plus
//! a single class-map artifact for resolving a source class to its generated
//! counterpart.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`spec`]** - Declaration file parsing, validation and defaulting
//! - **[`checker`]** - Type descriptors and the runtime type checker
//! - **[`typed`]** - Property containers enforcing the mutation contract
//! - **[`value`]** - The dynamic value model guarded by generated accessors
//! - **[`generator`]** - Askama-based rendering of class and class-map
//!   artifacts
//! - **[`config`]** - The `typefence.toml` configuration surface
//! - **[`linter`]** - Declaration linting ahead of generation
//! - **[`cli`]** - The `typefence-gen` command-line interface
//!
//! ## Generation Flow
//!
//! ```text
//! declarations.yaml
//!     │  spec::load_declarations
//!     ▼
//! DeclarationFile (raw)
//!     │  spec::build_declarations        ── rejects malformed classes,
//!     ▼                                     duplicates fail the run
//! DeclarationSet
//!     │  generator::generate
//!     ▼
//! one <class>_generated.rs per class + mod.rs + class_map.rs
//! ```
//!
//! Each generated accessor delegates to [`typed::CollectionProperty`] or
//! [`typed::ScalarProperty`], so every mutation entry point runs the checker
//! before any state change: a failed check surfaces to the caller as a
//! [`TypeCheckError`] and leaves the stored value untouched.
//!
//! ## Quick Start
//!
//! ```no_run
//! use typefence::config::GeneratorConfig;
//! use typefence::generator::generate;
//! use typefence::spec::{build_declarations, load_declarations};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GeneratorConfig::default();
//! let file = load_declarations("declarations.yaml".as_ref())?;
//! let set = build_declarations(&file, &config.annotation_operations()?)?;
//! let report = generate(&config, set)?;
//! println!("generated {} classes", report.generated.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Determinism
//!
//! Two runs over byte-identical declarations produce byte-identical
//! artifacts: properties render in declaration order, operations in a fixed
//! canonical order, and the class map is sorted by source class name before
//! emission. Nothing in an artifact depends on time, randomness, or hash
//! iteration order.

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod linter;
pub mod spec;
pub mod typed;
pub mod value;

pub use checker::{ScalarType, TypeCheckError, TypeDescriptor, TypeKind};
pub use error::GeneratorError;
pub use spec::{
    load_declarations, ClassDeclaration, DeclarationSet, Operation, PropertyDeclaration,
};
pub use value::{ObjectValue, Value};

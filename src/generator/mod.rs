//! # Generator Module
//!
//! Turns validated property declarations into source artifacts:
//!
//! ```text
//! Declaration file → Parser → Validation → Template Rendering → Artifacts
//! ```
//!
//! For every owner class the generator emits one Rust file exposing the
//! requested accessors, each delegating to the crate's typed property
//! containers so the runtime checking contract is enforced at every mutation
//! entry point. A run finishes by writing a `mod.rs` for the generated
//! modules and a single class-map artifact listing every
//! `(source class, generated class, file)` triple.
//!
//! Output is deterministic: byte-identical declarations produce
//! byte-identical artifacts. There are no timestamps, no random identifiers,
//! and every unordered collection is sorted before rendering.

mod class_map;
mod generate;
mod methods;
mod naming;
mod templates;
#[cfg(test)]
mod tests;

pub use class_map::*;
pub use generate::*;
pub use methods::*;
pub use naming::*;
pub use templates::*;

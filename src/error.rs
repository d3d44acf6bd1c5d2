//! Generation-time error kinds.
//!
//! Runtime type-check failures are a separate type
//! ([`crate::checker::TypeCheckError`]) because they belong to the generated
//! accessors' contract, not to the generator.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A property declaration violates a data-model invariant. Generation
    /// for the owning class aborts; sibling classes are unaffected.
    #[error("malformed declaration `{class}.{property}`: {reason}")]
    MalformedDeclaration {
        class: String,
        property: String,
        reason: String,
    },

    /// Two declaration groups claim the same owner class. Policy: reject.
    #[error("duplicate class map entry for `{class}`")]
    DuplicateClassMapEntry { class: String },

    /// The target directory or file cannot be created/written. Fatal for
    /// the run; carries the failing path.
    #[error("failed to write generated output at {}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An Askama template failed to render.
    #[error("template rendering failed")]
    Render(#[from] askama::Error),

    /// The configuration surface is inconsistent (e.g. an unknown operation
    /// key in `method_annotations_map`).
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl GeneratorError {
    pub(crate) fn malformed(
        class: impl Into<String>,
        property: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        GeneratorError::MalformedDeclaration {
            class: class.into(),
            property: property.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeneratorError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

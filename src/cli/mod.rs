//! # CLI Module
//!
//! Command-line interface for the TypeFence code generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate typed accessor classes from a declaration file:
//!
//! ```bash
//! typefence-gen generate --spec declarations.yaml --output src/generated
//! ```
//!
//! Options:
//! - `--spec <FILE>` - Path to the declaration file, YAML or JSON (required)
//! - `--output <DIR>` - Output directory, overriding the configured
//!   `generated_files_dir`
//! - `--config <FILE>` - Path to `typefence.toml` (auto-detected alongside
//!   the spec if omitted)
//! - `--dry-run` - Show what would be generated without writing files
//!
//! ### `lint`
//!
//! Check a declaration file without generating:
//!
//! ```bash
//! typefence-gen lint --spec declarations.yaml --fail-on-error
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands};

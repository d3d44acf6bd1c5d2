use crate::config::{load_config, resolve_config_path, GeneratorConfig};
use crate::generator::generate_with_options;
use crate::linter::{fail_if_errors, lint_declarations, print_lint_issues, LintSeverity};
use crate::spec::{build_declarations, load_declarations};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface for TypeFence
///
/// Provides commands for generating typed accessor classes from declaration
/// files and for linting declarations before generation.
#[derive(Parser)]
#[command(name = "typefence-gen")]
#[command(about = "TypeFence CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for TypeFence
#[derive(Subcommand)]
pub enum Commands {
    /// Generate typed accessor classes from a declaration file
    Generate {
        /// Path to the declaration file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Output directory for generated artifacts (overrides the
        /// configured generated_files_dir)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to typefence.toml (auto-detected alongside the spec if
        /// omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Show what would be generated without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Lint a declaration file
    Lint {
        /// Path to the declaration file (YAML or JSON)
        #[arg(short, long)]
        spec: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The declaration file cannot be loaded or parsed
/// - The configuration file exists but fails to parse
/// - The output directory or an artifact cannot be written
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            spec,
            output,
            config,
            dry_run,
        } => {
            let mut config = load_effective_config(config.as_deref(), spec)?;
            if let Some(output) = output {
                config.generated_files_dir = output.clone();
                config.generated_class_map_file = None;
            }

            let file = load_declarations(spec)
                .with_context(|| format!("Failed to load declarations: {}", spec.display()))?;
            let annotation_operations = config.annotation_operations()?;
            let set = build_declarations(&file, &annotation_operations)?;
            let report = generate_with_options(&config, set, *dry_run)?;

            println!(
                "✅ {} class(es) generated, {} skipped → {:?}",
                report.generated.len(),
                report.skipped.len(),
                report.output_dir
            );
            Ok(())
        }
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
        } => {
            let config = load_effective_config(None, spec)?;
            let issues = lint_declarations(spec, &config)?;

            if *errors_only {
                let errors: Vec<_> = issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .cloned()
                    .collect();
                print_lint_issues(&errors);
                if *fail_on_error {
                    fail_if_errors(&errors);
                }
            } else {
                print_lint_issues(&issues);
                if *fail_on_error {
                    fail_if_errors(&issues);
                }
            }

            Ok(())
        }
    }
}

/// Load the effective configuration: explicit path first, then
/// `typefence.toml` beside the spec, then built-in defaults.
fn load_effective_config(
    explicit: Option<&std::path::Path>,
    spec: &std::path::Path,
) -> anyhow::Result<GeneratorConfig> {
    match resolve_config_path(explicit, spec) {
        Some(path) => {
            let config = load_config(&path)?.unwrap_or_default();
            tracing::debug!(config = %path.display(), "using configuration file");
            Ok(config)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

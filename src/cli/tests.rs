//! Unit tests for CLI commands

use crate::cli::{Cli, Commands};
use clap::Parser;

#[test]
fn test_generate_command_parses() {
    let cli = Cli::try_parse_from([
        "typefence-gen",
        "generate",
        "--spec",
        "declarations.yaml",
        "--output",
        "out",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            spec,
            output,
            dry_run,
            ..
        } => {
            assert_eq!(spec.to_string_lossy(), "declarations.yaml");
            assert_eq!(output.unwrap().to_string_lossy(), "out");
            assert!(!dry_run);
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_command_dry_run_flag() {
    let cli = Cli::try_parse_from([
        "typefence-gen",
        "generate",
        "--spec",
        "declarations.yaml",
        "--dry-run",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate { dry_run, .. } => assert!(dry_run),
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "typefence-gen",
        "lint",
        "--spec",
        "declarations.yaml",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            spec,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(spec.to_string_lossy(), "declarations.yaml");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_all_commands_parse() {
    let commands = vec![
        vec![
            "typefence-gen",
            "generate",
            "--spec",
            "declarations.yaml",
            "--output",
            "out",
        ],
        vec!["typefence-gen", "generate", "--spec", "declarations.json"],
        vec!["typefence-gen", "lint", "--spec", "declarations.yaml"],
    ];

    for args in commands {
        let cli = Cli::try_parse_from(&args);
        assert!(cli.is_ok(), "Failed to parse command: {args:?}");
    }
}

//! Tests for argument parsing and command dispatch

use std::path::PathBuf;

use clap::Parser;

use cartree::cli::args::ConfigCommands;
use cartree::cli::{execute_command, Cli, CliError, Commands};
use cartree::config::OutputFormat;
use cartree::domain::{BuildStrategy, RenderStyle, TraversalOrder};
use cartree::exitcode;

#[test]
fn given_build_with_values_when_parsing_then_accepts_negative_numbers() {
    let cli = Cli::try_parse_from(["cartree", "build", "3", "-2", "1", "6"]).unwrap();

    match cli.command {
        Some(Commands::Build { input, format, style }) => {
            assert_eq!(input.values, vec![3, -2, 1, 6]);
            assert!(input.file.is_none());
            assert!(format.is_none());
            assert!(style.is_none());
        }
        other => panic!("expected build, got {:?}", other),
    }
}

#[test]
fn given_comma_separated_values_when_parsing_then_splits_them() {
    let cli = Cli::try_parse_from(["cartree", "traverse", "3,2,1,6,0,5"]).unwrap();

    match cli.command {
        Some(Commands::Traverse { input, order }) => {
            assert_eq!(input.values, vec![3, 2, 1, 6, 0, 5]);
            assert_eq!(order, TraversalOrder::In);
        }
        other => panic!("expected traverse, got {:?}", other),
    }
}

#[test]
fn given_options_when_parsing_then_maps_value_enums() {
    let cli = Cli::try_parse_from([
        "cartree",
        "-dd",
        "--config",
        "/tmp/c.toml",
        "build",
        "--strategy",
        "monotonic-stack",
        "--format",
        "json",
        "--style",
        "outline",
        "1",
    ])
    .unwrap();

    assert_eq!(cli.debug, 2);
    assert_eq!(cli.config_file, Some(PathBuf::from("/tmp/c.toml")));
    match cli.command {
        Some(Commands::Build { input, format, style }) => {
            assert_eq!(input.strategy, Some(BuildStrategy::MonotonicStack));
            assert_eq!(format, Some(OutputFormat::Json));
            assert_eq!(style, Some(RenderStyle::Outline));
        }
        other => panic!("expected build, got {:?}", other),
    }
}

#[test]
fn given_level_order_when_parsing_traverse_then_selects_it() {
    let cli = Cli::try_parse_from(["cartree", "traverse", "--order", "level", "1", "2"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Traverse {
            order: TraversalOrder::Level,
            ..
        })
    ));
}

#[test]
fn given_values_and_file_when_parsing_then_rejects_conflict() {
    let result = Cli::try_parse_from(["cartree", "render", "1", "2", "--file", "seq.txt"]);
    assert!(result.is_err());
}

#[test]
fn given_non_integer_value_when_parsing_then_rejects_it() {
    let result = Cli::try_parse_from(["cartree", "build", "1", "two"]);
    assert!(result.is_err());
}

#[test]
fn given_config_init_when_parsing_then_reads_force_flag() {
    let cli = Cli::try_parse_from(["cartree", "config", "init", "--force"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Config {
            command: ConfigCommands::Init { force: true }
        })
    ));
}

#[test]
fn given_no_command_when_executing_then_usage_error() {
    let cli = Cli::try_parse_from(["cartree"]).unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert!(matches!(err, CliError::Usage(_)));
    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_missing_config_file_when_executing_then_config_exit_code() {
    let cli = Cli::try_parse_from([
        "cartree",
        "--config",
        "/nonexistent/cartree.toml",
        "traverse",
        "1",
    ])
    .unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::CONFIG);
}

#[test]
fn given_missing_sequence_file_when_executing_then_noinput_exit_code() {
    let cli = Cli::try_parse_from(["cartree", "build", "--file", "/nonexistent/seq.txt"]).unwrap();

    let err = execute_command(&cli).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_values_when_executing_traverse_then_succeeds() {
    let cli = Cli::try_parse_from(["cartree", "traverse", "--order", "pre", "3", "2", "1"]).unwrap();
    assert!(execute_command(&cli).is_ok());
}

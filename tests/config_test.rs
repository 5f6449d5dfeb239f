//! Integration tests for Settings loading with layered overrides.
//!
//! These tests use temp files for the global and explicit config layers, so
//! a config in the user's XDG directory never leaks in. No environment
//! variables are set here (see config_env_test.rs).

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use cartree::application::ApplicationError;
use cartree::config::{OutputFormat, Settings, DEFAULT_MAX_INPUT_LEN};
use cartree::domain::{BuildStrategy, RenderStyle};

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    write_named(dir, "cartree.toml", content)
}

fn write_named(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_explicit_config_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[build]
strategy = "monotonic-stack"

[limits]
max_input_len = 50
allow_empty = true

[output]
format = "json"
style = "outline"
"#,
    );

    // Act
    let settings = Settings::load_layers(None, Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.build.strategy, BuildStrategy::MonotonicStack);
    assert_eq!(settings.limits.max_input_len, 50);
    assert!(settings.limits.allow_empty);
    assert_eq!(settings.output.format, OutputFormat::Json);
    assert_eq!(settings.output.style, RenderStyle::Outline);
}

#[test]
fn given_partial_config_when_load_then_unspecified_keys_keep_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[output]\nstyle = \"outline\"\n");

    let settings = Settings::load_layers(None, Some(&path)).expect("load settings");

    assert_eq!(settings.output.style, RenderStyle::Outline);
    assert_eq!(settings.output.format, OutputFormat::Text);
    assert_eq!(settings.limits.max_input_len, DEFAULT_MAX_INPUT_LEN);
    assert_eq!(settings.build.strategy, BuildStrategy::Recursive);
}

#[test]
fn given_missing_config_file_when_load_then_config_error() {
    let result = Settings::load_layers(None, Some(Path::new("/nonexistent/cartree.toml")));

    match result {
        Err(ApplicationError::Config { message }) => {
            assert!(message.contains("/nonexistent/cartree.toml"), "{}", message)
        }
        other => panic!("expected config error, got {:?}", other),
    }
}

#[test]
fn given_unknown_strategy_when_load_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[build]\nstrategy = \"quantum\"\n");

    let result = Settings::load_layers(None, Some(&path));

    assert!(matches!(result, Err(ApplicationError::Config { .. })));
}

#[test]
fn given_malformed_toml_when_load_then_config_error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[limits\nmax_input_len = ");

    let err = Settings::load_layers(None, Some(&path)).unwrap_err();

    assert!(err.to_string().contains("cartree.toml"));
}

#[test]
fn given_template_when_written_and_loaded_then_equals_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, &Settings::template());

    let settings = Settings::load_layers(None, Some(&path)).expect("load template");

    assert_eq!(settings, Settings::default());
}

#[test]
fn given_global_and_explicit_config_when_load_then_explicit_wins_per_key() {
    let dir = TempDir::new().unwrap();
    let global = write_named(
        &dir,
        "global.toml",
        "[limits]\nmax_input_len = 20\nallow_empty = true\n",
    );
    let explicit = write_named(&dir, "explicit.toml", "[limits]\nmax_input_len = 30\n");

    let settings = Settings::load_layers(Some(&global), Some(&explicit)).expect("load settings");

    assert_eq!(settings.limits.max_input_len, 30);
    assert!(settings.limits.allow_empty);
    assert_eq!(settings.output.format, OutputFormat::Text);
}

#[test]
fn given_missing_global_file_when_load_then_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let absent = dir.path().join("absent.toml");

    let settings = Settings::load_layers(Some(&absent), None).expect("load settings");

    assert_eq!(settings, Settings::default());
}

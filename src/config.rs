//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cartree/cartree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `CARTREE_*` prefix, `__` between section and key

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::{BuildStrategy, RenderStyle};

/// Default upper bound on sequence length.
///
/// A sorted input builds a chain this deep, and building, traversing,
/// rendering and dropping all recurse once per level. The bound keeps that
/// within a 2 MiB thread stack in unoptimised builds.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1_000;

/// Report serialisation format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Tree construction settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    pub strategy: BuildStrategy,
}

/// Input policy applied before a tree is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Longest accepted sequence
    pub max_input_len: usize,
    /// Treat an empty sequence as "no tree" instead of rejecting it
    pub allow_empty: bool,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            allow_empty: false,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub style: RenderStyle,
}

/// Raw settings for intermediate parsing (every field optional to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub build: RawBuildConfig,
    pub limits: RawLimitsConfig,
    pub output: RawOutputConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawBuildConfig {
    pub strategy: Option<BuildStrategy>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawLimitsConfig {
    pub max_input_len: Option<usize>,
    pub allow_empty: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawOutputConfig {
    pub format: Option<OutputFormat>,
    pub style: Option<RenderStyle>,
}

/// Unified configuration for cartree.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub build: BuildConfig,
    pub limits: LimitsConfig,
    pub output: OutputConfig,
}

/// Get the XDG config directory for cartree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cartree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cartree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins for every field it specifies, base is kept otherwise.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            build: BuildConfig {
                strategy: overlay.build.strategy.unwrap_or(self.build.strategy),
            },
            limits: LimitsConfig {
                max_input_len: overlay
                    .limits
                    .max_input_len
                    .unwrap_or(self.limits.max_input_len),
                allow_empty: overlay.limits.allow_empty.unwrap_or(self.limits.allow_empty),
            },
            output: OutputConfig {
                format: overlay.output.format.unwrap_or(self.output.format),
                style: overlay.output.style.unwrap_or(self.output.style),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_layers(global_config_path().as_deref(), config_file)
    }

    /// Same as [`Settings::load`] with an explicit global file.
    ///
    /// `global_file` is skipped when `None` or absent on disk.
    pub fn load_layers(
        global_file: Option<&Path>,
        config_file: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_file {
            if global_path.exists() {
                let raw = load_raw_settings(global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = config_file {
            let path = expand_path(path);
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            let raw = load_raw_settings(&path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply CARTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("CARTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(&config, "build.strategy")? {
            settings.build.strategy = val;
        }
        if let Some(val) = env_value(&config, "limits.max_input_len")? {
            settings.limits.max_input_len = val;
        }
        if let Some(val) = env_value(&config, "limits.allow_empty")? {
            settings.limits.allow_empty = val;
        }
        if let Some(val) = env_value(&config, "output.format")? {
            settings.output.format = val;
        }
        if let Some(val) = env_value(&config, "output.style")? {
            settings.output.style = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        format!(
            r#"# cartree configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/cartree/cartree.toml
#   Explicit: --config <path>
#   Env:      CARTREE_<SECTION>__<KEY>, e.g. CARTREE_LIMITS__MAX_INPUT_LEN=500

[build]
# "recursive" or "monotonic-stack"; both build the same tree
# strategy = "recursive"

[limits]
# Longest accepted sequence
# max_input_len = {DEFAULT_MAX_INPUT_LEN}

# Accept an empty sequence and report an empty tree
# allow_empty = false

[output]
# "text" or "json"
# format = "text"

# "rotated" or "outline"
# style = "rotated"
"#
        )
    }
}

/// Missing keys are `None`; present but malformed keys are errors.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_defaults_when_created_then_uses_recursive_rotated_text() {
        let settings = Settings::default();
        assert_eq!(settings.build.strategy, BuildStrategy::Recursive);
        assert_eq!(settings.limits.max_input_len, DEFAULT_MAX_INPUT_LEN);
        assert!(!settings.limits.allow_empty);
        assert_eq!(settings.output.format, OutputFormat::Text);
        assert_eq!(settings.output.style, RenderStyle::Rotated);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let raw: RawSettings = toml::from_str(
            r#"
[limits]
allow_empty = true
"#,
        )
        .unwrap();

        let merged = Settings::default().merge_with(&raw);

        assert!(merged.limits.allow_empty);
        assert_eq!(merged.limits.max_input_len, DEFAULT_MAX_INPUT_LEN);
        assert_eq!(merged.build.strategy, BuildStrategy::Recursive);
    }

    #[test]
    fn given_template_when_parsing_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.build.strategy.is_none());
        assert!(raw.limits.max_input_len.is_none());
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_toml() {
        let mut settings = Settings::default();
        settings.build.strategy = BuildStrategy::MonotonicStack;
        settings.output.format = OutputFormat::Json;

        let text = settings.to_toml().unwrap();
        assert!(text.contains("monotonic-stack"));
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}

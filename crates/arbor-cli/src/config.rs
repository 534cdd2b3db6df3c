//! Configuration file loading for the CLI.
//!
//! This module handles finding and loading TOML configuration files from
//! various locations (explicit path, local directory, system directory),
//! and defines the configuration sections themselves.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

/// Configuration-related errors for the CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("failed to read configuration file: {0}")]
    Read(std::io::Error),
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Options controlling the emitted layout document.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Pretty-print the JSON output.
    #[serde(default)]
    pretty: bool,

    /// Uniform scale factor applied to unit-cell coordinates.
    #[serde(default = "default_scale")]
    scale: f32,

    /// Number of sample points per emitted link path.
    #[serde(default = "default_link_samples")]
    link_samples: usize,
}

fn default_scale() -> f32 {
    1.0
}

fn default_link_samples() -> usize {
    16
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            scale: default_scale(),
            link_samples: default_link_samples(),
        }
    }
}

impl OutputConfig {
    /// Whether to pretty-print the JSON output.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Returns the uniform scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Returns the number of sample points per link path.
    pub fn link_samples(&self) -> usize {
        self.link_samples
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (arbor/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, ConfigError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("arbor/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "arborworks", "arbor") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(ConfigError::Read)?;
    toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.output().pretty());
        assert_eq!(config.output().scale(), 1.0);
        assert_eq!(config.output().link_samples(), 16);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [output]
            scale = 40.0
            "#,
        )
        .unwrap();

        assert_eq!(config.output().scale(), 40.0);
        assert!(!config.output().pretty());
        assert_eq!(config.output().link_samples(), 16);
    }

    #[test]
    fn test_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [output]
            pretty = true
            scale = 2.5
            link_samples = 8
            "#,
        )
        .unwrap();

        assert!(config.output().pretty());
        assert_eq!(config.output().scale(), 2.5);
        assert_eq!(config.output().link_samples(), 8);
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        let result = load_config(Some("/definitely/not/a/real/path.toml"));
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }
}

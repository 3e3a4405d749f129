//! Configuration loading from benchview.toml
//!
//! Benchview configuration can be specified in a `benchview.toml` file in the project root.
//! The configuration is automatically discovered by walking up from the current directory.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up during discovery
pub const CONFIG_FILE_NAME: &str = "benchview.toml";

/// Benchview configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BenchviewConfig {
    /// Source control settings
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
    /// Rendering configuration
    #[serde(default)]
    pub render: RenderConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Source control settings used for commit and pull request links
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Base URL of the repository under benchmark
    #[serde(default = "default_repository_url")]
    pub url: String,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            url: default_repository_url(),
        }
    }
}

fn default_repository_url() -> String {
    "https://github.com/vitessio/vitess".to_string()
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format: "human", "json", "markdown", "csv"
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

fn default_format() -> String {
    "human".to_string()
}

/// Rendering configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Threads used to render macro cards (0 = all cores)
    #[serde(default)]
    pub threads: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber` env-filter directive
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "benchview=info".to_string()
}

impl BenchviewConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Discover and load configuration by walking up from the current directory
    ///
    /// Returns `Ok(None)` when no config file exists. A config file that is
    /// found but fails to load is an error.
    pub fn discover() -> anyhow::Result<Option<Self>> {
        let dir = std::env::current_dir()?;
        Self::discover_from(&dir)
    }

    /// Discover and load configuration by walking up from `start`
    pub fn discover_from(start: &Path) -> anyhow::Result<Option<Self>> {
        let mut dir = start.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                let config = Self::load(&config_path).with_context(|| {
                    format!("failed to load config {}", config_path.display())
                })?;
                return Ok(Some(config));
            }
            if !dir.pop() {
                return Ok(None);
            }
        }
    }

    /// Generate a default configuration as TOML string
    pub fn default_toml() -> String {
        r#"# Benchview Configuration

[repository]
# Repository that commit and pull request links point into
url = "https://github.com/vitessio/vitess"

[output]
# Default output format: human, json, markdown, csv
format = "human"

[render]
# Threads used to render macro cards (0 = all cores)
threads = 0

[logging]
# tracing env-filter directive (--verbose switches to benchview=debug)
filter = "benchview=info"
"#
        .to_string()
    }
}

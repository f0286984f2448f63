use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the festivals CLI.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (FEST_* prefix)
/// 3. Config file (~/.config/festivals/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the festival records file.
    ///
    /// Can be set via:
    /// - CLI: --file /path/to/festivals.txt
    /// - ENV: FEST_DATA_PATH
    /// - Config: data_path = "/path/to/festivals.txt"
    /// - Default: ~/.local/share/festivals/festivals.txt
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,

    /// Abort on the first malformed record instead of skipping it.
    ///
    /// Can be set via:
    /// - CLI: --strict
    /// - ENV: FEST_STRICT
    /// - Config: strict = true
    #[serde(default)]
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
            strict: false,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("fest");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder.build().context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, data_path: Option<PathBuf>, strict: bool) -> Self {
        if let Some(path) = data_path {
            self.data_path = path;
        }
        self.strict |= strict;
        self
    }
}

/// Returns: ~/.local/share/festivals/festivals.txt (or platform equivalent)
fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("festivals")
        .join("festivals.txt")
}

/// Returns:
/// - Linux: ~/.config/festivals/config.toml
/// - macOS: ~/Library/Application Support/festivals/config.toml
/// - Windows: %APPDATA%\festivals\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("festivals")
        .join("config.toml")
}

pub fn example_config() -> &'static str {
    r#"# Festivals Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (FEST_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Festival records file, one festival per line:
#   name : venue : dd-mm-yyyy : duration : style1 : style2 : ...
#
# Can also be set via:
# - CLI: festivals --file /custom/festivals.txt show
# - Environment: FEST_DATA_PATH=/custom/festivals.txt
#
# Default: Platform-specific data directory
#data_path = "/path/to/festivals.txt"

# Stop at the first malformed record instead of skipping it
#
# Can also be set via:
# - CLI: festivals --strict show
# - Environment: FEST_STRICT=true
strict = false
"#
}

/// Create the config file with the example contents if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

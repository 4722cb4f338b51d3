//! Configuration types for itca.
//!
//! [`Config::load`] reads `~/.config/itca/config.toml` (or
//! `$XDG_CONFIG_HOME/itca/config.toml`) layered on top of the built-in
//! defaults. The file is optional. [`Config::defaults`] returns the same
//! defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[session]
output_dir      = "."
filename_prefix = "IT-career-advice"

[console]
echo_log = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

/// `[session]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory session logs are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Leading part of every session log filename.
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

fn default_output_dir() -> PathBuf { PathBuf::from(".") }
fn default_filename_prefix() -> String { "IT-career-advice".to_string() }

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            filename_prefix: default_filename_prefix(),
        }
    }
}

/// `[console]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsoleConfig {
    /// Print the JSON log to the console before saving it.
    #[serde(default = "default_echo_log")]
    pub echo_log: bool,
}

fn default_echo_log() -> bool { true }

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            echo_log: default_echo_log(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from the user config file, layered on top of the built-in defaults.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load from `path`, layered on top of the built-in defaults. A missing
    /// file yields the defaults.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        tracing::debug!(path = %path.display(), "loading config");
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Location of the user config file.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("itca")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

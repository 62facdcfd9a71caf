//! Configuration loading and target sample rate resolution
//!
//! The pipeline recognizes exactly one option, the target sample rate. It is
//! resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Sample rate expected by the speech recognition engine (16 kHz)
pub const DEFAULT_TARGET_SAMPLE_RATE: u32 = 16000;

/// Environment variable consulted for the target sample rate
pub const TARGET_SAMPLE_RATE_ENV: &str = "WSP_TARGET_SAMPLE_RATE";

/// Values used when nothing else is configured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDefaults {
    pub target_sample_rate: u32,
    pub log_level: String,
}

impl Default for CompiledDefaults {
    fn default() -> Self {
        Self {
            target_sample_rate: DEFAULT_TARGET_SAMPLE_RATE,
            log_level: "info".to_string(),
        }
    }
}

/// Logging section of the TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive (e.g. "info", "wsp_ingest=debug")
    pub level: Option<String>,
}

/// On-disk configuration
///
/// ```toml
/// target_sample_rate = 16000
///
/// [logging]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TomlConfig {
    pub target_sample_rate: Option<u32>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TomlConfig {
    /// Log level from the file, falling back to the compiled default
    pub fn log_level(&self) -> String {
        self.logging
            .level
            .clone()
            .unwrap_or_else(|| CompiledDefaults::default().log_level)
    }
}

/// Platform config file location: `<config dir>/wsp/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wsp").join("config.toml"))
}

/// Parse a TOML config file.
///
/// # Errors
/// - File cannot be read
/// - File is not valid TOML or has mistyped fields
pub fn load_toml_config(path: &Path) -> Result<TomlConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let config: TomlConfig = toml::from_str(&content).map_err(|e| {
        Error::Config(format!("Failed to parse config file {}: {}", path.display(), e))
    })?;

    debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}

/// Where the config file was looked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigLocation {
    /// File exists at this path
    Found(PathBuf),
    /// Nothing at this path
    Missing(PathBuf),
    /// No path given and the platform config directory is unknown
    Unknown,
}

impl ConfigLocation {
    /// Explicit `path`, or the platform default
    pub fn locate(path: Option<&Path>) -> Self {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match default_config_path() {
                Some(p) => p,
                None => return ConfigLocation::Unknown,
            },
        };

        if path.exists() {
            ConfigLocation::Found(path)
        } else {
            ConfigLocation::Missing(path)
        }
    }

    /// Parse the file when found, defaults otherwise.
    ///
    /// # Errors
    /// A found file that cannot be read or parsed.
    pub fn load(&self) -> Result<TomlConfig> {
        match self {
            ConfigLocation::Found(path) => load_toml_config(path),
            _ => Ok(TomlConfig::default()),
        }
    }

    /// Log why defaults are in use; silent when the file was found
    pub fn warn_if_defaulted(&self) {
        match self {
            ConfigLocation::Found(_) => {}
            ConfigLocation::Missing(path) => {
                warn!("Config file not found at {}, using defaults", path.display())
            }
            ConfigLocation::Unknown => {
                warn!("Could not determine config directory, using defaults")
            }
        }
    }
}

/// Load the config file if it exists.
///
/// A missing file is not an error: a warning is logged and defaults are used.
/// A file that exists but cannot be read or parsed is still an error.
pub fn load_toml_config_or_default(path: Option<&Path>) -> Result<TomlConfig> {
    let location = ConfigLocation::locate(path);
    location.warn_if_defaulted();
    location.load()
}

/// Resolves the target sample rate from every configuration source
#[derive(Debug, Clone)]
pub struct SampleRateResolver {
    env_var_name: String,
    defaults: CompiledDefaults,
}

impl Default for SampleRateResolver {
    fn default() -> Self {
        Self::new(TARGET_SAMPLE_RATE_ENV)
    }
}

impl SampleRateResolver {
    pub fn new(env_var_name: &str) -> Self {
        Self {
            env_var_name: env_var_name.to_string(),
            defaults: CompiledDefaults::default(),
        }
    }

    /// Resolve the target rate.
    ///
    /// # Errors
    /// `Error::Config` when the environment variable is not an integer, or
    /// when the winning source yields zero.
    pub fn resolve(&self, cli_arg: Option<u32>, toml: Option<&TomlConfig>) -> Result<u32> {
        let (rate, source) = if let Some(rate) = cli_arg {
            (rate, "command line")
        } else if let Ok(value) = std::env::var(&self.env_var_name) {
            let rate = value.trim().parse::<u32>().map_err(|_| {
                Error::Config(format!(
                    "{} must be a positive integer, got {:?}",
                    self.env_var_name, value
                ))
            })?;
            (rate, "environment")
        } else if let Some(rate) = toml.and_then(|t| t.target_sample_rate) {
            (rate, "config file")
        } else {
            (self.defaults.target_sample_rate, "compiled default")
        };

        if rate == 0 {
            return Err(Error::Config(format!(
                "target sample rate from {} must be positive, got 0",
                source
            )));
        }

        debug!("Target sample rate {}Hz (from {})", rate, source);
        Ok(rate)
    }
}

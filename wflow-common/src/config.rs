//! Bootstrap configuration loading
//!
//! Settings sources, highest priority first:
//! 1. Command-line arguments
//! 2. Environment variables (resolved by the binary's argument parser)
//! 3. TOML configuration file
//! 4. Compiled defaults
//!
//! A missing configuration file is not fatal: a warning is logged and the
//! compiled defaults apply. A file named explicitly must exist and parse.

use crate::{Error, Result};
use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default listen host
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Bootstrap configuration loaded from TOML file
///
/// These settings cannot change during runtime. The service must restart
/// to pick up changes to the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TomlConfig {
    /// Interface to bind the HTTP server to
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file path (optional, logs to stderr if not specified)
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for TomlConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Values supplied on the command line or through environment variables
///
/// Any field left as `None` keeps the value from the TOML file (or the
/// compiled default).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
}

impl TomlConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Read and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply command-line/environment overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.log_file.is_some() {
            self.logging.file = overrides.log_file;
        }
        self
    }

    /// Socket address the HTTP server should listen on
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| Error::Config(format!("Invalid host address: {}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Configuration together with the file it was read from
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: TomlConfig,
    /// `None` when compiled defaults were used
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Log where the configuration came from
    pub fn log_source(&self) {
        match &self.source {
            Some(path) => info!("Configuration loaded from {}", path.display()),
            None => warn!("No configuration file found, using compiled defaults"),
        }
    }
}

/// Locates and loads the bootstrap configuration file for an application
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    app_dir: String,
}

impl ConfigLoader {
    /// Create a loader looking under `<config dir>/<app_dir>/config.toml`
    pub fn new(app_dir: impl Into<String>) -> Self {
        Self {
            app_dir: app_dir.into(),
        }
    }

    /// Load configuration
    ///
    /// With `explicit` set, that file must exist and parse. Otherwise the
    /// platform locations are searched and compiled defaults are used when
    /// nothing is found. Call [`LoadedConfig::log_source`] once tracing is up.
    pub fn load(&self, explicit: Option<&Path>) -> Result<LoadedConfig> {
        let source = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => self.locate(),
        };

        let config = match &source {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        Ok(LoadedConfig { config, source })
    }

    /// Find the first existing configuration file for the current platform
    pub fn locate(&self) -> Option<PathBuf> {
        self.candidate_paths().into_iter().find(|p| p.is_file())
    }

    /// Candidate configuration file paths in search order
    pub fn candidate_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join(&self.app_dir).join("config.toml"));
        }

        if cfg!(target_os = "linux") {
            paths.push(PathBuf::from("/etc").join(&self.app_dir).join("config.toml"));
        }

        paths
    }
}

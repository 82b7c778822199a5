//! Configuration persistence
//!
//! Loads the runtime configuration from disk. A TOML profile is preferred;
//! a postcard binary profile is accepted when the TOML one is missing or
//! unreadable.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use thiserror::Error;

use helm_core::config::ValidationError;

use super::{HelmConfig, CONFIG_VERSION};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No file at the given path
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// File exists but could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),
    /// TOML text did not parse
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
    /// Binary profile did not decode
    #[error("binary configuration error: {0}")]
    Deserialize(#[from] postcard::Error),
    /// Binary profile written by another format version
    #[error("config version mismatch: found {found}, expected {}", CONFIG_VERSION)]
    VersionMismatch { found: u8 },
    /// Values out of range
    #[error("invalid configuration: {0:?}")]
    Invalid(ValidationError),
}

impl From<ValidationError> for ConfigError {
    fn from(e: ValidationError) -> Self {
        ConfigError::Invalid(e)
    }
}

/// Loads configuration from a TOML profile with a binary fallback
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    toml_path: PathBuf,
    binary_path: PathBuf,
}

impl ConfigLoader {
    pub fn new(toml_path: impl Into<PathBuf>, binary_path: impl Into<PathBuf>) -> Self {
        Self {
            toml_path: toml_path.into(),
            binary_path: binary_path.into(),
        }
    }

    /// Load configuration
    ///
    /// Tries the TOML profile first and falls back to the binary profile.
    pub fn load(&self) -> Result<HelmConfig, ConfigError> {
        info!("Loading configuration...");

        match self.load_toml() {
            Ok(config) => {
                info!("Loaded configuration from TOML");
                return Ok(config);
            }
            Err(ConfigError::NotFound(path)) => {
                debug!("No TOML config at {}, trying binary format", path.display());
            }
            Err(e) => {
                warn!("Failed to load TOML config: {}, trying binary", e);
            }
        }

        let config = self.load_binary()?;
        info!("Loaded configuration from binary profile");
        Ok(config)
    }

    fn load_toml(&self) -> Result<HelmConfig, ConfigError> {
        let text = read_file(&self.toml_path)?;
        debug!("Read {} bytes of TOML from {}", text.len(), self.toml_path.display());

        let text = String::from_utf8(text)
            .map_err(|e| ConfigError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        parse_toml(&text)
    }

    fn load_binary(&self) -> Result<HelmConfig, ConfigError> {
        let bytes = read_file(&self.binary_path)?;
        debug!(
            "Read {} bytes of binary config from {}",
            bytes.len(),
            self.binary_path.display()
        );
        parse_binary(&bytes)
    }
}

/// Parse and validate a TOML profile
pub fn parse_toml(text: &str) -> Result<HelmConfig, ConfigError> {
    let config: HelmConfig = toml::from_str(text)?;
    config.validate()?;
    log_config_summary(&config);
    Ok(config)
}

/// Decode and validate a binary profile
pub fn parse_binary(bytes: &[u8]) -> Result<HelmConfig, ConfigError> {
    let config: HelmConfig = postcard::from_bytes(bytes)?;

    if config.version != CONFIG_VERSION {
        warn!(
            "Config version mismatch: found {}, expected {}",
            config.version, CONFIG_VERSION
        );
        return Err(ConfigError::VersionMismatch {
            found: config.version,
        });
    }

    config.validate()?;
    log_config_summary(&config);
    Ok(config)
}

/// Encode a configuration as a binary profile
pub fn to_binary(config: &HelmConfig) -> Result<Vec<u8>, ConfigError> {
    Ok(postcard::to_allocvec(config)?)
}

fn read_file(path: &Path) -> Result<Vec<u8>, ConfigError> {
    fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &HelmConfig) {
    info!("Configuration loaded for vehicle '{}'", config.vehicle.name);
    debug!("  cycle period {} ms", config.control.cycle_period_ms);
    debug!("  fault clear after {} cycles", config.control.fault_clear_cycles);
    debug!("  soft disable timeout {} ms", config.control.soft_disable_timeout_ms);
    debug!("  checksum {:?}", config.vehicle.checksum);
    debug!(
        "  buses mdps={} scc={} lkas={}",
        config.vehicle.buses.mdps, config.vehicle.buses.scc, config.vehicle.buses.lkas
    );
    debug!(
        "  long control {}, lfa/hda {}",
        config.vehicle.long_control, config.vehicle.has_lfa_hda
    );
}

use serde::{Deserialize, Serialize};

use super::capture::{CaptureConfig, MIN_SNAPLEN};
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::registry::RegistryConfig;
use super::server::ServerConfig;

const LOCAL_CONFIG_PATH: &str = "leasedns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/leasedns/config.toml";

/// Main configuration structure for leasedns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Packet capture (interface, filter, queue sizing)
    #[serde(default)]
    pub capture: CaptureConfig,

    /// DNS listener (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// DNS answering policy
    #[serde(default)]
    pub dns: DnsConfig,

    /// Lease registry seeding
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. leasedns.toml in current directory
    /// 3. /etc/leasedns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(interface) = overrides.interface {
            self.capture.interface = interface;
        }
        if let Some(port) = overrides.dns_port {
            self.server.dns_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.no_self_register {
            self.registry.self_register = false;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capture.interface.trim().is_empty() {
            return Err(ConfigError::Validation(
                "No capture interface configured".to_string(),
            ));
        }

        if self.capture.snaplen < MIN_SNAPLEN {
            return Err(ConfigError::Validation(format!(
                "Snap length {} is too small to hold a DHCP message (minimum {})",
                self.capture.snaplen, MIN_SNAPLEN
            )));
        }

        if self.capture.queue_capacity == 0 {
            return Err(ConfigError::Validation(
                "Queue capacity cannot be 0".to_string(),
            ));
        }

        if self.server.dns_port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub interface: Option<String>,
    pub dns_port: Option<u16>,
    pub bind_address: Option<String>,
    pub log_level: Option<String>,
    pub no_self_register: bool,
}

use super::{ConfigError, LoggingConfig, Ns1Config, ServerConfig};
use crate::granularity::Granularity;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main exporter configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub ns1: Ns1Config,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Values supplied on the command line or through the environment.
/// Each `Some` replaces the corresponding file value.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub api_key: Option<String>,
    pub zones: Option<Vec<String>>,
    pub granularity: Option<Granularity>,
    pub timeout_ms: Option<u64>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

impl Config {
    /// Load configuration from an optional TOML file, then apply overrides.
    pub fn load(path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
                        path: path.to_string(),
                        source,
                    })?;
                Self::from_toml_str(&contents)?
            }
            None => Self::default(),
        };

        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(api_key) = overrides.api_key {
            self.ns1.api_key = api_key;
        }
        // An empty MONITOR_ZONES means "discover every zone".
        if let Some(zones) = overrides.zones {
            let zones = normalize_zones(zones);
            self.ns1.zones = (!zones.is_empty()).then_some(zones);
        }
        if let Some(granularity) = overrides.granularity {
            self.ns1.granularity = granularity;
        }
        if let Some(timeout_ms) = overrides.timeout_ms {
            self.ns1.timeout_ms = timeout_ms;
        }
        if let Some(bind_address) = overrides.bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }

        if let Some(zones) = self.ns1.zones.take() {
            self.ns1.zones = Some(normalize_zones(zones));
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ns1.api_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ns1.api_key is required (or set NS1_API_KEY)".to_string(),
            ));
        }

        if self.ns1.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "ns1.timeout_ms must be greater than zero".to_string(),
            ));
        }

        if let Some(zones) = &self.ns1.zones {
            if zones.is_empty() {
                return Err(ConfigError::Validation(
                    "ns1.zones is set but contains no zone names".to_string(),
                ));
            }
        }

        self.listen_addr()?;
        Ok(())
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.server.bind_address, self.server.port)
            .parse()
            .map_err(|_| {
                ConfigError::Validation(format!(
                    "invalid listen address {}:{}",
                    self.server.bind_address, self.server.port
                ))
            })
    }
}

/// Trim zone names and drop blanks left by stray commas.
fn normalize_zones(zones: Vec<String>) -> Vec<String> {
    zones
        .into_iter()
        .map(|z| z.trim().to_string())
        .filter(|z| !z.is_empty())
        .collect()
}

use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Level at which query rates are tracked.
///
/// Fixed for the lifetime of the process: the cache is built once at
/// startup with one entity per record or one per zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One entity per DNS record in every monitored zone
    #[default]
    Record,
    /// One entity per monitored zone
    Zone,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Record => "record",
            Granularity::Zone => "zone",
        }
    }
}

impl FromStr for Granularity {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "record" => Ok(Granularity::Record),
            "zone" => Ok(Granularity::Zone),
            _ => Err(ConfigError::InvalidGranularity(s.to_string())),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

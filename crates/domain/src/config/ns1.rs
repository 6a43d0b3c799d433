use crate::granularity::Granularity;
use serde::{Deserialize, Serialize};

/// NS1 API access and monitoring scope
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Ns1Config {
    /// API key sent in the `X-NSONE-Key` header
    #[serde(default)]
    pub api_key: String,

    /// Zones to monitor. When absent every zone in the account is discovered
    /// at startup.
    #[serde(default)]
    pub zones: Option<Vec<String>>,

    /// Track rates per record or per zone (default: record)
    #[serde(default)]
    pub granularity: Granularity,

    /// Timeout applied to every API call in milliseconds (default: 5000)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// API root (default: "https://api.nsone.net")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for Ns1Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            zones: None,
            granularity: Granularity::default(),
            timeout_ms: default_timeout_ms(),
            base_url: default_base_url(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_base_url() -> String {
    "https://api.nsone.net".to_string()
}

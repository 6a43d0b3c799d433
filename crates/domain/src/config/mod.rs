//! Configuration module for the NS1 exporter
//!
//! - `root`: Main configuration, loading and CLI overrides
//! - `ns1`: Upstream API credentials, zone selection and granularity
//! - `server`: Metrics endpoint binding
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod ns1;
pub mod root;
pub mod server;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use ns1::Ns1Config;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;

//! NS1 Exporter Domain Layer
pub mod config;
pub mod entity;
pub mod errors;
pub mod granularity;

pub use config::{CliOverrides, Config, ConfigError};
pub use entity::{Entity, EntityScope, Sample, METRIC_NAME};
pub use errors::DomainError;
pub use granularity::Granularity;

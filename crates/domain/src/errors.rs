use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Upstream request failed: {0}")]
    Upstream(String),

    #[error("Upstream request timed out after {0} ms")]
    UpstreamTimeout(u64),

    #[error("Upstream returned HTTP {status}: {message}")]
    UpstreamStatus { status: u16, message: String },

    #[error("Invalid upstream response: {0}")]
    InvalidResponse(String),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),
}

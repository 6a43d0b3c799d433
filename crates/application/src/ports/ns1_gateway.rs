use async_trait::async_trait;
use ns1_exporter_domain::{DomainError, Entity, EntityScope};

/// Read-only access to the NS1 API.
///
/// Implementations must bound every call with the configured timeout and
/// report an elapsed timeout as an error.
#[async_trait]
pub trait Ns1Gateway: Send + Sync {
    /// FQDNs of every zone in the account, in API order.
    async fn list_zones(&self) -> Result<Vec<String>, DomainError>;

    /// Zone-level entity carrying the upstream zone id.
    async fn get_zone(&self, fqdn: &str) -> Result<Entity, DomainError>;

    /// One record-level entity per record in the zone.
    async fn list_records(&self, fqdn: &str) -> Result<Vec<Entity>, DomainError>;

    /// Current queries per second for a zone or record.
    async fn get_qps(&self, scope: &EntityScope) -> Result<f64, DomainError>;
}

use crate::ports::Ns1Gateway;
use crate::services::EntityCache;
use ns1_exporter_domain::{DomainError, Granularity};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case: Build the entity cache from the NS1 account
///
/// Runs once at startup. Any upstream error aborts initialization since
/// there is nothing to serve without it.
pub struct InitializeCacheUseCase {
    gateway: Arc<dyn Ns1Gateway>,
}

impl InitializeCacheUseCase {
    pub fn new(gateway: Arc<dyn Ns1Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        granularity: Granularity,
        zones: Option<Vec<String>>,
    ) -> Result<EntityCache, DomainError> {
        info!(granularity = %granularity, "Initializing exporter");

        let zones = match zones {
            Some(zones) => zones,
            None => {
                debug!("No zone list configured, discovering zones");
                self.gateway.list_zones().await?
            }
        };

        let mut cache = EntityCache::new(granularity, zones.clone());

        match granularity {
            Granularity::Record => {
                for zone in &zones {
                    let records = self.gateway.list_records(zone).await?;
                    debug!(zone = %zone, records = records.len(), "Loaded zone records");
                    for record in records {
                        cache.insert(record);
                    }
                }
                info!(
                    zones = zones.len(),
                    records = cache.len(),
                    "Initialization completed, monitoring {} zones that contain {} records",
                    zones.len(),
                    cache.len()
                );
            }
            Granularity::Zone => {
                for zone in &zones {
                    cache.insert(self.gateway.get_zone(zone).await?);
                }
                info!(
                    zones = zones.len(),
                    "Initialization completed, monitoring {} zones",
                    zones.len()
                );
            }
        }

        Ok(cache)
    }
}

use async_trait::async_trait;
use ns1_exporter_application::ports::{Clock, Ns1Gateway};
use ns1_exporter_domain::{DomainError, Entity, EntityScope};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

// ============================================================================
// Mock Ns1Gateway
// ============================================================================

#[derive(Clone, Default)]
pub struct MockNs1Gateway {
    zones: Arc<RwLock<Vec<String>>>,
    zone_ids: Arc<RwLock<HashMap<String, String>>>,
    records: Arc<RwLock<HashMap<String, Vec<(String, String, String)>>>>,
    qps: Arc<RwLock<HashMap<String, f64>>>,
    failing: Arc<RwLock<HashSet<String>>>,
    fail_all: Arc<RwLock<bool>>,
    list_zones_calls: Arc<AtomicUsize>,
    qps_calls: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockNs1Gateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account with the given zones; zone ids are `id-<zone>`.
    pub async fn with_zones(zones: &[&str]) -> Self {
        let mock = Self::new();
        for zone in zones {
            mock.add_zone(zone, &format!("id-{}", zone)).await;
        }
        mock
    }

    pub async fn add_zone(&self, zone: &str, id: &str) {
        self.zones.write().await.push(zone.to_string());
        self.zone_ids
            .write()
            .await
            .insert(zone.to_string(), id.to_string());
    }

    pub async fn add_record(&self, zone: &str, id: &str, domain: &str, record_type: &str) {
        self.records
            .write()
            .await
            .entry(zone.to_string())
            .or_default()
            .push((id.to_string(), domain.to_string(), record_type.to_string()));
    }

    /// QPS returned for a scope path (`zone` or `zone/domain/type`).
    /// Unset paths return 1.0.
    pub async fn set_qps(&self, path: &str, qps: f64) {
        self.qps.write().await.insert(path.to_string(), qps);
    }

    pub async fn fail_path(&self, path: &str) {
        self.failing.write().await.insert(path.to_string());
    }

    pub async fn heal_path(&self, path: &str) {
        self.failing.write().await.remove(path);
    }

    pub async fn set_fail_all(&self, fail: bool) {
        *self.fail_all.write().await = fail;
    }

    pub fn list_zones_calls(&self) -> usize {
        self.list_zones_calls.load(Ordering::SeqCst)
    }

    pub fn qps_calls(&self) -> usize {
        self.qps_calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn check_fail_all(&self) -> Result<(), DomainError> {
        if *self.fail_all.read().await {
            return Err(DomainError::Upstream("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl Ns1Gateway for MockNs1Gateway {
    async fn list_zones(&self) -> Result<Vec<String>, DomainError> {
        self.list_zones_calls.fetch_add(1, Ordering::SeqCst);
        self.check_fail_all().await?;
        Ok(self.zones.read().await.clone())
    }

    async fn get_zone(&self, fqdn: &str) -> Result<Entity, DomainError> {
        self.check_fail_all().await?;
        self.zone_ids
            .read()
            .await
            .get(fqdn)
            .map(|id| Entity::zone(id.clone(), fqdn))
            .ok_or_else(|| DomainError::ZoneNotFound(fqdn.to_string()))
    }

    async fn list_records(&self, fqdn: &str) -> Result<Vec<Entity>, DomainError> {
        self.check_fail_all().await?;
        if !self.zone_ids.read().await.contains_key(fqdn) {
            return Err(DomainError::ZoneNotFound(fqdn.to_string()));
        }
        Ok(self
            .records
            .read()
            .await
            .get(fqdn)
            .map(|records| {
                records
                    .iter()
                    .map(|(id, domain, rtype)| {
                        Entity::record(id.clone(), fqdn, domain.clone(), rtype.clone())
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get_qps(&self, scope: &EntityScope) -> Result<f64, DomainError> {
        self.qps_calls.fetch_add(1, Ordering::SeqCst);
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);

        // Let sibling lookups start before this one settles.
        tokio::task::yield_now().await;
        tokio::task::yield_now().await;

        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let path = scope.qps_path();
        if *self.fail_all.read().await || self.failing.read().await.contains(&path) {
            return Err(DomainError::UpstreamStatus {
                status: 503,
                message: format!("stats unavailable for {}", path),
            });
        }

        Ok(self.qps.read().await.get(&path).copied().unwrap_or(1.0))
    }
}

// ============================================================================
// Manual clock
// ============================================================================

#[derive(Clone)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn at(now_ms: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now_ms)),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, ms: u64) {
        self.now.fetch_add(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

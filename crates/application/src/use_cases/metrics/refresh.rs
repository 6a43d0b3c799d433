use crate::ports::{Clock, Ns1Gateway};
use crate::services::{CacheEntry, EntityCache};
use futures::future::join_all;
use ns1_exporter_domain::{DomainError, Sample};
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum number of QPS lookups in flight at once.
pub const REFRESH_BATCH_SIZE: usize = 10;

/// Result of one entity's refresh attempt.
#[derive(Debug)]
pub enum RefreshStatus {
    Updated(Sample),
    Failed(DomainError),
    /// Another refresh held the entity, or it was already fresh when claimed
    Skipped,
}

#[derive(Debug)]
pub struct EntityRefreshOutcome {
    pub entity_id: String,
    pub name: String,
    pub status: RefreshStatus,
}

/// Everything a single refresh pass did.
#[derive(Debug, Default)]
pub struct RefreshReport {
    pub stale: usize,
    pub batches: usize,
    pub outcomes: Vec<EntityRefreshOutcome>,
}

impl RefreshReport {
    pub fn updated(&self) -> usize {
        self.count(|s| matches!(s, RefreshStatus::Updated(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, RefreshStatus::Failed(_)))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, RefreshStatus::Skipped))
    }

    pub fn failures(&self) -> impl Iterator<Item = (&EntityRefreshOutcome, &DomainError)> {
        self.outcomes.iter().filter_map(|o| match &o.status {
            RefreshStatus::Failed(e) => Some((o, e)),
            _ => None,
        })
    }

    fn count(&self, pred: impl Fn(&RefreshStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Use case: Re-fetch QPS for every stale entity
///
/// Stale entities are processed in batches of `REFRESH_BATCH_SIZE`; lookups
/// inside a batch run concurrently and the next batch starts only once the
/// previous one has settled. A failed lookup leaves the entity's last sample
/// in place. The pass as a whole never fails.
pub struct RefreshMetricsUseCase {
    cache: Arc<EntityCache>,
    gateway: Arc<dyn Ns1Gateway>,
    clock: Arc<dyn Clock>,
}

impl RefreshMetricsUseCase {
    pub fn new(
        cache: Arc<EntityCache>,
        gateway: Arc<dyn Ns1Gateway>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            cache,
            gateway,
            clock,
        }
    }

    pub async fn execute(&self) -> RefreshReport {
        let report = self.refresh_stale().await;

        for (outcome, error) in report.failures() {
            warn!(
                entity_id = %outcome.entity_id,
                entity = %outcome.name,
                error = %error,
                "Failed to fetch QPS, keeping last value"
            );
        }

        debug!(
            stale = report.stale,
            batches = report.batches,
            updated = report.updated(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Metrics refresh completed"
        );

        report
    }

    async fn refresh_stale(&self) -> RefreshReport {
        let stale = self.cache.stale_entries(self.clock.now_millis());
        let mut report = RefreshReport {
            stale: stale.len(),
            batches: 0,
            outcomes: Vec::with_capacity(stale.len()),
        };

        for batch in stale.chunks(REFRESH_BATCH_SIZE) {
            let outcomes = join_all(batch.iter().map(|entry| self.refresh_entry(entry))).await;
            report.outcomes.extend(outcomes);
            report.batches += 1;
        }

        report
    }

    async fn refresh_entry(&self, entry: &CacheEntry) -> EntityRefreshOutcome {
        let entity = entry.entity();
        let outcome = |status: RefreshStatus| EntityRefreshOutcome {
            entity_id: entity.id().to_string(),
            name: entity.scope().display_name().to_string(),
            status,
        };

        let Some(_claim) = entry.try_claim() else {
            return outcome(RefreshStatus::Skipped);
        };

        let now = self.clock.now_millis();
        if !entity.is_stale(now) {
            return outcome(RefreshStatus::Skipped);
        }

        match self.gateway.get_qps(entity.scope()).await {
            Ok(qps) if qps.is_finite() => outcome(RefreshStatus::Updated(
                entity.record_sample(qps, now),
            )),
            Ok(qps) => outcome(RefreshStatus::Failed(DomainError::InvalidResponse(
                format!("non-finite qps value {}", qps),
            ))),
            Err(e) => outcome(RefreshStatus::Failed(e)),
        }
    }
}

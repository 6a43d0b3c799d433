use ns1_exporter_domain::{Entity, Granularity};
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// A cached entity plus the flag marking an in-flight refresh.
#[derive(Debug)]
pub struct CacheEntry {
    entity: Entity,
    in_flight: AtomicBool,
}

impl CacheEntry {
    fn new(entity: Entity) -> Self {
        Self {
            entity,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Claim the right to refresh this entry. Returns `None` while another
    /// refresh of the same entry is running.
    pub fn try_claim(&self) -> Option<RefreshClaim<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshClaim {
                flag: &self.in_flight,
            })
    }
}

/// Releases the in-flight flag when dropped.
#[derive(Debug)]
pub struct RefreshClaim<'a> {
    flag: &'a AtomicBool,
}

impl Drop for RefreshClaim<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Monitored entities keyed by upstream id.
///
/// Entries keep their insertion order, so rendering is stable across scrapes.
/// The set of entries is fixed once the cache is shared; only samples change.
#[derive(Debug)]
pub struct EntityCache {
    granularity: Granularity,
    zones: Vec<String>,
    entries: Vec<CacheEntry>,
    index: FxHashMap<String, usize>,
}

impl EntityCache {
    pub fn new(granularity: Granularity, zones: Vec<String>) -> Self {
        Self {
            granularity,
            zones,
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Add an entity. The first entity seen for an id wins; returns `false`
    /// for duplicates.
    pub fn insert(&mut self, entity: Entity) -> bool {
        if self.index.contains_key(entity.id()) {
            debug!(entity_id = entity.id(), "Duplicate entity id ignored");
            return false;
        }
        self.index
            .insert(entity.id().to_string(), self.entries.len());
        self.entries.push(CacheEntry::new(entity));
        true
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn zones(&self) -> &[String] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.index.get(id).map(|&i| self.entries[i].entity())
    }

    /// Entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entries.iter().map(CacheEntry::entity)
    }

    /// Entries whose last sample is older than the minute of `now_ms`.
    pub fn stale_entries(&self, now_ms: u64) -> Vec<&CacheEntry> {
        self.entries
            .iter()
            .filter(|e| e.entity().is_stale(now_ms))
            .collect()
    }
}

#![allow(dead_code)]

pub mod mock_gateway;

pub use mock_gateway::{ManualClock, MockNs1Gateway};

use ns1_exporter_application::services::EntityCache;
use ns1_exporter_domain::{Entity, Granularity};

/// Start of a minute: 2023-11-14T22:20:00Z
pub const T0: u64 = 1_700_000_400_000;
pub const MINUTE: u64 = 60_000;

/// Zone-granularity cache with one entity per name, ids `id-<name>`.
pub fn zone_cache(zones: &[&str]) -> EntityCache {
    let mut cache = EntityCache::new(
        Granularity::Zone,
        zones.iter().map(|z| z.to_string()).collect(),
    );
    for zone in zones {
        cache.insert(Entity::zone(format!("id-{}", zone), *zone));
    }
    cache
}

/// Zone names `zone-0.test` .. `zone-{n-1}.test`.
pub fn zone_names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("zone-{}.test", i)).collect()
}

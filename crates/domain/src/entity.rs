use arc_swap::ArcSwapOption;
use std::sync::Arc;

/// Name of the single gauge family exported.
pub const METRIC_NAME: &str = "ns1_record_queries_per_minute";

/// Width of a staleness bucket in milliseconds.
pub const MINUTE_MS: u64 = 60_000;

/// NS1 reports QPS with a fixed five minute delay.
pub const STATS_LAG_MS: u64 = 5 * MINUTE_MS;

/// Calendar-minute bucket of an epoch-millisecond timestamp.
#[inline]
pub fn minute_bucket(timestamp_ms: u64) -> u64 {
    timestamp_ms / MINUTE_MS
}

/// Start of the minute containing `timestamp_ms`.
#[inline]
pub fn minute_floor(timestamp_ms: u64) -> u64 {
    minute_bucket(timestamp_ms) * MINUTE_MS
}

/// What an entity measures: a whole zone, or one record inside it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityScope {
    Zone {
        zone: String,
    },
    Record {
        zone: String,
        domain: String,
        record_type: String,
    },
}

impl EntityScope {
    pub fn zone(&self) -> &str {
        match self {
            EntityScope::Zone { zone } | EntityScope::Record { zone, .. } => zone,
        }
    }

    pub fn domain(&self) -> Option<&str> {
        match self {
            EntityScope::Zone { .. } => None,
            EntityScope::Record { domain, .. } => Some(domain),
        }
    }

    pub fn record_type(&self) -> Option<&str> {
        match self {
            EntityScope::Zone { .. } => None,
            EntityScope::Record { record_type, .. } => Some(record_type),
        }
    }

    /// Path segment identifying this scope in the stats API
    /// (`zone` or `zone/domain/type`).
    pub fn qps_path(&self) -> String {
        match self {
            EntityScope::Zone { zone } => zone.clone(),
            EntityScope::Record {
                zone,
                domain,
                record_type,
            } => format!("{}/{}/{}", zone, domain, record_type),
        }
    }

    /// Human-readable name used in log lines.
    pub fn display_name(&self) -> &str {
        self.domain().unwrap_or_else(|| self.zone())
    }
}

/// One observed QPS value and the minute it was taken in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Queries per second, rounded to three decimals
    pub value: f64,
    /// Minute boundary (epoch ms) at which the value was fetched
    pub timestamp_ms: u64,
}

impl Sample {
    pub fn new(qps: f64, fetched_at_ms: u64) -> Self {
        Self {
            value: round_to_millis(qps),
            timestamp_ms: minute_floor(fetched_at_ms),
        }
    }

    /// Integer queries per minute, truncated.
    pub fn queries_per_minute(&self) -> i64 {
        (self.value * 60.0).floor() as i64
    }

    /// Timestamp shifted back to the minute the provider collected it in.
    pub fn collected_at_ms(&self) -> i64 {
        self.timestamp_ms as i64 - STATS_LAG_MS as i64
    }
}

fn round_to_millis(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A monitored zone or record together with its last sample.
///
/// The sample is swapped as a whole so readers always see a value and
/// timestamp taken from the same fetch.
#[derive(Debug)]
pub struct Entity {
    id: String,
    scope: EntityScope,
    sample: ArcSwapOption<Sample>,
}

impl Entity {
    pub fn new(id: impl Into<String>, scope: EntityScope) -> Self {
        Self {
            id: id.into(),
            scope,
            sample: ArcSwapOption::empty(),
        }
    }

    pub fn zone(id: impl Into<String>, zone: impl Into<String>) -> Self {
        Self::new(id, EntityScope::Zone { zone: zone.into() })
    }

    pub fn record(
        id: impl Into<String>,
        zone: impl Into<String>,
        domain: impl Into<String>,
        record_type: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            EntityScope::Record {
                zone: zone.into(),
                domain: domain.into(),
                record_type: record_type.into(),
            },
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn scope(&self) -> &EntityScope {
        &self.scope
    }

    pub fn sample(&self) -> Option<Sample> {
        self.sample.load().as_deref().copied()
    }

    /// Epoch ms of the last sample, 0 when never sampled.
    pub fn last_timestamp(&self) -> u64 {
        self.sample().map(|s| s.timestamp_ms).unwrap_or(0)
    }

    /// True when `now_ms` falls in a later minute than the last sample.
    pub fn is_stale(&self, now_ms: u64) -> bool {
        minute_bucket(now_ms) > minute_bucket(self.last_timestamp())
    }

    /// Store a freshly fetched QPS value.
    pub fn record_sample(&self, qps: f64, fetched_at_ms: u64) -> Sample {
        let sample = Sample::new(qps, fetched_at_ms);
        self.sample.store(Some(Arc::new(sample)));
        sample
    }

    /// Exposition line for this entity, or an empty string if never sampled.
    pub fn render(&self) -> String {
        let Some(sample) = self.sample().filter(|s| s.timestamp_ms != 0) else {
            return String::new();
        };

        let mut line = format!("{}{{zone=\"{}\"", METRIC_NAME, self.scope.zone());
        if let Some(domain) = self.scope.domain() {
            line.push_str(&format!(",domain=\"{}\"", domain));
        }
        if let Some(record_type) = self.scope.record_type() {
            line.push_str(&format!(",type=\"{}\"", record_type));
        }
        line.push_str(&format!(
            "}} {} {}",
            sample.queries_per_minute(),
            sample.collected_at_ms()
        ));
        line
    }
}

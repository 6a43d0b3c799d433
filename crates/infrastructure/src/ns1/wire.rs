//! JSON bodies returned by the NS1 v1 API (only the fields we read).

use ns1_exporter_domain::Entity;
use serde::Deserialize;

/// Element of `GET /v1/zones`
#[derive(Debug, Deserialize)]
pub struct ZoneSummary {
    pub zone: String,
}

/// `GET /v1/zones/{zone}`
#[derive(Debug, Deserialize)]
pub struct ZoneDetail {
    pub id: String,
    #[serde(default)]
    pub records: Vec<RecordSummary>,
}

#[derive(Debug, Deserialize)]
pub struct RecordSummary {
    pub id: String,
    pub domain: String,
    #[serde(rename = "type")]
    pub record_type: String,
}

/// `GET /v1/stats/qps/...`
#[derive(Debug, Deserialize)]
pub struct QpsResponse {
    pub qps: f64,
}

impl ZoneDetail {
    pub fn into_zone_entity(self, zone: &str) -> Entity {
        Entity::zone(self.id, zone)
    }

    pub fn into_record_entities(self, zone: &str) -> Vec<Entity> {
        self.records
            .into_iter()
            .map(|r| Entity::record(r.id, zone, r.domain, r.record_type))
            .collect()
    }
}

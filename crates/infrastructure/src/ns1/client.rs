use super::wire::{QpsResponse, ZoneDetail, ZoneSummary};
use async_trait::async_trait;
use ns1_exporter_application::ports::Ns1Gateway;
use ns1_exporter_domain::config::Ns1Config;
use ns1_exporter_domain::{DomainError, Entity, EntityScope};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Header carrying the NS1 API key
pub const API_KEY_HEADER: &str = "X-NSONE-Key";

/// NS1 REST API client
///
/// Every request is bounded by the configured timeout, both through the
/// `reqwest` client and an outer `tokio::time::timeout`, so a stalled
/// connection surfaces as `DomainError::UpstreamTimeout`.
pub struct Ns1ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl Ns1ApiClient {
    pub fn new(config: &Ns1Config) -> Result<Self, DomainError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| DomainError::Upstream(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn timeout_ms(&self) -> u64 {
        self.timeout.as_millis() as u64
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DomainError> {
        let url = self.url(path);
        debug!(url = %url, "Sending NS1 API request");

        let response = tokio::time::timeout(
            self.timeout,
            self.http
                .get(&url)
                .header(API_KEY_HEADER, &self.api_key)
                .send(),
        )
        .await
        .map_err(|_| DomainError::UpstreamTimeout(self.timeout_ms()))?
        .map_err(|e| self.request_error(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::UpstreamStatus {
                status: status.as_u16(),
                message: format!(
                    "GET {} - {}",
                    path,
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let body = tokio::time::timeout(self.timeout, response.bytes())
            .await
            .map_err(|_| DomainError::UpstreamTimeout(self.timeout_ms()))?
            .map_err(|e| self.request_error(&url, e))?;

        debug!(url = %url, response_len = body.len(), "NS1 API response received");

        serde_json::from_slice(&body)
            .map_err(|e| DomainError::InvalidResponse(format!("GET {}: {}", path, e)))
    }

    fn request_error(&self, url: &str, e: reqwest::Error) -> DomainError {
        if e.is_timeout() {
            DomainError::UpstreamTimeout(self.timeout_ms())
        } else {
            DomainError::Upstream(format!("GET {} failed: {}", url, e))
        }
    }

    async fn zone_detail(&self, fqdn: &str) -> Result<ZoneDetail, DomainError> {
        self.get_json(&format!("/v1/zones/{}", fqdn))
            .await
            .map_err(|e| match e {
                DomainError::UpstreamStatus { status: 404, .. } => {
                    DomainError::ZoneNotFound(fqdn.to_string())
                }
                other => other,
            })
    }
}

#[async_trait]
impl Ns1Gateway for Ns1ApiClient {
    async fn list_zones(&self) -> Result<Vec<String>, DomainError> {
        let zones: Vec<ZoneSummary> = self.get_json("/v1/zones").await?;
        Ok(zones.into_iter().map(|z| z.zone).collect())
    }

    async fn get_zone(&self, fqdn: &str) -> Result<Entity, DomainError> {
        Ok(self.zone_detail(fqdn).await?.into_zone_entity(fqdn))
    }

    async fn list_records(&self, fqdn: &str) -> Result<Vec<Entity>, DomainError> {
        Ok(self.zone_detail(fqdn).await?.into_record_entities(fqdn))
    }

    async fn get_qps(&self, scope: &EntityScope) -> Result<f64, DomainError> {
        let response: QpsResponse = self
            .get_json(&format!("/v1/stats/qps/{}", scope.qps_path()))
            .await?;
        Ok(response.qps)
    }
}

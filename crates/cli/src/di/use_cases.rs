use ns1_exporter_api::AppState;
use ns1_exporter_application::ports::{Clock, Ns1Gateway};
use ns1_exporter_application::use_cases::{
    InitializeCacheUseCase, RefreshMetricsUseCase, RenderMetricsUseCase,
};
use ns1_exporter_domain::config::Ns1Config;
use ns1_exporter_infrastructure::{Ns1ApiClient, SystemClock};
use std::sync::Arc;

pub struct UseCases {
    pub refresh_metrics: Arc<RefreshMetricsUseCase>,
    pub render_metrics: Arc<RenderMetricsUseCase>,
}

impl UseCases {
    /// Build the NS1 client, load the entity cache and wire the scrape use
    /// cases around it. Fails if the cache cannot be loaded.
    pub async fn initialize(config: &Ns1Config) -> anyhow::Result<Self> {
        let gateway: Arc<dyn Ns1Gateway> = Arc::new(Ns1ApiClient::new(config)?);
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);

        let cache = InitializeCacheUseCase::new(Arc::clone(&gateway))
            .execute(config.granularity, config.zones.clone())
            .await?;
        let cache = Arc::new(cache);

        Ok(Self {
            refresh_metrics: Arc::new(RefreshMetricsUseCase::new(
                Arc::clone(&cache),
                gateway,
                clock,
            )),
            render_metrics: Arc::new(RenderMetricsUseCase::new(cache)),
        })
    }

    pub fn app_state(&self) -> AppState {
        AppState {
            refresh_metrics: Arc::clone(&self.refresh_metrics),
            render_metrics: Arc::clone(&self.render_metrics),
        }
    }
}

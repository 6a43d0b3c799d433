use ns1_exporter_application::use_cases::{RefreshMetricsUseCase, RenderMetricsUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub refresh_metrics: Arc<RefreshMetricsUseCase>,
    pub render_metrics: Arc<RenderMetricsUseCase>,
}

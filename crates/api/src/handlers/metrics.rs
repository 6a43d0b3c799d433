use crate::state::AppState;
use axum::{extract::State, http::header, response::IntoResponse};
use ns1_exporter_application::services::EXPOSITION_CONTENT_TYPE;
use tracing::{debug, instrument};

/// Refreshes stale entities, then serves the whole cache.
///
/// Always answers 200: failed lookups fall back to the last known values.
#[instrument(skip(state), name = "api_get_metrics")]
pub async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.refresh_metrics.execute().await;
    let body = state.render_metrics.execute();

    debug!(
        stale = report.stale,
        updated = report.updated(),
        failed = report.failed(),
        body_len = body.len(),
        "Serving metrics"
    );

    ([(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)], body)
}

use ns1_exporter_api::{create_metrics_routes, AppState};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info};

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = create_metrics_routes(state);

    let listener = TcpListener::bind(bind_addr).await?;
    info!(bind_address = %bind_addr, "Metrics endpoint listening on http://{}/metrics", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Web server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

//! # NS1 Exporter
//!
//! Serves NS1 per-minute query rates on `/metrics` in OpenMetrics text form.

use clap::Parser;
use ns1_exporter_domain::{CliOverrides, Granularity};
use tracing::info;

mod bootstrap;
mod di;
mod server;

use di::UseCases;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "ns1-exporter")]
#[command(version)]
#[command(about = "Prometheus exporter for NS1 query rates")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long, env = "NS1_EXPORTER_CONFIG")]
    config: Option<String>,

    /// NS1 API key
    #[arg(long, env = "NS1_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Comma-separated zones to monitor (all account zones when omitted)
    #[arg(short = 'z', long, env = "MONITOR_ZONES", value_delimiter = ',')]
    zones: Option<Vec<String>>,

    /// Export per record or per zone
    #[arg(short = 'g', long, env = "EXPORTER_GRANULARITY")]
    granularity: Option<Granularity>,

    /// NS1 request timeout in milliseconds
    #[arg(long, env = "CLIENT_TIMEOUT")]
    timeout_ms: Option<u64>,

    /// Bind address
    #[arg(short = 'b', long, env = "SERVER_BIND")]
    bind: Option<String>,

    /// Metrics port
    #[arg(short = 'p', long, env = "SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "LOG_LEVEL")]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            api_key: self.api_key.clone(),
            zones: self.zones.clone(),
            granularity: self.granularity,
            timeout_ms: self.timeout_ms,
            bind_address: self.bind.clone(),
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config.logging);

    info!(
        granularity = %config.ns1.granularity,
        zones = ?config.ns1.zones,
        timeout_ms = config.ns1.timeout_ms,
        "Starting NS1 exporter v{}",
        env!("CARGO_PKG_VERSION")
    );

    let bind_addr = config.listen_addr()?;
    let use_cases = UseCases::initialize(&config.ns1).await?;

    server::start_web_server(bind_addr, use_cases.app_state()).await?;

    info!("NS1 exporter stopped");
    Ok(())
}

use ns1_exporter_domain::{CliOverrides, Config};

/// Load and validate configuration. Runs before logging is initialized, so
/// callers report the outcome themselves.
pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

use anyhow::{Error, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use whisper_relay::{
    api::run_api_server,
    config::{Config, Settings},
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::load()?;
    let config = Config::from_file(&settings.config_path)?;

    info!(
        config_path = %settings.config_path.display(),
        admins = config.admins.len(),
        "Configuration loaded"
    );

    // Serve failures end the process normally once logged.
    if let Err(e) = run_api_server(config, &settings.listen_addr()).await {
        error!(error = %e, "Webhook relay stopped");
    }

    Ok(())
}

use tokengate::config::AppConfig;
use tokengate::{server, state, telemetry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    let config = AppConfig::from_env()?;
    let state = state::build_state(&config.token)?;
    tracing::info!(
        algorithm = %config.token.algorithm,
        ttl_seconds = config.token.ttl_seconds,
        "starting tokengate on {}",
        config.bind_addr
    );

    server::run(state, &config.bind_addr).await?;
    Ok(())
}

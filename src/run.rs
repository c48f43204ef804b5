// Service startup and lifecycle

use crate::{
    apis::AlphaVantageClient,
    arguments,
    config::Config,
    logger::{self, LogTag},
    pairs::CONFIGURED_PAIRS,
    rates::{RateCache, RATE_CACHE_TTL_SECS},
    web_server::{self, AppState},
};
use anyhow::{anyhow, Result};
use std::sync::Arc;

/// Main service execution: validate arguments, load configuration, build the
/// provider + cache stack and run the web server until shutdown.
pub async fn start() -> Result<()> {
    logger::info(LogTag::System, "FxScreener starting up...");

    // 1. Validate CLI arguments early (before any processing)
    if let Err(e) = arguments::validate_port_argument() {
        logger::error(
            LogTag::System,
            &format!("Argument validation failed: {}", e),
        );
        return Err(anyhow!(e));
    }

    if let Err(e) = arguments::validate_host_argument() {
        logger::error(
            LogTag::System,
            &format!("Argument validation failed: {}", e),
        );
        return Err(anyhow!(e));
    }

    // 2. Log CLI overrides (if provided)
    if let Some(port) = arguments::get_port_override() {
        if arguments::is_privileged_port(port) {
            logger::warning(
                LogTag::System,
                &format!(
                    "Port {} requires elevated privileges (root/Administrator)",
                    port
                ),
            );
        }

        logger::info(
            LogTag::System,
            &format!("CLI override: Using port {}", port),
        );
    }

    if let Some(host) = arguments::get_host_override() {
        logger::info(
            LogTag::System,
            &format!("CLI override: Using host {}", host),
        );

        if host == "0.0.0.0" {
            logger::warning(
                LogTag::System,
                "Binding to 0.0.0.0 allows remote access - ensure firewall is configured",
            );
        }
    }

    // 3. Load configuration
    let config = Config::load()?;

    if config.upstream.api_key.is_empty() {
        logger::warning(
            LogTag::Config,
            "ALPHA_KEY is not set - every upstream fetch will fail and pairs will be omitted from responses",
        );
    }

    logger::info(
        LogTag::Config,
        &format!(
            "Watching {} currency pairs, cache TTL {}s",
            CONFIGURED_PAIRS.len(),
            RATE_CACHE_TTL_SECS
        ),
    );

    // 4. Build the provider + cache stack shared by all requests
    let provider = AlphaVantageClient::new(config.upstream.api_key.clone())
        .map_err(|e| anyhow!("Failed to create upstream client: {}", e))?;
    let state = Arc::new(AppState {
        rates: RateCache::new(Arc::new(provider)),
    });

    // 5. Run the web server until a shutdown signal arrives
    web_server::start_web_server(&config, state).await?;

    logger::info(LogTag::System, "Shutdown complete");
    Ok(())
}

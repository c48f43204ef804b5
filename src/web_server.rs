//! HTTP API server.
//!
//! Two GET endpoints behind a permissive-CORS axum router:
//! - /api/analysis: derived signals for every pair with a live rate
//! - /api/health: liveness probe with version and cache age
//!
//! The analysis endpoint always answers 200: upstream failures only shrink
//! the payload, they never surface as HTTP errors.

use crate::arguments::{is_debug_signals_enabled, is_debug_webserver_enabled};
use crate::config::Config;
use crate::logger::{self, LogTag};
use crate::pairs::CONFIGURED_PAIRS;
use crate::rates::{RateCache, RateSnapshot};
use crate::signals::derive_signal;
use anyhow::{Context, Result};
use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state handed to every request handler
pub struct AppState {
    pub rates: RateCache,
}

pub type SharedState = Arc<AppState>;

pub async fn start_web_server(config: &Config, state: SharedState) -> Result<()> {
    let app = Router::new()
        .route("/api/analysis", get(get_analysis))
        .route("/api/health", get(get_health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    logger::info(
        LogTag::WebServer,
        &format!("Analysis API available at http://{}/api/analysis", addr),
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Web server error")?;

    Ok(())
}

/// GET /api/analysis
async fn get_analysis(State(state): State<SharedState>) -> Json<Value> {
    if is_debug_webserver_enabled() {
        logger::log(LogTag::WebServer, "REQUEST", "GET /api/analysis");
    }

    let snapshot = state.rates.get().await;
    let analysis = build_analysis(&snapshot);

    if is_debug_signals_enabled() {
        logger::log(
            LogTag::Signals,
            "DERIVED",
            &format!(
                "{} signals from {} cached pairs",
                analysis.len(),
                snapshot.len()
            ),
        );
    }

    Json(json!({ "analysis": analysis }))
}

/// GET /api/health
async fn get_health(State(state): State<SharedState>) -> Json<Value> {
    let cache_age_secs = state.rates.age_secs().await;
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "cache_age_secs": cache_age_secs,
    }))
}

/// Map every pair with a live rate to its derived signal. Pairs whose rate
/// is absent are left out of the response entirely.
fn build_analysis(snapshot: &RateSnapshot) -> Map<String, Value> {
    let mut analysis = Map::new();

    for pair in CONFIGURED_PAIRS.iter() {
        let rate = match snapshot.get(pair).copied().flatten() {
            Some(rate) => rate,
            None => continue,
        };

        match serde_json::to_value(derive_signal(rate)) {
            Ok(signal) => {
                analysis.insert(pair.canonical().to_string(), signal);
            }
            Err(e) => {
                logger::error(
                    LogTag::WebServer,
                    &format!("Failed to serialize signal for {}: {}", pair, e),
                );
            }
        }
    }

    analysis
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            logger::error(
                LogTag::Shutdown,
                &format!("Failed to install Ctrl+C handler: {}", e),
            );
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                logger::error(
                    LogTag::Shutdown,
                    &format!("Failed to install SIGTERM handler: {}", e),
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => logger::info(LogTag::Shutdown, "Received Ctrl+C, shutting down..."),
        _ = terminate => logger::info(LogTag::Shutdown, "Received SIGTERM, shutting down..."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with(overrides: &[(usize, Option<f64>)]) -> RateSnapshot {
        // Every pair fetched at 0.5, with selected indexes overridden
        let mut snapshot = RateSnapshot::new();
        for pair in CONFIGURED_PAIRS.iter() {
            snapshot.insert(*pair, Some(0.5));
        }
        for (index, value) in overrides {
            snapshot.insert(CONFIGURED_PAIRS[*index], *value);
        }
        snapshot
    }

    #[test]
    fn test_absent_rates_are_omitted() {
        let mut snapshot = snapshot_with(&[(0, None)]);
        // A pair missing from the snapshot entirely behaves like an absent rate
        snapshot.remove(&CONFIGURED_PAIRS[1]);

        let analysis = build_analysis(&snapshot);
        assert!(!analysis.contains_key("EUR/USD"));
        assert!(!analysis.contains_key("GBP/USD"));
        assert_eq!(analysis.len(), CONFIGURED_PAIRS.len() - 2);
    }

    #[test]
    fn test_populated_rates_have_signal_objects() {
        let snapshot = snapshot_with(&[(0, Some(1.0850))]);
        let analysis = build_analysis(&snapshot);

        let signal = analysis.get("EUR/USD").unwrap();
        assert_eq!(signal["shortSignal"], "BUY");
        assert_eq!(signal["shortSL"], "1.07957");
        assert_eq!(signal["reason"], crate::signals::SIGNAL_REASON);
    }

    #[test]
    fn test_empty_snapshot_yields_empty_analysis() {
        // Total upstream outage: every pair absent, response still well-formed
        let mut snapshot = RateSnapshot::new();
        for pair in CONFIGURED_PAIRS.iter() {
            snapshot.insert(*pair, None);
        }
        assert!(build_analysis(&snapshot).is_empty());
    }

    #[test]
    fn test_analysis_envelope_shape() {
        let snapshot = snapshot_with(&[]);
        let body = json!({ "analysis": build_analysis(&snapshot) });
        assert!(body["analysis"].is_object());
        assert_eq!(
            body["analysis"].as_object().unwrap().len(),
            CONFIGURED_PAIRS.len()
        );
    }
}

//! Runtime configuration.
//!
//! Everything comes from the environment (with an optional .env file) plus
//! the --port/--host CLI overrides. There is no config file: the watch list
//! is compiled in and the only secret is the upstream API key.

use crate::{arguments, pairs};
use anyhow::{anyhow, Context, Result};
use std::env;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub upstream: UpstreamConfig,
    pub server: ServerConfig,
}

/// Upstream rate provider settings
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// Alpha Vantage API key. May be empty: fetches then fail per pair and
    /// the affected pairs are omitted from responses.
    pub api_key: String,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upstream: UpstreamConfig {
                api_key: String::new(),
            },
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
        }
    }
}

impl Config {
    /// Load configuration from the environment and CLI overrides.
    ///
    /// A missing ALPHA_KEY is deliberately not an error here: the failure
    /// surfaces per pair once upstream calls start failing. Values that
    /// would corrupt request handling (unparseable PORT, malformed pair
    /// table) do fail the load.
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        pairs::validate_configured_pairs()
            .map_err(|e| anyhow!("Invalid currency pair configuration: {}", e))?;

        let api_key = env::var("ALPHA_KEY").unwrap_or_default();
        let port = resolve_port(env::var("PORT").ok(), arguments::get_port_override())?;
        let host = resolve_host(env::var("HOST").ok(), arguments::get_host_override());

        Ok(Self {
            upstream: UpstreamConfig { api_key },
            server: ServerConfig { host, port },
        })
    }
}

/// CLI override wins over the PORT env var; a set-but-unparseable env value
/// is a startup error rather than a silent fallback to the default.
fn resolve_port(env_port: Option<String>, cli_port: Option<u16>) -> Result<u16> {
    if let Some(port) = cli_port {
        return Ok(port);
    }
    match env_port {
        Some(raw) => raw
            .trim()
            .parse::<u16>()
            .with_context(|| format!("Invalid PORT value: '{}'", raw)),
        None => Ok(DEFAULT_PORT),
    }
}

fn resolve_host(env_host: Option<String>, cli_host: Option<String>) -> String {
    cli_host
        .or(env_host)
        .filter(|host| !host.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

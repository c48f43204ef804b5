/// Log tags identify which subsystem a message originates from.
///
/// Each tag maps to a debug flag: passing --debug-<key> on the command line
/// enables DEBUG-level output for that tag only.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
    /// Startup, shutdown, top-level lifecycle
    System,
    /// Configuration loading and validation
    Config,
    /// Upstream HTTP client (Alpha Vantage)
    Api,
    /// Rate cache refresh and TTL handling
    Cache,
    /// Signal derivation
    Signals,
    /// HTTP API server
    WebServer,
    /// Signal handling and graceful shutdown
    Shutdown,
}

impl LogTag {
    /// Key used in --debug-<key> command-line flags.
    pub fn to_debug_key(&self) -> &'static str {
        match self {
            LogTag::System => "system",
            LogTag::Config => "config",
            LogTag::Api => "api",
            LogTag::Cache => "cache",
            LogTag::Signals => "signals",
            LogTag::WebServer => "webserver",
            LogTag::Shutdown => "shutdown",
        }
    }

    /// Uncolored tag name, as written in the console column.
    pub fn to_plain_string(&self) -> &'static str {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Api => "API",
            LogTag::Cache => "CACHE",
            LogTag::Signals => "SIGNALS",
            LogTag::WebServer => "WEBSERVER",
            LogTag::Shutdown => "SHUTDOWN",
        }
    }
}

impl std::fmt::Display for LogTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plain_string())
    }
}

/// Centralized argument handling for FxScreener
///
/// This module consolidates command-line argument parsing and debug flag
/// checking. All runtime flags are read from a process-wide store seeded
/// with env::args(); modules query flags through the helpers here instead
/// of touching std::env directly, and tests substitute their own argument
/// vectors via set_cmd_args.
use crate::logger::{self, LogTag};
use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

/// Global command-line arguments storage
/// Thread-safe singleton that stores arguments for access throughout the application
pub static CMD_ARGS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(env::args().collect()));

/// Debug flags recognized at startup, one per subsystem
const DEBUG_FLAGS: &[&str] = &[
    "--debug-api",
    "--debug-cache",
    "--debug-signals",
    "--debug-system",
    "--debug-webserver",
];

// ============================================================================
// ARGUMENT STORE ACCESS
// ============================================================================

/// Sets the global command-line arguments
/// Used by tests and debug tools to override the default env::args() collection
pub fn set_cmd_args(args: Vec<String>) {
    if let Ok(mut cmd_args) = CMD_ARGS.lock() {
        *cmd_args = args;
    }
}

/// Gets a copy of the current command-line arguments
/// Returns a vector clone to avoid holding the mutex lock
pub fn get_cmd_args() -> Vec<String> {
    match CMD_ARGS.lock() {
        Ok(args) => args.clone(),
        Err(_) => {
            // Fallback to env::args if mutex is poisoned
            env::args().collect()
        }
    }
}

/// Checks if a specific argument is present in the command line
pub fn has_arg(arg: &str) -> bool {
    get_cmd_args().iter().any(|a| a == arg)
}

/// Gets the value of a command-line argument that follows a flag
/// Returns None if the flag is not found or has no value
pub fn get_arg_value(flag: &str) -> Option<String> {
    let args = get_cmd_args();
    for (i, arg) in args.iter().enumerate() {
        if arg == flag && i + 1 < args.len() {
            return Some(args[i + 1].clone());
        }
    }
    None
}

// ============================================================================
// DEBUG FLAGS
// ============================================================================

/// Generic lookup used by the logger: --debug-<key> enables DEBUG output
/// for the tag with that key
pub fn is_debug_enabled_for_key(key: &str) -> bool {
    has_arg(&format!("--debug-{}", key))
}

pub fn is_debug_api_enabled() -> bool {
    has_arg("--debug-api")
}

pub fn is_debug_cache_enabled() -> bool {
    has_arg("--debug-cache")
}

pub fn is_debug_signals_enabled() -> bool {
    has_arg("--debug-signals")
}

pub fn is_debug_system_enabled() -> bool {
    has_arg("--debug-system")
}

pub fn is_debug_webserver_enabled() -> bool {
    has_arg("--debug-webserver")
}

/// Checks if any debug mode is enabled
pub fn is_any_debug_enabled() -> bool {
    DEBUG_FLAGS.iter().any(|flag| has_arg(flag))
}

/// Names of all enabled debug modes, without the --debug- prefix
pub fn get_enabled_debug_modes() -> Vec<String> {
    DEBUG_FLAGS
        .iter()
        .filter(|flag| has_arg(flag))
        .map(|flag| flag.trim_start_matches("--debug-").to_string())
        .collect()
}

/// Announce enabled debug modes at startup so log output is explainable
pub fn print_debug_info() {
    let modes = get_enabled_debug_modes();
    if modes.is_empty() {
        return;
    }
    logger::info(
        LogTag::System,
        &format!("Debug modes enabled: {}", modes.join(", ")),
    );
}

// ============================================================================
// WEB SERVER OVERRIDES
// ============================================================================

/// Check the --port flag early so a typo fails fast at startup instead of
/// silently binding the default port
pub fn validate_port_argument() -> Result<(), String> {
    if !has_arg("--port") {
        return Ok(());
    }
    match get_arg_value("--port") {
        Some(raw) => match raw.parse::<u16>() {
            Ok(0) => Err("--port must be between 1 and 65535".to_string()),
            Ok(_) => Ok(()),
            Err(_) => Err(format!(
                "Invalid --port value '{}': expected a number between 1 and 65535",
                raw
            )),
        },
        None => Err("--port requires a value".to_string()),
    }
}

/// Parsed --port override, if present and valid
pub fn get_port_override() -> Option<u16> {
    get_arg_value("--port")
        .and_then(|raw| raw.parse::<u16>().ok())
        .filter(|port| *port != 0)
}

pub fn validate_host_argument() -> Result<(), String> {
    if !has_arg("--host") {
        return Ok(());
    }
    match get_arg_value("--host") {
        Some(value) if !value.is_empty() && !value.starts_with("--") => Ok(()),
        Some(value) => Err(format!("Invalid --host value '{}'", value)),
        None => Err("--host requires a value".to_string()),
    }
}

/// --host override, if present and valid
pub fn get_host_override() -> Option<String> {
    get_arg_value("--host").filter(|value| !value.is_empty() && !value.starts_with("--"))
}

/// Ports below 1024 need elevated privileges on most systems
pub fn is_privileged_port(port: u16) -> bool {
    port < 1024
}

// ============================================================================
// HELP OUTPUT
// ============================================================================

/// Print the full help screen
pub fn print_help() {
    println!("FxScreener - Forex pair analysis API server");
    println!();
    println!("USAGE:");
    println!("    fxscreener [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --help, -h           Show this help message");
    println!("    --version, -V        Show the version and exit");
    println!("    --port <PORT>        Override the listening port (default: 3000, or PORT env)");
    println!("    --host <HOST>        Override the bind address (default: 0.0.0.0, or HOST env)");
    println!("    --quiet              Suppress info-level log output");
    println!("    --verbose            Enable verbose log output");
    println!();
    println!("DEBUG OPTIONS:");
    println!("    --debug-api          Log upstream HTTP request details");
    println!("    --debug-cache        Log cache hits, expiries and refresh details");
    println!("    --debug-signals      Log signal derivation details");
    println!("    --debug-system       Log lifecycle details");
    println!("    --debug-webserver    Log HTTP request handling details");
    println!();
    println!("ENVIRONMENT:");
    println!("    ALPHA_KEY            Alpha Vantage API key (without it, every upstream");
    println!("                         fetch fails and pairs are omitted from responses)");
    println!("    PORT                 Listening port (default: 3000)");
    println!("    HOST                 Bind address (default: 0.0.0.0)");
    println!();
    println!("EXAMPLES:");
    println!("    fxscreener");
    println!("    fxscreener --port 8080");
    println!("    fxscreener --debug-cache --debug-api");
}

// ============================================================================
// COMMON PATTERNS
// ============================================================================

pub mod patterns {
    use super::has_arg;

    pub fn is_help_requested() -> bool {
        has_arg("--help") || has_arg("-h")
    }

    pub fn is_version_requested() -> bool {
        has_arg("--version") || has_arg("-V")
    }

    pub fn is_quiet_mode() -> bool {
        has_arg("--quiet")
    }

    pub fn is_verbose_mode() -> bool {
        has_arg("--verbose")
    }
}

// Tests across the crate mutate the shared argument store; they all take
// this lock first so parallel test threads cannot interleave.
#[cfg(test)]
pub(crate) static TEST_ARGS_LOCK: Mutex<()> = Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    fn lock<'a>() -> std::sync::MutexGuard<'a, ()> {
        TEST_ARGS_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_args(args: &[&str]) {
        let mut full = vec!["fxscreener".to_string()];
        full.extend(args.iter().map(|s| s.to_string()));
        set_cmd_args(full);
    }

    #[test]
    fn test_has_arg_and_get_arg_value() {
        let _guard = lock();
        with_args(&["--port", "8080", "--quiet"]);

        assert!(has_arg("--quiet"));
        assert!(!has_arg("--verbose"));
        assert_eq!(get_arg_value("--port"), Some("8080".to_string()));
        assert_eq!(get_arg_value("--host"), None);

        with_args(&[]);
    }

    #[test]
    fn test_flag_value_missing_when_last_argument() {
        let _guard = lock();
        with_args(&["--port"]);

        assert!(has_arg("--port"));
        assert_eq!(get_arg_value("--port"), None);
        assert!(validate_port_argument().is_err());

        with_args(&[]);
    }

    #[test]
    fn test_debug_mode_detection() {
        let _guard = lock();
        with_args(&["--debug-api", "--debug-cache"]);

        assert!(is_debug_api_enabled());
        assert!(is_debug_cache_enabled());
        assert!(!is_debug_signals_enabled());
        assert!(is_any_debug_enabled());
        assert_eq!(get_enabled_debug_modes(), vec!["api", "cache"]);

        with_args(&[]);
        assert!(!is_any_debug_enabled());
    }

    #[test]
    fn test_port_override_parsing() {
        let _guard = lock();

        with_args(&["--port", "8080"]);
        assert!(validate_port_argument().is_ok());
        assert_eq!(get_port_override(), Some(8080));

        with_args(&["--port", "notaport"]);
        assert!(validate_port_argument().is_err());
        assert_eq!(get_port_override(), None);

        with_args(&["--port", "0"]);
        assert!(validate_port_argument().is_err());
        assert_eq!(get_port_override(), None);

        with_args(&[]);
        assert!(validate_port_argument().is_ok());
        assert_eq!(get_port_override(), None);
    }

    #[test]
    fn test_host_override_parsing() {
        let _guard = lock();

        with_args(&["--host", "127.0.0.1"]);
        assert!(validate_host_argument().is_ok());
        assert_eq!(get_host_override(), Some("127.0.0.1".to_string()));

        // A following flag swallowed as the value is rejected
        with_args(&["--host", "--quiet"]);
        assert!(validate_host_argument().is_err());
        assert_eq!(get_host_override(), None);

        with_args(&[]);
    }

    #[test]
    fn test_privileged_port_boundary() {
        assert!(is_privileged_port(80));
        assert!(is_privileged_port(1023));
        assert!(!is_privileged_port(1024));
        assert!(!is_privileged_port(3000));
    }

    #[test]
    fn test_help_pattern() {
        let _guard = lock();

        with_args(&["--help"]);
        assert!(patterns::is_help_requested());

        with_args(&["-h"]);
        assert!(patterns::is_help_requested());

        with_args(&["--version"]);
        assert!(patterns::is_version_requested());
        assert!(!patterns::is_help_requested());

        with_args(&[]);
        assert!(!patterns::is_help_requested());
        assert!(!patterns::is_version_requested());
    }
}

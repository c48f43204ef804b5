//! Structured logging for FxScreener
//!
//! This module provides a clean, ergonomic logging API with:
//! - Automatic debug mode filtering from command-line arguments
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via --debug-<module> flags
//! - Colored, aligned console output
//!
//! ## Usage
//!
//! ```rust
//! use fxscreener::logger::{self, LogTag};
//!
//! // Level-specific functions
//! logger::error(LogTag::Api, "Upstream request failed");
//! logger::warning(LogTag::Config, "ALPHA_KEY is not set");
//! logger::info(LogTag::WebServer, "Listening on 0.0.0.0:3000");
//! logger::debug(LogTag::Cache, "Snapshot age: 42s"); // Only if --debug-cache
//! ```
//!
//! Filtering reads the command-line argument store directly, so there is no
//! init step: the first log call is already filtered correctly.

mod core;
mod format;
mod levels;
mod special;
mod tags;

// Re-export public types
pub use levels::LogLevel;
pub use special::log_refresh_summary;
pub use tags::LogTag;

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (always shown, needs attention but not critical)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations, suppressed by --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (detailed diagnostics)
///
/// Debug logs are ONLY shown when the --debug-<module> flag matching the tag
/// is provided, e.g. --debug-api for `LogTag::Api`.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (very detailed tracing, requires --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}

/// Action-style log line with a custom type column, e.g.
/// `log(LogTag::Cache, "CACHE_HIT", "age 12s")`.
///
/// Always printed — callers gate these behind the matching
/// `arguments::is_debug_*_enabled()` check.
pub fn log(tag: LogTag, log_type: &str, message: &str) {
    format::format_and_log(tag, log_type, message);
}

/// Core logging implementation with automatic filtering
///
/// Decides whether a message is displayed based on its level, its tag and
/// the command-line flags, then delegates formatting and output.

use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments::{self, patterns};

/// Check if a log message should be displayed
///
/// Filtering rules:
/// 1. Errors and warnings are always shown
/// 2. Info is suppressed under --quiet
/// 3. Debug level requires the --debug-<module> flag for that tag
/// 4. Verbose level requires the --verbose flag
pub fn should_log(tag: LogTag, level: LogLevel) -> bool {
    match level {
        LogLevel::Error | LogLevel::Warning => true,
        LogLevel::Info => !patterns::is_quiet_mode(),
        LogLevel::Debug => arguments::is_debug_enabled_for_key(tag.to_debug_key()),
        LogLevel::Verbose => patterns::is_verbose_mode(),
    }
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arguments::{set_cmd_args, TEST_ARGS_LOCK};

    fn lock<'a>() -> std::sync::MutexGuard<'a, ()> {
        TEST_ARGS_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_errors_and_warnings_always_shown() {
        let _guard = lock();
        set_cmd_args(vec!["fxscreener".to_string(), "--quiet".to_string()]);
        assert!(should_log(LogTag::Api, LogLevel::Error));
        assert!(should_log(LogTag::Api, LogLevel::Warning));
        set_cmd_args(vec!["fxscreener".to_string()]);
    }

    #[test]
    fn test_quiet_suppresses_info() {
        let _guard = lock();
        set_cmd_args(vec!["fxscreener".to_string()]);
        assert!(should_log(LogTag::System, LogLevel::Info));

        set_cmd_args(vec!["fxscreener".to_string(), "--quiet".to_string()]);
        assert!(!should_log(LogTag::System, LogLevel::Info));
        set_cmd_args(vec!["fxscreener".to_string()]);
    }

    #[test]
    fn test_debug_requires_matching_flag() {
        let _guard = lock();
        set_cmd_args(vec!["fxscreener".to_string()]);
        assert!(!should_log(LogTag::Cache, LogLevel::Debug));

        set_cmd_args(vec!["fxscreener".to_string(), "--debug-cache".to_string()]);
        assert!(should_log(LogTag::Cache, LogLevel::Debug));
        assert!(!should_log(LogTag::Api, LogLevel::Debug));
        set_cmd_args(vec!["fxscreener".to_string()]);
    }

    #[test]
    fn test_verbose_requires_verbose_flag() {
        let _guard = lock();
        set_cmd_args(vec!["fxscreener".to_string()]);
        assert!(!should_log(LogTag::Api, LogLevel::Verbose));

        set_cmd_args(vec!["fxscreener".to_string(), "--verbose".to_string()]);
        assert!(should_log(LogTag::Api, LogLevel::Verbose));
        set_cmd_args(vec!["fxscreener".to_string()]);
    }
}

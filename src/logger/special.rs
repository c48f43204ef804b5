/// Special-purpose formatted log output
///
/// Pre-formatted, colorized log lines for recurring operational events.

use super::tags::LogTag;
use colored::*;

/// Log one summary line for a completed cache refresh.
///
/// Success and failure counts are colorized so a degraded upstream stands
/// out when scanning the console. Individual pair failures stay behind
/// --debug-cache; this line is the only default-level trace of a refresh.
pub fn log_refresh_summary(fetched: usize, failed: usize, elapsed_ms: u128) {
    let fetched_str = if fetched > 0 {
        fetched.to_string().bright_green().bold()
    } else {
        fetched.to_string().bright_red().bold()
    };
    let failed_str = if failed > 0 {
        failed.to_string().bright_red().bold()
    } else {
        failed.to_string().white()
    };

    let message = format!(
        "Refreshed {} pairs in {}ms ({} ok, {} failed)",
        fetched + failed,
        elapsed_ms,
        fetched_str,
        failed_str
    );

    super::info(LogTag::Cache, &message);
}

use fxscreener::{
    arguments::{patterns, print_debug_info, print_help},
    logger::{self, LogTag},
};

/// Main entry point for FxScreener
///
/// Handles --help before anything else, then runs the service until a
/// shutdown signal arrives. The process exits non-zero only on startup
/// failures; upstream trouble at runtime is absorbed per-pair and never
/// kills the server.
#[tokio::main]
async fn main() {
    // Check for help/version requests first (before any other processing)
    if patterns::is_help_requested() {
        print_help();
        std::process::exit(0);
    }
    if patterns::is_version_requested() {
        println!("fxscreener {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    logger::info(LogTag::System, "🚀 FxScreener starting up...");
    print_debug_info();

    match fxscreener::run::start().await {
        Ok(_) => {
            logger::info(LogTag::System, "✅ FxScreener stopped");
        }
        Err(e) => {
            logger::error(LogTag::System, &format!("❌ FxScreener failed: {:#}", e));
            std::process::exit(1);
        }
    }
}

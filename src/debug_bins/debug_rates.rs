use clap::Parser;
use fxscreener::apis::alphavantage::AlphaVantageClient;
use fxscreener::pairs::CONFIGURED_PAIRS;
use std::error::Error;

#[derive(Parser)]
#[command(name = "debug_rates")]
#[command(about = "Debug tool for the Alpha Vantage exchange rate API", long_about = None)]
struct Args {
    /// Fetch a single pair (e.g. EURUSD or EUR/USD) instead of the full watch list
    #[arg(short, long)]
    pair: Option<String>,

    /// API key (falls back to the ALPHA_KEY environment variable)
    #[arg(short, long)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("Alpha Vantage Exchange Rate Debug Tool\n");
    println!("{}", "=".repeat(80));

    let api_key = args
        .api_key
        .or_else(|| std::env::var("ALPHA_KEY").ok())
        .unwrap_or_default();
    if api_key.is_empty() {
        println!("\nWarning: no API key set (use --api-key or ALPHA_KEY), expect failures");
    }

    let client = AlphaVantageClient::new(api_key).expect("Failed to create Alpha Vantage client");

    match &args.pair {
        Some(raw) => {
            let symbol = raw.to_uppercase().replace('/', "");
            if symbol.len() != 6 || !symbol.chars().all(|c| c.is_ascii_alphabetic()) {
                println!("Invalid pair '{}', expected e.g. EURUSD", raw);
                std::process::exit(1);
            }
            let (from, to) = (&symbol[..3], &symbol[3..]);

            println!("\n[TEST] Fetching single pair {}/{}\n", from, to);
            println!("{}", "=".repeat(80));

            match client.fetch_exchange_rate(from, to).await {
                Ok(rate) => println!("{}/{} = {}", from, to, rate),
                Err(e) => println!("Failed to fetch {}/{}: {}", from, to, e),
            }
        }
        None => {
            println!(
                "\n[TEST] Fetching all {} configured pairs\n",
                CONFIGURED_PAIRS.len()
            );
            println!("{}", "=".repeat(80));

            let mut fetched = 0;
            let mut failed = 0;
            for pair in CONFIGURED_PAIRS.iter() {
                let (from, to) = pair.codes();
                match client.fetch_exchange_rate(&from, &to).await {
                    Ok(rate) => {
                        fetched += 1;
                        println!("{:<8} {}", pair.canonical(), rate);
                    }
                    Err(e) => {
                        failed += 1;
                        println!("{:<8} failed: {}", pair.canonical(), e);
                    }
                }
            }

            println!("\nFetched {} pairs, {} failed", fetched, failed);
        }
    }

    // Print stats
    println!("\n{}", "=".repeat(80));
    let stats = client.get_stats().await;
    println!("\n[API STATS]");
    println!("Total Requests: {}", stats.total_requests);
    println!("Successful: {}", stats.successful_requests);
    println!("Failed: {}", stats.failed_requests);
    println!("Avg Response Time: {:.2}ms", stats.average_response_time_ms);

    println!("\n{}", "=".repeat(80));
    println!("\nTest completed!");

    Ok(())
}

use clap::Parser;
use fxscreener::signals::derive_signal;
use std::error::Error;

#[derive(Parser)]
#[command(name = "debug_signals")]
#[command(about = "Debug tool for signal derivation", long_about = None)]
struct Args {
    /// Exchange rate to derive a signal from
    #[arg(short, long)]
    rate: f64,

    /// Print the serialized wire payload as well
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    println!("Signal Derivation Debug Tool\n");
    println!("{}", "=".repeat(80));

    println!("\n[TEST] Deriving signal for rate {}\n", args.rate);
    println!("{}", "=".repeat(80));

    let signal = derive_signal(args.rate);

    println!("rate % 2.0 = {}", args.rate % 2.0);
    println!("Short: {} (SL {}, TP {})", signal.short_signal, signal.short_sl, signal.short_tp);
    println!("Long:  {} (SL {}, TP {})", signal.long_signal, signal.long_sl, signal.long_tp);
    println!("Reason: {}", signal.reason);

    if args.verbose {
        println!("\n[WIRE PAYLOAD]");
        println!("{}", serde_json::to_string_pretty(&signal)?);
    }

    println!("\n{}", "=".repeat(80));
    println!("\nTest completed!");

    Ok(())
}

use clap::Parser;
use packbench::{harness, BenchConfig, RawMode};

#[derive(Parser)]
#[command(
    name = "compare_encodings",
    about = "Compare JSON-wrapped message batches against raw packed buffers"
)]
struct Cli {
    /// Number of trials, each with a fresh random batch.
    #[arg(long, default_value_t = 1000)]
    trials: usize,

    /// Messages per batch.
    #[arg(long, default_value_t = 800)]
    messages: usize,

    /// Smallest message length in bytes, inclusive.
    #[arg(long, default_value_t = 259)]
    min_len: usize,

    /// Largest message length in bytes, inclusive.
    #[arg(long, default_value_t = 300)]
    max_len: usize,

    /// Rng seed for reproducible runs; seeds from OS entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Also time unpacking the raw buffer, making the raw path symmetric
    /// with the JSON encode+decode measurement.
    #[arg(long)]
    raw_decode: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = BenchConfig {
        trials: cli.trials,
        messages: cli.messages,
        min_len: cli.min_len,
        max_len: cli.max_len,
        seed: cli.seed,
        raw_mode: if cli.raw_decode {
            RawMode::RoundTrip
        } else {
            RawMode::EncodeOnly
        },
    };

    println!(
        "Starting {} trials ({} messages of {}-{} bytes per batch)...",
        config.trials, config.messages, config.min_len, config.max_len
    );

    let report = harness::run(&config)?;

    println!(
        "Average timing for JSON encode: {:.4} ms",
        report.json_encode().mean_ms
    );
    println!(
        "Average timing for raw pack:    {:.4} ms",
        report.raw_encode().mean_ms
    );
    if cli.raw_decode {
        println!(
            "Average timing for raw unpack:  {:.4} ms",
            report.raw_decode().mean_ms
        );
    }
    println!(
        "Average timing for JSON decode: {:.4} ms",
        report.json_decode().mean_ms
    );
    println!("===================================================");
    println!(
        "Max timing for JSON encode: {:.4} ms",
        report.json_encode().max_ms
    );
    println!(
        "Max timing for raw pack:    {:.4} ms",
        report.raw_encode().max_ms
    );
    if cli.raw_decode {
        println!(
            "Max timing for raw unpack:  {:.4} ms",
            report.raw_decode().max_ms
        );
    }
    println!(
        "Max timing for JSON decode: {:.4} ms",
        report.json_decode().max_ms
    );

    Ok(())
}

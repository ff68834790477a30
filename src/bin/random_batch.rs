//! Random origin/destination batch against a route computation plugin.
//!
//! Prints one line per trial, the run totals, then every
//! `(algorithm time, distance)` pair as tab separated values.
//!
//! Run: `cargo run --release --bin random_batch -- --dbstring "dbname=tempus_test_db"`

use clap::Parser;
use itinerary_bench::bench::DEFAULT_DBSTRING;
use itinerary_bench::client::DEFAULT_SERVICE_URL;
use itinerary_bench::{source, Benchmark, Config, HttpClient, Trial};
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about = "Itinerary benchmark batch", long_about = None)]
struct Cli {
    /// The database connection string, or `file:<path>` for a point file
    #[arg(short, long, default_value = DEFAULT_DBSTRING)]
    dbstring: String,
    /// The route computation service URL
    #[arg(short, long, default_value = DEFAULT_SERVICE_URL)]
    wpsurl: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = HttpClient::new(cli.wpsurl)?;
    let mut nodes = source::open(&cli.dbstring)?;

    let mut benchmark = Benchmark::initialize(Config::default(), nodes.as_mut(), client)?;

    let summary = benchmark.run_with(|i, trial| {
        println!(
            "i={}, t={:.6}, r={:.6}",
            i, trial.algorithm_time, trial.roundtrip_time
        );
    })?;

    println!(
        "{:.6} {:.6}",
        summary.total_algorithm_time, summary.total_roundtrip_time
    );

    println!("time_s\tdistance");
    for (time, distance) in benchmark.recorder().pairs() {
        println!("{time}\t{distance}");
    }

    Ok(())
}

/// Progress line printed once a trial is recorded.
fn trial_line(index: usize, trial: &Trial) -> String {
    format!(
        "i={}, t={:.6}, r={:.6}",
        index, trial.algorithm_time, trial.roundtrip_time
    )
}

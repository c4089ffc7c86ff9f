mod arg_parser;

use arg_parser::ArgParser;
use vollib::types::BatchSpec;
use vollib::{joblist, spawn_status_monitor, Dispatcher, RunRegistry};

use clap::Parser;
use std::error;
use std::thread;
use std::time::Instant;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn error::Error>> {
    tracing_subscriber::fmt::init();
    let args = ArgParser::parse();

    // fatal input failures: abort before any job starts
    tokio::fs::create_dir_all(&args.output_dir).await?;
    let contents = tokio::fs::read_to_string(&args.modules).await?;
    let modules = joblist::parse(&contents);

    let limit = args.parallel.unwrap_or_else(default_parallelism).max(1);
    info!("using up to {} concurrent modules", limit);

    let registry = RunRegistry::spawn();
    spawn_status_monitor(registry.clone());

    let spec = BatchSpec {
        tool: args.tool,
        image: args.image,
        output_dir: args.output_dir,
    };
    let dispatcher = Dispatcher::new(spec, limit, registry);

    let total = Instant::now();
    dispatcher.run_all(modules).await;
    println!(
        "All modules completed in {:.2} seconds.",
        total.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Available parallelism minus one, leaving headroom for the monitor and the
/// tool's own bookkeeping. Floor of one.
fn default_parallelism() -> usize {
    thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
        .saturating_sub(1)
        .max(1)
}

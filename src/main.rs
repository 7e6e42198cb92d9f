use clap::Parser;

use coderunner_bench::{cli::BenchArgs, config::BenchmarkConfig, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args = BenchArgs::parse();
    let config = BenchmarkConfig::from(&args);

    if !args.json {
        println!("Starting Java benchmark against {}", config.url);
        println!(" concurrency: {}", config.concurrency);
        println!(" requests: {}", config.total_requests);
        println!();
    }

    let report = coderunner_bench::run(&config).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }

    Ok(())
}

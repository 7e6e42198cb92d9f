use clap::Parser;

use coderunner_bench::{
    cli::ReproArgs, core::pipeline::reproducing::reproduce, http::client::HttpExecutionClient,
    logging,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let args = ReproArgs::parse();
    let client = HttpExecutionClient::new(&args.url)?;
    tracing::info!(url = client.url(), payload = ?args.payload, "Sending request");

    match reproduce(&client, &args.payload.request()).await {
        Ok(reproduction) => print!("{}", reproduction),
        Err(err) => println!("Error: {}", err),
    }

    Ok(())
}

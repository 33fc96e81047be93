use anyhow::Result;
use clap::Parser;
use expense_tracker::cli::Cli;
use expense_tracker::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_json);
    cli.run().await
}

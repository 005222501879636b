use clap::Parser;
use pawtrack_result::Result;

mod commands;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging and environment
    pawtrack_config::configure!();

    Cli::parse().run().await
}

//! soarep CLI
//!
//! Command-line interface for querying an SOA repository server.

#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use soarep_cli::cli::Cli;
use soarep_cli::{commands, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let output = commands::run(cli).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

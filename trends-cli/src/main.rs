//! Binary crate for the `weather-trends` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive prompts
//! - Human-friendly output formatting
//! - Sequencing fetch, report, chart, export, and annual summary

use clap::Parser;

mod cli;
mod report;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cmd = cli::Cli::parse();
    cmd.run().await
}

//! WPG CLI - population and GDP indicators for a fixed set of countries.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wpg-cli",
    version,
    about = "World population & GDP indicators toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wpg_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    wpg_cmd::run(cli.command).await
}

//! EUC CLI - serve the globe and inspect supply-chain disruption scenarios.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "euc-cli",
    version,
    about = "EU critical-material supply chain toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: euc_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    euc_cmd::run(cli.command).await
}

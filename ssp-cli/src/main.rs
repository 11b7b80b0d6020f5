//! Sail planner CLI - terminal briefings from Open-Meteo marine forecasts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ssp-cli",
    version,
    about = "Strategic sail planner: marine forecast briefings"
)]
struct Cli {
    #[command(subcommand)]
    command: ssp_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    ssp_cmd::run(cli.command).await
}

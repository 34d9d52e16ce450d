//! THM CLI - Command line tool for rendering daily temperature heatmaps.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "thm-cli",
    version,
    about = "Daily temperature heatmap toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: thm_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    thm_cmd::run(cli.command).await
}

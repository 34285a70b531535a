// rowgrade/src/main.rs

mod cli;
mod commands;
mod render;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging (Tracing) on stderr so `check --json` stays parseable
    // RUST_LOG=debug rowgrade validate ... for details
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            project_dir,
            select,
        } => commands::validate::execute(project_dir, select).await,
        Commands::Check {
            rulebook,
            input,
            output,
            json,
        } => commands::check::execute(rulebook, input, output, json).await,
        Commands::Rules { rulebook } => commands::rules::execute(rulebook),
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}

//! Study planner CLI
//!
//! Command-line front end for generating and tracking study plans.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use studyplan_core::SessionBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        api_base,
        config,
        no_color,
        command,
    } = Args::parse();

    // Building the session runs the startup connectivity probe.
    let session = SessionBuilder::new()
        .with_config_path(config)
        .with_base_url(api_base)
        .build()
        .await
        .context("Failed to initialize session")?;

    info!("Study planner started against {}", session.config().base_url);

    let cli = Cli::new(session, TerminalRenderer::new(!no_color));
    match command {
        Some(Commands::Status) | None => {
            cli.show_status().await;
            Ok(())
        }
        Some(Commands::Generate(args)) => cli.generate(&args.into()).await,
        Some(Commands::Study(args)) => cli.study(&args.into()).await,
    }
}

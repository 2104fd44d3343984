//! sous command-line application.

mod args;
mod cli;
mod cook;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SousMcpServer};
use renderer::TerminalRenderer;
use sous_core::{params::ListRecipes, CookbookBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        settings_file,
        no_color,
        command,
    } = Args::parse();

    let cookbook = CookbookBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize cookbook")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("sous started");

    let cli = Cli::new(cookbook.clone(), renderer, settings_file);

    match command {
        Some(Check(args)) => cli.check(&args),
        Some(Extract(args)) => cli.extract(&args),
        Some(Save(args)) => cli.save(&args).await,
        Some(List(args)) => cli.list(&args.into()).await,
        Some(Show(args)) => cli.show(&args.into()).await,
        Some(Delete(args)) => cli.delete(&args.into()).await,
        Some(Cook(args)) => cli.cook(&args).await,
        Some(Settings(args)) => cli.settings(&args),
        Some(Serve) => {
            info!("Starting sous MCP server");
            run_stdio_server(SousMcpServer::new(cookbook))
                .await
                .context("MCP server failed")
        }
        None => cli.list(&ListRecipes::default()).await,
    }
}

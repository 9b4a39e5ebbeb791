//! Wanderlust CLI Application
//!
//! Command-line interface for the wanderlust travel planner.

mod args;
mod cli;
mod commands;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wanderlust_core::{params, store::Latency, TripPlannerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        fixtures_dir,
        instant,
        no_color,
        command,
    } = Args::parse();

    let latency = if instant {
        Latency::None
    } else {
        Latency::Simulated
    };

    let planner = TripPlannerBuilder::new()
        .with_database_path(database_file)
        .with_fixtures_dir(fixtures_dir)
        .with_latency(latency)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let cli = Cli::new(planner, TerminalRenderer::new(!no_color));

    info!("Wanderlust started");

    match command {
        Some(Discover(args)) => cli.discover(&args.into()).await,
        Some(Destination { command }) => cli.handle_destination_command(command).await,
        Some(Trip { command }) => cli.handle_trip_command(command).await,
        Some(Saved { command }) => cli.handle_saved_command(command).await,
        Some(Recommendation { command }) => cli.handle_recommendation_command(command).await,
        Some(Interests) => cli.list_interests(),
        None => cli.discover(&params::Discover::default()).await,
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{
    DestinationCommands, DiscoverArgs, RecommendationCommands, SavedCommands, TripCommands,
};

/// Wanderlust: find destinations that fit your interests and plan a trip
///
/// Destinations are ranked by how many of your interests they offer. Each
/// destination comes with local tips, a generated 3-day itinerary and a
/// packing list. Saved destinations are kept between runs; everything else
/// starts from the bundled fixtures on every run.
#[derive(Parser)]
#[command(version, about, name = "wl")]
pub struct Args {
    /// Path to the SQLite database file holding saved destinations. Defaults
    /// to $XDG_DATA_HOME/wanderlust/wanderlust.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Load destinations, itineraries and recommendations from this directory
    /// instead of the bundled fixtures
    #[arg(long, global = true)]
    pub fixtures_dir: Option<PathBuf>,

    /// Skip the simulated network latency
    #[arg(long, global = true)]
    pub instant: bool,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wanderlust CLI
///
/// Running `wl` without a command shows the discover view unfiltered.
#[derive(Subcommand)]
pub enum Commands {
    /// Browse destinations ranked by your interests
    #[command(alias = "find")]
    Discover(DiscoverArgs),
    /// Manage destinations
    #[command(alias = "d")]
    Destination {
        #[command(subcommand)]
        command: DestinationCommands,
    },
    /// Plan and manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Manage saved destinations
    #[command(alias = "s")]
    Saved {
        #[command(subcommand)]
        command: SavedCommands,
    },
    /// Manage local recommendations
    #[command(aliases = ["r", "tips"])]
    Recommendation {
        #[command(subcommand)]
        command: RecommendationCommands,
    },
    /// List the interest tags you can pick from
    Interests,
}

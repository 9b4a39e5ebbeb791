//! Subcommand and argument definitions using clap
//!
//! Argument structs carry the clap derives and convert into the core
//! parameter types, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → TripPlanner
//! ```

use clap::{Args, Subcommand, ValueEnum};
use wanderlust_core::{
    display::DetailTab,
    models::{
        DestinationPatch, InterestTag, NewDestination, NewRecommendation, RecommendationPatch,
    },
    params::{DeleteTrip, Discover, Id, ListRecommendations, QuickTrip},
};

/// Interest tags accepted on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InterestArg {
    Hiking,
    Cultural,
    Beaches,
    Wildlife,
    History,
    Adventure,
}

impl From<InterestArg> for InterestTag {
    fn from(val: InterestArg) -> Self {
        match val {
            InterestArg::Hiking => InterestTag::Hiking,
            InterestArg::Cultural => InterestTag::Cultural,
            InterestArg::Beaches => InterestTag::Beaches,
            InterestArg::Wildlife => InterestTag::Wildlife,
            InterestArg::History => InterestTag::History,
            InterestArg::Adventure => InterestTag::Adventure,
        }
    }
}

fn interest_strings(interests: Vec<InterestArg>) -> Vec<String> {
    interests
        .into_iter()
        .map(|arg| InterestTag::from(arg).as_str().to_string())
        .collect()
}

/// Tabs of the destination detail view
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Overview,
    Itinerary,
    #[value(alias = "tips")]
    Recommendations,
    Packing,
}

impl From<TabArg> for DetailTab {
    fn from(val: TabArg) -> Self {
        match val {
            TabArg::Overview => DetailTab::Overview,
            TabArg::Itinerary => DetailTab::Itinerary,
            TabArg::Recommendations => DetailTab::Recommendations,
            TabArg::Packing => DetailTab::Packing,
        }
    }
}

// ============================================================================
// Discover
// ============================================================================

/// Browse destinations ranked by your interests
#[derive(Args, Default)]
pub struct DiscoverArgs {
    /// Only destinations whose name or country contains this text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Interests to match, in order of preference (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub interests: Vec<InterestArg>,
}

impl From<DiscoverArgs> for Discover {
    fn from(val: DiscoverArgs) -> Self {
        Discover {
            search: val.search,
            interests: interest_strings(val.interests),
        }
    }
}

// ============================================================================
// Destinations
// ============================================================================

/// Show a destination with its itinerary, tips and packing list
#[derive(Args)]
pub struct ShowDestinationArgs {
    #[arg(help = "Unique identifier of the destination")]
    pub id: String,
    /// Show only one tab of the detail view
    #[arg(short, long)]
    pub tab: Option<TabArg>,
    /// Mark packing items as packed, by 1-based number (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub pack: Vec<usize>,
}

/// Add a destination
#[derive(Args)]
pub struct CreateDestinationArgs {
    /// Name of the destination
    pub name: String,
    /// Country it is in
    pub country: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// URI of the hero image
    #[arg(long, default_value = "")]
    pub hero_image: String,
    #[arg(long, default_value = "Moderate")]
    pub difficulty: String,
    /// Best months to visit (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub best_months: Vec<String>,
    /// Interest tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub interests: Vec<InterestArg>,
}

impl From<CreateDestinationArgs> for NewDestination {
    fn from(val: CreateDestinationArgs) -> Self {
        NewDestination {
            name: val.name,
            country: val.country,
            description: val.description,
            hero_image: val.hero_image,
            difficulty: val.difficulty,
            best_months: val.best_months,
            interests: interest_strings(val.interests),
        }
    }
}

/// Change fields of a destination
#[derive(Args)]
pub struct UpdateDestinationArgs {
    #[arg(help = "Unique identifier of the destination to update")]
    pub id: String,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub country: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(long)]
    pub hero_image: Option<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
    /// Replaces the best months (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub best_months: Option<Vec<String>>,
    /// Replaces the interest tags (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub interests: Option<Vec<InterestArg>>,
}

impl UpdateDestinationArgs {
    pub fn into_params(self) -> (Id, DestinationPatch) {
        let patch = DestinationPatch {
            name: self.name,
            country: self.country,
            description: self.description,
            hero_image: self.hero_image,
            difficulty: self.difficulty,
            best_months: self.best_months,
            interests: self.interests.map(interest_strings),
        };
        (Id::new(self.id), patch)
    }
}

/// Identifies a single record
#[derive(Args)]
pub struct IdArgs {
    #[arg(help = "Unique identifier")]
    pub id: String,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum DestinationCommands {
    /// List all destinations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a destination in detail
    #[command(alias = "s")]
    Show(ShowDestinationArgs),
    /// Add a destination
    #[command(alias = "c")]
    Create(CreateDestinationArgs),
    /// Change fields of a destination
    #[command(alias = "u")]
    Update(UpdateDestinationArgs),
    /// Remove a destination
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

// ============================================================================
// Trips
// ============================================================================

/// Plan a quick trip typed by your interests
#[derive(Args)]
pub struct QuickTripArgs {
    #[arg(help = "Unique identifier of the destination")]
    pub destination_id: String,
    /// The first two interests type the main activities (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub interests: Vec<InterestArg>,
}

impl From<QuickTripArgs> for QuickTrip {
    fn from(val: QuickTripArgs) -> Self {
        QuickTrip {
            destination_id: val.destination_id,
            interests: interest_strings(val.interests),
        }
    }
}

/// Delete a trip permanently
#[derive(Args)]
pub struct DeleteTripArgs {
    #[arg(help = "Unique identifier of the trip to permanently delete")]
    pub id: String,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteTripArgs> for DeleteTrip {
    fn from(val: DeleteTripArgs) -> Self {
        DeleteTrip {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// List planned trips
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a trip day by day
    #[command(alias = "s")]
    Show(IdArgs),
    /// Plan the generated 3-day trip for a destination
    #[command(alias = "c")]
    Create(IdArgs),
    /// Plan a quick trip typed by your interests
    #[command(alias = "q")]
    Quick(QuickTripArgs),
    /// Delete a trip permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteTripArgs),
}

// ============================================================================
// Saved destinations
// ============================================================================

#[derive(Subcommand)]
pub enum SavedCommands {
    /// List saved destinations
    #[command(aliases = ["l", "ls"])]
    List,
    /// Save a destination
    #[command(alias = "a")]
    Add(IdArgs),
    /// Remove a destination from saved
    #[command(aliases = ["r", "rm"])]
    Remove(IdArgs),
    /// Save a random destination you have not saved yet
    Random,
}

// ============================================================================
// Recommendations
// ============================================================================

/// List local recommendations
#[derive(Args)]
pub struct ListRecommendationsArgs {
    /// Only tips for this destination
    #[arg(short, long)]
    pub destination: Option<String>,
}

impl From<ListRecommendationsArgs> for ListRecommendations {
    fn from(val: ListRecommendationsArgs) -> Self {
        ListRecommendations {
            destination_id: val.destination,
        }
    }
}

/// Add a local recommendation
#[derive(Args)]
pub struct CreateRecommendationArgs {
    #[arg(help = "Destination the tip belongs to")]
    pub destination_id: String,
    /// Name of the place
    pub name: String,
    #[arg(short, long, default_value = "")]
    pub description: String,
    /// Rating out of five
    #[arg(short, long, default_value_t = 0.0)]
    pub rating: f32,
    /// Kind of place (restaurant, viewpoint, ...)
    #[arg(short = 't', long = "type", default_value = "attraction")]
    pub kind: String,
}

impl From<CreateRecommendationArgs> for NewRecommendation {
    fn from(val: CreateRecommendationArgs) -> Self {
        NewRecommendation {
            destination_id: val.destination_id,
            name: val.name,
            description: val.description,
            rating: val.rating,
            kind: val.kind,
        }
    }
}

/// Change fields of a recommendation
#[derive(Args)]
pub struct UpdateRecommendationArgs {
    #[arg(help = "Unique identifier of the recommendation to update")]
    pub id: String,
    #[arg(long)]
    pub destination_id: Option<String>,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(short, long)]
    pub rating: Option<f32>,
    #[arg(short = 't', long = "type")]
    pub kind: Option<String>,
}

impl UpdateRecommendationArgs {
    pub fn into_params(self) -> (Id, RecommendationPatch) {
        let patch = RecommendationPatch {
            destination_id: self.destination_id,
            name: self.name,
            description: self.description,
            rating: self.rating,
            kind: self.kind,
        };
        (Id::new(self.id), patch)
    }
}

#[derive(Subcommand)]
pub enum RecommendationCommands {
    /// List local recommendations
    #[command(aliases = ["l", "ls"])]
    List(ListRecommendationsArgs),
    /// Show a recommendation
    #[command(alias = "s")]
    Show(IdArgs),
    /// Add a recommendation
    #[command(alias = "c")]
    Create(CreateRecommendationArgs),
    /// Change fields of a recommendation
    #[command(alias = "u")]
    Update(UpdateRecommendationArgs),
    /// Remove a recommendation
    #[command(aliases = ["d", "rm"])]
    Delete(IdArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_args_convert_in_order() {
        let params = Discover::from(DiscoverArgs {
            search: Some("italy".to_string()),
            interests: vec![InterestArg::Beaches, InterestArg::Hiking],
        });
        assert_eq!(params.interests, vec!["beaches", "hiking"]);
        assert_eq!(params.search.as_deref(), Some("italy"));
    }

    #[test]
    fn test_update_args_leave_unset_fields_alone() {
        let (id, patch) = UpdateDestinationArgs {
            id: "3".to_string(),
            name: None,
            country: None,
            description: None,
            hero_image: None,
            difficulty: Some("Hard".to_string()),
            best_months: None,
            interests: Some(vec![InterestArg::Wildlife]),
        }
        .into_params();

        assert_eq!(id.id, "3");
        assert_eq!(patch.difficulty.as_deref(), Some("Hard"));
        assert_eq!(patch.interests, Some(vec!["wildlife".to_string()]));
        assert!(patch.name.is_none());
    }
}

//! Parameter structures for planner operations.
//!
//! These structures are shared by every interface (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │   TripPlanner   │
//! │  (clap derives) │───▶│ (serde only)    │───▶│   handlers      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{matching::DiscoverQuery, models::InterestSelection};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: String,
}

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Parameters for the discover view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Discover {
    /// Substring of the destination name or country
    pub search: Option<String>,
    /// Selected interest tags, in the order they were picked
    pub interests: Vec<String>,
}

impl From<&Discover> for DiscoverQuery {
    fn from(params: &Discover) -> Self {
        DiscoverQuery {
            search: params.search.clone(),
            interests: params.interests.iter().collect(),
        }
    }
}

/// Parameters for the quick itinerary action.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickTrip {
    /// Destination to plan for
    pub destination_id: String,
    /// Selected interest tags; the first two type the main activities
    pub interests: Vec<String>,
}

impl QuickTrip {
    pub fn selection(&self) -> InterestSelection {
        self.interests.iter().collect()
    }
}

/// Parameters for deleting a trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteTrip {
    /// The ID of the itinerary to delete
    pub id: String,
    /// Must be true; deletion cannot be undone
    pub confirmed: bool,
}

/// Parameters for listing recommendations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRecommendations {
    /// Only tips for this destination
    pub destination_id: Option<String>,
}

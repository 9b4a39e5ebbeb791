//! Composite view types assembled from several records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Day, Destination, Itinerary, PackingChecklist, Recommendation};

/// A destination scored against the user's selected interests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationMatch {
    pub destination: Destination,
    /// Share of the selected interests the destination offers, 0..=100
    pub match_percentage: u8,
}

/// Everything the destination detail view shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DestinationDetail {
    pub destination: Destination,
    /// Local tips for this destination only
    pub recommendations: Vec<Recommendation>,
    /// Generated 3-day template
    pub itinerary: Vec<Day>,
    /// Generated packing list, all unchecked
    pub packing: PackingChecklist,
}

/// A stored trip joined with the destination it goes to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripSummary {
    /// Itinerary ID
    pub id: String,
    pub destination_id: String,
    pub destination_name: String,
    pub country: String,
    /// Number of planned days
    pub total_days: usize,
    /// Number of items on the packing list
    pub packing_items: usize,
    pub created: Timestamp,
}

impl TripSummary {
    /// Joins an itinerary with its destination.
    pub fn new(itinerary: &Itinerary, destination: &Destination) -> Self {
        Self {
            id: itinerary.id.clone(),
            destination_id: destination.id.clone(),
            destination_name: destination.name.clone(),
            country: destination.country.clone(),
            total_days: itinerary.days.len(),
            packing_items: itinerary.packing_list.len(),
            created: itinerary.created,
        }
    }
}

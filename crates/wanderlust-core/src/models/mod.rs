//! Data models for destinations, itineraries and recommendations.
//!
//! This module contains the records held by the fixture collections, the
//! drafts used to create them, the typed patches used to update them and a
//! few composite view types. Display implementations for these models are
//! located in [`crate::display::models`] to keep data and presentation apart.
//!
//! Records serialize with the camelCase field names used by the fixture
//! files (`heroImage`, `bestMonths`, `destinationId`, `packingList`), and
//! activity and recommendation kinds serialize as `type`.
//!
//! # Examples
//!
//! ```rust
//! use wanderlust_core::models::{Destination, InterestTag};
//!
//! let destination: Destination = serde_json::from_str(
//!     r#"{
//!         "id": "1",
//!         "name": "Dolomites",
//!         "country": "Italy",
//!         "description": "Jagged limestone peaks",
//!         "heroImage": "https://example.com/dolomites.jpg",
//!         "difficulty": "Moderate",
//!         "bestMonths": ["June", "July"],
//!         "interests": ["hiking", "adventure"]
//!     }"#,
//! )?;
//!
//! assert!(destination.has_interest("hiking"));
//! assert_eq!(
//!     destination.interest_tags(),
//!     vec![InterestTag::Hiking, InterestTag::Adventure]
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

pub mod destination;
pub mod interest;
pub mod itinerary;
pub mod packing;
pub mod patches;
pub mod recommendation;
pub mod summary;

#[cfg(test)]
mod tests;

pub use destination::{Destination, NewDestination};
pub use interest::{InterestSelection, InterestTag};
pub use itinerary::{Activity, Day, Itinerary, NewItinerary};
pub use packing::{PackingChecklist, PackingListItem};
pub use patches::{DestinationPatch, ItineraryPatch, RecommendationPatch};
pub use recommendation::{NewRecommendation, Recommendation};
pub use summary::{DestinationDetail, DestinationMatch, TripSummary};

//! In-memory record collections behind a uniform async CRUD interface.
//!
//! Every entity (destinations, itineraries, recommendations) is held in a
//! [`Repository`], seeded from the fixture snapshot at startup and mutated in
//! place. Nothing here is written back to disk; a new [`Repository`] always
//! starts from the snapshot it is given.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   TripPlanner   │    │   Repository<T> │    │  RwLock<Vec<T>> │
//! │   (handlers)    │───▶│ (latency + ids) │───▶│   (snapshot)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The [`Record`] trait ties each entity to its draft type (for `create`),
//! its patch type (for `update`) and its not-found error.

use jiff::Timestamp;

use crate::{
    error::TravelError,
    models::{
        Destination, DestinationPatch, Itinerary, ItineraryPatch, NewDestination, NewItinerary,
        NewRecommendation, Recommendation, RecommendationPatch,
    },
};

pub mod latency;
pub mod repository;


pub use latency::{Latency, Operation};
pub use repository::Repository;

/// A record type that can live in a [`Repository`].
pub trait Record: Clone + Send + Sync + 'static {
    /// Record without identity, accepted by `create`
    type Draft: Send;
    /// Typed partial update, accepted by `update`
    type Patch: Send;

    /// Entity name used in log lines.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Stamps a draft with its new identity.
    fn from_draft(draft: Self::Draft, id: String, created: Timestamp) -> Self;

    /// Merges the patch in, returning the names of the changed fields.
    fn apply(&mut self, patch: Self::Patch) -> Vec<String>;

    /// Error reported when no record has the given id.
    fn not_found(id: &str) -> TravelError;
}

impl Record for Destination {
    type Draft = NewDestination;
    type Patch = DestinationPatch;

    const KIND: &'static str = "destination";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(draft: NewDestination, id: String, created: Timestamp) -> Self {
        draft.into_record(id, created)
    }

    fn apply(&mut self, patch: DestinationPatch) -> Vec<String> {
        patch.apply(self)
    }

    fn not_found(id: &str) -> TravelError {
        TravelError::DestinationNotFound { id: id.to_string() }
    }
}

impl Record for Itinerary {
    type Draft = NewItinerary;
    type Patch = ItineraryPatch;

    const KIND: &'static str = "itinerary";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(draft: NewItinerary, id: String, created: Timestamp) -> Self {
        draft.into_record(id, created)
    }

    fn apply(&mut self, patch: ItineraryPatch) -> Vec<String> {
        patch.apply(self)
    }

    fn not_found(id: &str) -> TravelError {
        TravelError::ItineraryNotFound { id: id.to_string() }
    }
}

impl Record for Recommendation {
    type Draft = NewRecommendation;
    type Patch = RecommendationPatch;

    const KIND: &'static str = "recommendation";

    fn id(&self) -> &str {
        &self.id
    }

    fn from_draft(draft: NewRecommendation, id: String, created: Timestamp) -> Self {
        draft.into_record(id, created)
    }

    fn apply(&mut self, patch: RecommendationPatch) -> Vec<String> {
        patch.apply(self)
    }

    fn not_found(id: &str) -> TravelError {
        TravelError::RecommendationNotFound { id: id.to_string() }
    }
}

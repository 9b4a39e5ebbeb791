//! High-level planner API for destinations, trips and saved places.
//!
//! [`TripPlanner`] is the single entry point the interfaces talk to. It owns
//! one [`Repository`] per entity and the saved-destinations set, and exposes
//! one handler per view: discover, destination detail, trips and saved.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │     Storage     │
//! │ (view_handlers, │───▶│ (destination_,  │───▶│  (store/, db/,  │
//! │ saved_handlers) │    │  itinerary_ops) │    │     saved)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`TripPlanner`] instances
//! - [`destination_ops`]: CRUD over destinations
//! - [`itinerary_ops`]: CRUD over itineraries
//! - [`recommendation_ops`]: CRUD over recommendations
//! - [`view_handlers`]: Discover, detail and trip views
//! - [`saved_handlers`]: The saved-destinations view
//!
//! # Usage Examples
//!
//! ```rust
//! use wanderlust_core::{params::Discover, store::Latency, TripPlannerBuilder};
//! use std::sync::Arc;
//! use wanderlust_core::saved::MemoryKeyValueStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let planner = TripPlannerBuilder::new()
//!     .with_key_value_store(Arc::new(MemoryKeyValueStore::new()))
//!     .with_latency(Latency::None)
//!     .build()
//!     .await?;
//!
//! let matches = planner
//!     .discover(&Discover {
//!         search: None,
//!         interests: vec!["hiking".to_string()],
//!     })
//!     .await;
//! for found in &matches {
//!     println!("{} ({}%)", found.destination.name, found.match_percentage);
//! }
//! # Ok(())
//! # }
//! ```

use crate::{
    models::{Destination, Itinerary, Recommendation},
    saved::SavedDestinations,
    store::Repository,
};

pub mod builder;
pub mod destination_ops;
pub mod itinerary_ops;
pub mod recommendation_ops;
pub mod saved_handlers;
pub mod view_handlers;


pub use builder::TripPlannerBuilder;

/// Main planner interface for destinations, trips and saved places.
pub struct TripPlanner {
    pub(crate) destinations: Repository<Destination>,
    pub(crate) itineraries: Repository<Itinerary>,
    pub(crate) recommendations: Repository<Recommendation>,
    pub(crate) saved: SavedDestinations,
}

impl TripPlanner {
    pub(crate) fn new(
        destinations: Repository<Destination>,
        itineraries: Repository<Itinerary>,
        recommendations: Repository<Recommendation>,
        saved: SavedDestinations,
    ) -> Self {
        Self {
            destinations,
            itineraries,
            recommendations,
            saved,
        }
    }
}

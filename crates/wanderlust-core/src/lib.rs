//! Core library for the Wanderlust travel planner.
//!
//! Browse destinations, rank them against the interests you pick, generate
//! a three-day itinerary with a packing list, and keep a set of saved
//! places.
//!
//! # Layers
//!
//! - **Fixture store** ([`fixtures`]): the mock collections the planner
//!   starts from
//! - **Access layer** ([`store`]): async CRUD with simulated latency over
//!   in-memory collections
//! - **Matching engine** ([`matching`]): match percentage and the discover
//!   filters
//! - **Plan generator** ([`generator`]): itinerary and packing templates
//! - **Saved set** ([`saved`]): saved destination ids in key-value storage
//! - **Views** ([`planner`], [`display`]): one handler per screen, markdown
//!   output
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use wanderlust_core::{
//!     params::{Discover, Id},
//!     saved::MemoryKeyValueStore,
//!     store::Latency,
//!     TripPlannerBuilder,
//! };
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
//!         interests: vec!["beaches".to_string(), "cultural".to_string()],
//!     })
//!     .await;
//! println!("{matches}");
//!
//! let best = &matches[0].destination;
//! let trip = planner.create_trip(&Id::new(best.id.clone())).await?;
//! println!("{trip}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod generator;
pub mod matching;
pub mod models;
pub mod params;
pub mod planner;
pub mod saved;
pub mod store;

// Re-export commonly used types
pub use display::{
    CreateResult, DeleteResult, DestinationMatches, Destinations, OperationStatus,
    Recommendations, Trips, UpdateResult,
};
pub use error::{Result, TravelError};
pub use matching::{match_percentage, DiscoverQuery};
pub use models::{
    Destination, DestinationDetail, DestinationMatch, InterestSelection, InterestTag, Itinerary,
    PackingChecklist, Recommendation, TripSummary,
};
pub use planner::{TripPlanner, TripPlannerBuilder};

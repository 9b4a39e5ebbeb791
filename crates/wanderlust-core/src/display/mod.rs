//! Display formatting and result wrapper types.
//!
//! Domain models implement `Display` directly; collections and operation
//! results are wrapped in newtypes so every interface prints them the same
//! way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers &      │    │   Formatted     │
//! │ (Destination,   │───▶│ Result Types    │───▶│    Output       │
//! │  Itinerary)     │    │                 │    │   (Markdown)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (DestinationMatches, Trips, ...)
//! - [`results`]: Operation result types (CreateResult, UpdateResult, DeleteResult)
//! - [`status`]: Confirmation messages (OperationStatus)
//! - [`detail`]: Tabbed destination detail view
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use wanderlust_core::{display::UpdateResult, models::Destination};
//!
//! let destination = Destination {
//!     id: "4".to_string(),
//!     name: "Cusco".to_string(),
//!     country: "Peru".to_string(),
//!     description: "Gateway to the Sacred Valley".to_string(),
//!     hero_image: String::new(),
//!     difficulty: "Challenging".to_string(),
//!     best_months: vec!["May".to_string()],
//!     interests: vec!["hiking".to_string(), "history".to_string()],
//!     created: None,
//! };
//!
//! let result = UpdateResult::with_changes(destination, vec!["difficulty".to_string()]);
//! let output = format!("{result}");
//! assert!(output.contains("Changes made:"));
//! assert!(output.contains("# 4. Cusco, Peru"));
//! ```

pub mod collections;
pub mod datetime;
pub mod detail;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{DestinationMatches, Destinations, Recommendations, Trips};
pub use datetime::{LocalDate, LocalDateTime};
pub use detail::{DetailTab, DetailView};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;

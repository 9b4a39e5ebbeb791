use std::path::Path;

use wanderlust_core::{store::Latency, TripPlanner, TripPlannerBuilder};

/// Planner over the embedded fixtures, saving to a SQLite file at `db_path`
pub async fn create_test_planner(db_path: &Path) -> TripPlanner {
    TripPlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_latency(Latency::None)
        .build()
        .await
        .expect("Failed to create planner")
}

//! Builder for creating and configuring TripPlanner instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::TripPlanner;
use crate::{
    error::{Result, TravelError},
    fixtures::Fixtures,
    saved::{KeyValueStore, SavedDestinations, SqliteKeyValueStore},
    store::{Latency, Repository},
};

/// Builder for creating and configuring TripPlanner instances.
#[derive(Default)]
pub struct TripPlannerBuilder {
    database_path: Option<PathBuf>,
    fixtures_dir: Option<PathBuf>,
    fixtures: Option<Fixtures>,
    key_value_store: Option<Arc<dyn KeyValueStore>>,
    latency: Latency,
}

impl TripPlannerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file for the saved-destinations set.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wanderlust/wanderlust.db` or
    /// `~/.local/share/wanderlust/wanderlust.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads fixtures from a directory instead of the embedded snapshot.
    pub fn with_fixtures_dir<P: AsRef<Path>>(mut self, dir: Option<P>) -> Self {
        if let Some(dir) = dir {
            self.fixtures_dir = Some(dir.as_ref().to_path_buf());
        }
        self
    }

    /// Seeds the repositories with the given collections.
    ///
    /// Takes precedence over [`TripPlannerBuilder::with_fixtures_dir`].
    pub fn with_fixtures(mut self, fixtures: Fixtures) -> Self {
        self.fixtures = Some(fixtures);
        self
    }

    /// Uses the given store for saved destinations instead of a SQLite file.
    pub fn with_key_value_store(mut self, store: Arc<dyn KeyValueStore>) -> Self {
        self.key_value_store = Some(store);
        self
    }

    /// Sets the simulated latency of repository calls.
    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::FileSystem` if the database path is invalid or a
    /// fixture file cannot be read.
    /// Returns `TravelError::Fixture` if fixtures do not parse.
    /// Returns `TravelError::Database` if database initialization fails.
    pub async fn build(self) -> Result<TripPlanner> {
        let fixtures = match (self.fixtures, self.fixtures_dir) {
            (Some(fixtures), _) => fixtures,
            (None, Some(dir)) => task::spawn_blocking(move || Fixtures::from_dir(dir))
                .await
                .map_err(TravelError::join)??,
            (None, None) => Fixtures::embedded()?,
        };

        let store: Arc<dyn KeyValueStore> = match self.key_value_store {
            Some(store) => store,
            None => {
                let db_path = match self.database_path {
                    Some(path) => path,
                    None => Self::default_database_path()?,
                };

                if let Some(parent) = db_path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| TravelError::FileSystem {
                        path: parent.to_path_buf(),
                        source: e,
                    })?;
                }

                let store = task::spawn_blocking(move || SqliteKeyValueStore::open(db_path))
                    .await
                    .map_err(TravelError::join)??;
                Arc::new(store)
            }
        };

        debug!(
            "Loaded {} destinations, {} itineraries, {} recommendations",
            fixtures.destinations.len(),
            fixtures.itineraries.len(),
            fixtures.recommendations.len()
        );

        Ok(TripPlanner::new(
            Repository::new(fixtures.destinations, self.latency),
            Repository::new(fixtures.itineraries, self.latency),
            Repository::new(fixtures.recommendations, self.latency),
            SavedDestinations::new(store),
        ))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wanderlust")
            .place_data_file("wanderlust.db")
            .map_err(|e| TravelError::XdgDirectory(e.to_string()))
    }
}

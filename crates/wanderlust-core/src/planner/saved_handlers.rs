//! Saved-destination handlers for the TripPlanner.
//!
//! The saved set lives in a blocking key-value store, so every call runs on
//! the blocking thread pool.

use tokio::task;

use super::TripPlanner;
use crate::{
    display::{Destinations, OperationStatus},
    error::{Result, TravelError},
    models::Destination,
    params::Id,
    saved::SaveOutcome,
};

impl TripPlanner {
    /// Handle saving a destination.
    ///
    /// Saving an already saved destination changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::DestinationNotFound` for an unknown id.
    pub async fn save_destination(&self, params: &Id) -> Result<OperationStatus> {
        let destination = self.destinations.get_by_id(&params.id).await?;
        let saved = self.saved.clone();
        let id = destination.id.clone();

        let outcome = task::spawn_blocking(move || saved.save(&id))
            .await
            .map_err(TravelError::join)??;

        let message = match outcome {
            SaveOutcome::Saved => format!("Saved {} ({})", destination.name, destination.id),
            SaveOutcome::AlreadySaved => {
                format!("{} ({}) is already saved", destination.name, destination.id)
            }
        };
        Ok(OperationStatus::success(message))
    }

    /// Handle removing a destination from the saved set.
    ///
    /// The id is not checked against the collection, so ids of deleted
    /// destinations can still be removed.
    pub async fn unsave_destination(&self, params: &Id) -> Result<OperationStatus> {
        let saved = self.saved.clone();
        let id = params.id.clone();

        let removed = task::spawn_blocking(move || saved.unsave(&id))
            .await
            .map_err(TravelError::join)??;

        Ok(if removed {
            OperationStatus::success(format!("Removed destination {} from saved", params.id))
        } else {
            OperationStatus::failure(format!("Destination {} was not saved", params.id))
        })
    }

    /// Handle the saved view: saved destinations in collection order.
    pub async fn list_saved(&self) -> Result<Destinations> {
        let all = self.destinations.get_all().await;
        let saved = self.saved.clone();

        let listed = task::spawn_blocking(move || saved.list_saved(&all))
            .await
            .map_err(TravelError::join)??;
        Ok(Destinations(listed))
    }

    /// Handle the "surprise me" action: saves one unsaved destination at
    /// random.
    ///
    /// Returns `None` when every destination is already saved.
    pub async fn save_random_destination(&self) -> Result<Option<Destination>> {
        let all = self.destinations.get_all().await;
        let saved = self.saved.clone();

        task::spawn_blocking(move || saved.save_random(&all))
            .await
            .map_err(TravelError::join)?
    }

    /// Whether the destination is in the saved set.
    pub async fn is_saved(&self, params: &Id) -> Result<bool> {
        let saved = self.saved.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || saved.contains(&id))
            .await
            .map_err(TravelError::join)?
    }
}

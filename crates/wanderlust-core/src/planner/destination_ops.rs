//! Destination operations for the TripPlanner.

use super::TripPlanner;
use crate::{
    display::UpdateResult,
    error::Result,
    models::{Destination, DestinationPatch, NewDestination},
    params::Id,
};

impl TripPlanner {
    /// Lists every destination.
    pub async fn list_destinations(&self) -> Vec<Destination> {
        self.destinations.get_all().await
    }

    /// Retrieves a destination by its ID.
    pub async fn get_destination(&self, params: &Id) -> Result<Destination> {
        self.destinations.get_by_id(&params.id).await
    }

    /// Adds a destination. Duplicate interest tags are dropped.
    pub async fn create_destination(&self, draft: NewDestination) -> Destination {
        self.destinations.create(draft).await
    }

    /// Applies a patch to a destination and reports which fields changed.
    pub async fn update_destination(
        &self,
        params: &Id,
        patch: DestinationPatch,
    ) -> Result<UpdateResult<Destination>> {
        let (destination, changes) = self
            .destinations
            .update(&params.id, patch)
            .await?;
        Ok(UpdateResult::with_changes(destination, changes))
    }

    /// Removes a destination and returns it.
    ///
    /// Itineraries, recommendations and saved ids pointing at it are left
    /// alone; views skip references that no longer resolve.
    pub async fn delete_destination(&self, params: &Id) -> Result<Destination> {
        self.destinations.delete(&params.id).await
    }
}

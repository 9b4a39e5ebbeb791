//! Itinerary operations for the TripPlanner.

use super::TripPlanner;
use crate::{
    display::UpdateResult,
    error::Result,
    models::{Itinerary, ItineraryPatch, NewItinerary},
    params::Id,
};

impl TripPlanner {
    /// Lists every stored itinerary.
    pub async fn list_itineraries(&self) -> Vec<Itinerary> {
        self.itineraries.get_all().await
    }

    /// Retrieves an itinerary by its ID.
    pub async fn get_itinerary(&self, params: &Id) -> Result<Itinerary> {
        self.itineraries.get_by_id(&params.id).await
    }

    /// Stores an itinerary. The destination id is not checked.
    pub async fn create_itinerary(&self, draft: NewItinerary) -> Itinerary {
        self.itineraries.create(draft).await
    }

    /// Applies a patch to an itinerary and reports which fields changed.
    pub async fn update_itinerary(
        &self,
        params: &Id,
        patch: ItineraryPatch,
    ) -> Result<UpdateResult<Itinerary>> {
        let (itinerary, changes) = self
            .itineraries
            .update(&params.id, patch)
            .await?;
        Ok(UpdateResult::with_changes(itinerary, changes))
    }

    /// Removes an itinerary and returns it.
    pub async fn delete_itinerary(&self, params: &Id) -> Result<Itinerary> {
        self.itineraries.delete(&params.id).await
    }
}

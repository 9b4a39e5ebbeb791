//! Recommendation operations for the TripPlanner.

use super::TripPlanner;
use crate::{
    display::{Recommendations, UpdateResult},
    error::Result,
    models::{NewRecommendation, Recommendation, RecommendationPatch},
    params::{Id, ListRecommendations},
    store::Operation,
};

impl TripPlanner {
    /// Lists recommendations, optionally only those of one destination.
    pub async fn list_recommendations(&self, params: &ListRecommendations) -> Recommendations {
        let recommendations = match &params.destination_id {
            Some(destination_id) => self.recommendations_for(destination_id).await,
            None => self.recommendations.get_all().await,
        };
        Recommendations(recommendations)
    }

    /// Recommendations attached to one destination.
    pub async fn recommendations_for(&self, destination_id: &str) -> Vec<Recommendation> {
        self.recommendations
            .find_all(Operation::GetByDestination, |r| {
                r.destination_id == destination_id
            })
            .await
    }

    /// Retrieves a recommendation by its ID.
    pub async fn get_recommendation(&self, params: &Id) -> Result<Recommendation> {
        self.recommendations.get_by_id(&params.id).await
    }

    /// Stores a recommendation. The destination id is not checked.
    pub async fn create_recommendation(&self, draft: NewRecommendation) -> Recommendation {
        self.recommendations.create(draft).await
    }

    /// Applies a patch to a recommendation and reports which fields changed.
    pub async fn update_recommendation(
        &self,
        params: &Id,
        patch: RecommendationPatch,
    ) -> Result<UpdateResult<Recommendation>> {
        let (recommendation, changes) = self
            .recommendations
            .update(&params.id, patch)
            .await?;
        Ok(UpdateResult::with_changes(recommendation, changes))
    }

    /// Removes a recommendation and returns it.
    pub async fn delete_recommendation(&self, params: &Id) -> Result<Recommendation> {
        self.recommendations.delete(&params.id).await
    }
}

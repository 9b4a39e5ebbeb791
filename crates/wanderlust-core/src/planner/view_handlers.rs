//! View handlers that assemble what each screen shows.

use log::{info, warn};

use super::TripPlanner;
use crate::{
    display::{DestinationMatches, Trips},
    error::{Result, TravelError},
    generator,
    matching::DiscoverQuery,
    models::{DestinationDetail, Itinerary, PackingChecklist, TripSummary},
    params::{DeleteTrip, Discover, Id, QuickTrip},
};

impl TripPlanner {
    /// Handle the discover view.
    ///
    /// Loads all destinations, keeps those passing the search and interest
    /// filters and ranks them by match percentage.
    ///
    /// # Arguments
    ///
    /// * `params` - Search term and selected interests
    ///
    /// # Returns
    ///
    /// A DestinationMatches wrapper, best match first
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use wanderlust_core::{params::Discover, TripPlannerBuilder};
    /// # async {
    /// let planner = TripPlannerBuilder::new().build().await?;
    /// let params = Discover {
    ///     search: Some("japan".to_string()),
    ///     interests: vec!["cultural".to_string()],
    /// };
    /// let matches = planner.discover(&params).await;
    /// # Result::<(), wanderlust_core::TravelError>::Ok(())
    /// # };
    /// ```
    pub async fn discover(&self, params: &Discover) -> DestinationMatches {
        let query = DiscoverQuery::from(params);
        let destinations = self.destinations.get_all().await;
        DestinationMatches(query.apply(destinations))
    }

    /// Handle the destination detail view.
    ///
    /// Joins the destination with its recommendations and the generated
    /// itinerary and packing list. Nothing generated here is stored.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::DestinationNotFound` for an unknown id.
    pub async fn destination_detail(&self, params: &Id) -> Result<DestinationDetail> {
        let destination = self.destinations.get_by_id(&params.id).await?;
        let recommendations = self.recommendations_for(&destination.id).await;

        Ok(DestinationDetail {
            itinerary: generator::generate_itinerary(&destination),
            packing: PackingChecklist::new(generator::generate_packing_list(&destination)),
            recommendations,
            destination,
        })
    }

    /// Handle the detail view's "create trip" action.
    ///
    /// Stores the generated itinerary together with the packing item labels.
    ///
    /// # Arguments
    ///
    /// * `params` - ID of the destination to plan for
    ///
    /// # Returns
    ///
    /// The stored Itinerary
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use wanderlust_core::{params::Id, TripPlannerBuilder};
    /// # async {
    /// let planner = TripPlannerBuilder::new().build().await?;
    /// let trip = planner.create_trip(&Id::new("2")).await?;
    /// assert_eq!(trip.days.len(), 3);
    /// # Result::<(), wanderlust_core::TravelError>::Ok(())
    /// # };
    /// ```
    pub async fn create_trip(&self, params: &Id) -> Result<Itinerary> {
        let destination = self.destinations.get_by_id(&params.id).await?;
        let itinerary = self
            .create_itinerary(generator::itinerary_draft(&destination))
            .await;
        info!("Planned trip {} to {}", itinerary.id, destination.name);
        Ok(itinerary)
    }

    /// Handle the discover view's quick itinerary action.
    ///
    /// The main activities are typed by the first two selected interests
    /// rather than the destination's own.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::DestinationNotFound` for an unknown id.
    pub async fn quick_trip(&self, params: &QuickTrip) -> Result<Itinerary> {
        let destination = self.destinations.get_by_id(&params.destination_id).await?;
        let draft = generator::quick_itinerary(&destination, &params.selection());
        let itinerary = self.create_itinerary(draft).await;
        info!("Planned quick trip {} to {}", itinerary.id, destination.name);
        Ok(itinerary)
    }

    /// Handle listing trips.
    ///
    /// Every itinerary is joined with its destination. Itineraries whose
    /// destination is gone are skipped with a warning.
    pub async fn list_trips(&self) -> Trips {
        let itineraries = self.itineraries.get_all().await;
        let destinations = self.destinations.get_all().await;

        let trips = itineraries
            .iter()
            .filter_map(|itinerary| {
                let destination = destinations
                    .iter()
                    .find(|destination| destination.id == itinerary.destination_id);
                if destination.is_none() {
                    warn!(
                        "Skipping trip {}: destination {} no longer exists",
                        itinerary.id, itinerary.destination_id
                    );
                }
                destination.map(|destination| TripSummary::new(itinerary, destination))
            })
            .collect();

        Trips(trips)
    }

    /// Handle showing one trip.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::ItineraryNotFound` for an unknown id.
    pub async fn show_trip(&self, params: &Id) -> Result<Itinerary> {
        self.get_itinerary(params).await
    }

    /// Handle deleting a trip.
    ///
    /// Deletion cannot be undone, so the caller must confirm it.
    ///
    /// # Errors
    ///
    /// Returns `TravelError::InvalidInput` when `confirmed` is false and
    /// `TravelError::ItineraryNotFound` for an unknown id.
    pub async fn delete_trip(&self, params: &DeleteTrip) -> Result<Itinerary> {
        if !params.confirmed {
            return Err(TravelError::invalid_input("confirm")
                .with_reason("Deleting a trip requires confirmation"));
        }

        self.delete_itinerary(&Id::new(params.id.clone())).await
    }
}

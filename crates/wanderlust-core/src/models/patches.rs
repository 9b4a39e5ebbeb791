//! Typed partial updates for stored records.
//!
//! A patch lists every field a caller may change. `None` leaves the stored
//! value alone; `Some` replaces it. Identifiers and creation timestamps are
//! never patchable.

use serde::{Deserialize, Serialize};

use super::{destination::unique_interests, Day, Destination, Itinerary, Recommendation};

/// Changes to apply to a [`Destination`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DestinationPatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub hero_image: Option<String>,
    pub difficulty: Option<String>,
    pub best_months: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
}

/// Changes to apply to an [`Itinerary`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryPatch {
    pub destination_id: Option<String>,
    pub days: Option<Vec<Day>>,
    pub packing_list: Option<Vec<String>>,
}

/// Changes to apply to a [`Recommendation`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationPatch {
    pub destination_id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Overwrites `$target.$field` for every `Some` field of `$patch`, recording
/// the field name in `$changes`.
macro_rules! merge_fields {
    ($patch:expr, $target:expr, $changes:expr, [$($field:ident),+ $(,)?]) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
                $changes.push(stringify!($field).replace('_', " "));
            }
        )+
    };
}

impl DestinationPatch {
    /// Applies the patch, returning the names of the changed fields.
    ///
    /// Repeated interest tags are dropped, as on create.
    pub fn apply(mut self, destination: &mut Destination) -> Vec<String> {
        self.interests = self.interests.map(unique_interests);
        let mut changes = Vec::new();
        merge_fields!(
            self,
            destination,
            changes,
            [name, country, description, hero_image, difficulty, best_months, interests]
        );
        changes
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl ItineraryPatch {
    /// Applies the patch, returning the names of the changed fields.
    pub fn apply(self, itinerary: &mut Itinerary) -> Vec<String> {
        let mut changes = Vec::new();
        merge_fields!(self, itinerary, changes, [destination_id, days, packing_list]);
        changes
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl RecommendationPatch {
    /// Applies the patch, returning the names of the changed fields.
    pub fn apply(self, recommendation: &mut Recommendation) -> Vec<String> {
        let mut changes = Vec::new();
        merge_fields!(
            self,
            recommendation,
            changes,
            [destination_id, name, description, rating, kind]
        );
        changes
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

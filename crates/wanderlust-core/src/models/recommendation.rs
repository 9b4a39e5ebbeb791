//! Local recommendation model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A local tip attached to a destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,

    /// Destination the tip belongs to (not checked for existence)
    pub destination_id: String,

    pub name: String,

    pub description: String,

    /// Rating out of five
    pub rating: f32,

    /// Kind of place ("restaurant", "viewpoint", ...)
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
}

/// A recommendation that has not been stored yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewRecommendation {
    pub destination_id: String,
    pub name: String,
    pub description: String,
    pub rating: f32,
    #[serde(rename = "type")]
    pub kind: String,
}

impl NewRecommendation {
    pub(crate) fn into_record(self, id: String, created: Timestamp) -> Recommendation {
        Recommendation {
            id,
            destination_id: self.destination_id,
            name: self.name,
            description: self.description,
            rating: self.rating,
            kind: self.kind,
            created: Some(created),
        }
    }
}

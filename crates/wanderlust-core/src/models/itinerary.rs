//! Itinerary, day and activity models.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A stored day-by-day trip plan for a destination.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// Unique identifier of the itinerary
    pub id: String,

    /// Destination the trip goes to (not checked for existence)
    pub destination_id: String,

    #[serde(default)]
    pub days: Vec<Day>,

    /// Labels of the items to pack
    #[serde(default)]
    pub packing_list: Vec<String>,

    /// Timestamp when the itinerary was created (UTC)
    pub created: Timestamp,
}

/// One day of an itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Day {
    /// Day number, starting at 1
    pub day: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub activities: Vec<Activity>,
}

/// A single scheduled activity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    /// Start time as `HH:MM`
    pub time: String,

    /// What happens
    pub activity: String,

    /// Interest tag, or one of `logistics`, `cultural`, `scenic`
    #[serde(rename = "type")]
    pub kind: String,
}

impl Activity {
    pub fn new(time: &str, activity: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            time: time.to_string(),
            activity: activity.into(),
            kind: kind.into(),
        }
    }
}

/// An itinerary that has not been stored yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewItinerary {
    pub destination_id: String,
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(default)]
    pub packing_list: Vec<String>,
}

impl NewItinerary {
    pub(crate) fn into_record(self, id: String, created: Timestamp) -> Itinerary {
        Itinerary {
            id,
            destination_id: self.destination_id,
            days: self.days,
            packing_list: self.packing_list,
            created,
        }
    }
}

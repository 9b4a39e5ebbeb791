//! Destination model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::InterestTag;

/// A place users can browse, save and plan a trip to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Unique identifier of the destination
    pub id: String,

    pub name: String,

    pub country: String,

    pub description: String,

    /// URI of the hero image
    pub hero_image: String,

    /// Free-form difficulty label ("Easy", "Moderate", ...)
    pub difficulty: String,

    /// Best months to visit, in calendar order
    #[serde(default)]
    pub best_months: Vec<String>,

    /// Interest tags; the first one drives the main itinerary activity
    #[serde(default)]
    pub interests: Vec<String>,

    /// Set when the destination was created at runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
}

impl Destination {
    /// Whether the destination is labelled with the given tag.
    pub fn has_interest(&self, tag: &str) -> bool {
        self.interests.iter().any(|t| t == tag)
    }

    /// The known interest tags of this destination, unknown strings skipped.
    pub fn interest_tags(&self) -> Vec<InterestTag> {
        self.interests
            .iter()
            .filter_map(|t| t.parse::<InterestTag>().ok())
            .collect()
    }
}

/// A destination that has not been stored yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDestination {
    pub name: String,
    pub country: String,
    pub description: String,
    pub hero_image: String,
    pub difficulty: String,
    #[serde(default)]
    pub best_months: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl NewDestination {
    /// Turns the draft into a stored record.
    ///
    /// Duplicate interests are dropped, keeping the first occurrence.
    pub(crate) fn into_record(self, id: String, created: Timestamp) -> Destination {
        let interests = unique_interests(self.interests);

        Destination {
            id,
            name: self.name,
            country: self.country,
            description: self.description,
            hero_image: self.hero_image,
            difficulty: self.difficulty,
            best_months: self.best_months,
            interests,
            created: Some(created),
        }
    }
}

/// Drops repeated interest tags, keeping the first occurrence of each.
pub(crate) fn unique_interests(tags: Vec<String>) -> Vec<String> {
    let mut interests: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !interests.contains(&tag) {
            interests.push(tag);
        }
    }
    interests
}

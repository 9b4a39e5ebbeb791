//! Interest matching and the discover query.
//!
//! A destination's match percentage is the share of the user's selected
//! interests the destination offers. Interests the destination has but the
//! user did not pick do not lower the score.

use std::collections::HashSet;

use crate::models::{Destination, DestinationMatch, InterestSelection};

/// Percentage of `selected` interests found in `destination_interests`.
///
/// Returns 0 for an empty selection. Duplicates in either input count once.
/// Rounds half up, like the percentages shown on destination cards.
///
/// # Examples
///
/// ```rust
/// use wanderlust_core::matching::match_percentage;
///
/// assert_eq!(match_percentage::<&str>(&[], &["hiking".to_string()]), 0);
/// assert_eq!(match_percentage(&["hiking", "beaches"], &["hiking".to_string()]), 50);
/// assert_eq!(match_percentage(&["a", "b", "c"], &["c".to_string()]), 33);
/// ```
pub fn match_percentage<S: AsRef<str>>(selected: &[S], destination_interests: &[String]) -> u8 {
    let selected: HashSet<&str> = selected.iter().map(AsRef::as_ref).collect();
    if selected.is_empty() {
        return 0;
    }

    let offered: HashSet<&str> = destination_interests.iter().map(String::as_str).collect();
    let matched = selected.intersection(&offered).count();
    let total = selected.len();

    // round(100 * matched / total) without floats
    let percent = (200 * matched + total) / (2 * total);
    u8::try_from(percent).unwrap_or(100)
}

/// Filters applied by the discover view.
#[derive(Debug, Clone, Default)]
pub struct DiscoverQuery {
    /// Case-insensitive substring of the name or country
    pub search: Option<String>,
    /// Selected interests; destinations must share at least one
    pub interests: InterestSelection,
}

impl DiscoverQuery {
    /// Whether the destination passes the search and interest filters.
    pub fn accepts(&self, destination: &Destination) -> bool {
        self.matches_search(destination) && self.matches_interests(destination)
    }

    fn matches_search(&self, destination: &Destination) -> bool {
        let term = match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => term.to_lowercase(),
            _ => return true,
        };
        destination.name.to_lowercase().contains(&term)
            || destination.country.to_lowercase().contains(&term)
    }

    fn matches_interests(&self, destination: &Destination) -> bool {
        self.interests.is_empty()
            || self
                .interests
                .as_slice()
                .iter()
                .any(|tag| destination.has_interest(tag))
    }

    /// Filters and ranks destinations, best match first.
    ///
    /// The sort is stable, so equally matched destinations keep their
    /// collection order.
    pub fn apply(&self, destinations: Vec<Destination>) -> Vec<DestinationMatch> {
        let mut matches: Vec<DestinationMatch> = destinations
            .into_iter()
            .filter(|destination| self.accepts(destination))
            .map(|destination| DestinationMatch {
                match_percentage: match_percentage(
                    self.interests.as_slice(),
                    &destination.interests,
                ),
                destination,
            })
            .collect();

        matches.sort_by(|a, b| b.match_percentage.cmp(&a.match_percentage));
        matches
    }
}

//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items one after another and prints a short
//! notice when the collection is empty.

use std::{fmt, ops::Index};

use crate::models::{Destination, DestinationMatch, Recommendation, TripSummary};

/// Declares a newtype over `Vec<$item>` with the usual slice-like accessors
/// and a Display that prints `$empty` for an empty collection.
macro_rules! collection_wrapper {
    ($(#[$meta:meta])* $name:ident, $item:ty, $empty:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name(pub Vec<$item>);

        impl $name {
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $name {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.0.is_empty() {
                    return writeln!(f, $empty);
                }
                for item in &self.0 {
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    };
}

collection_wrapper!(
    /// Ranked results of the discover view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wanderlust_core::{
    ///     display::DestinationMatches,
    ///     models::{Destination, DestinationMatch},
    /// };
    ///
    /// let destination = Destination {
    ///     id: "2".to_string(),
    ///     name: "Kyoto".to_string(),
    ///     country: "Japan".to_string(),
    ///     description: "Temples and gardens".to_string(),
    ///     hero_image: String::new(),
    ///     difficulty: "Easy".to_string(),
    ///     best_months: vec!["April".to_string()],
    ///     interests: vec!["cultural".to_string(), "history".to_string()],
    ///     created: None,
    /// };
    /// let matches = DestinationMatches(vec![DestinationMatch {
    ///     destination,
    ///     match_percentage: 50,
    /// }]);
    ///
    /// let output = format!("{matches}");
    /// assert!(output.contains("Kyoto"));
    /// assert!(output.contains("50% match"));
    /// ```
    DestinationMatches,
    DestinationMatch,
    "No destinations match your filters."
);

collection_wrapper!(
    /// Plain list of destinations, used by the saved view.
    Destinations,
    Destination,
    "No destinations found."
);

collection_wrapper!(
    /// Trips joined with their destinations.
    Trips,
    TripSummary,
    "No trips planned yet."
);

collection_wrapper!(Recommendations, Recommendation, "No recommendations found.");

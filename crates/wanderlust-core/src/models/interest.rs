//! Interest tags and the user's interest selection.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the interest tags destinations are labelled with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum InterestTag {
    /// Trails and mountain walks
    Hiking,
    /// Local life, food and festivals
    Cultural,
    /// Quiet coastlines
    Beaches,
    /// Animals in their habitat
    Wildlife,
    /// Ruins, monuments and museums
    History,
    /// Adrenaline sports
    Adventure,
}

impl InterestTag {
    /// Every tag, in the order the interest picker shows them.
    pub const ALL: [InterestTag; 6] = [
        InterestTag::Hiking,
        InterestTag::Cultural,
        InterestTag::Beaches,
        InterestTag::Wildlife,
        InterestTag::History,
        InterestTag::Adventure,
    ];

    /// Tag as stored on records.
    pub fn as_str(&self) -> &'static str {
        match self {
            InterestTag::Hiking => "hiking",
            InterestTag::Cultural => "cultural",
            InterestTag::Beaches => "beaches",
            InterestTag::Wildlife => "wildlife",
            InterestTag::History => "history",
            InterestTag::Adventure => "adventure",
        }
    }

    /// Human readable label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wanderlust_core::models::InterestTag;
    ///
    /// assert_eq!(InterestTag::Beaches.label(), "Hidden Beaches");
    /// assert_eq!(InterestTag::Adventure.label(), "Adventure Sports");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            InterestTag::Hiking => "Hiking",
            InterestTag::Cultural => "Cultural",
            InterestTag::Beaches => "Hidden Beaches",
            InterestTag::Wildlife => "Wildlife",
            InterestTag::History => "History",
            InterestTag::Adventure => "Adventure Sports",
        }
    }

    /// Icon reference for the tag.
    pub fn icon(&self) -> &'static str {
        match self {
            InterestTag::Hiking => "Mountain",
            InterestTag::Cultural => "Users",
            InterestTag::Beaches => "Waves",
            InterestTag::Wildlife => "TreePine",
            InterestTag::History => "Castle",
            InterestTag::Adventure => "Zap",
        }
    }

    /// Label for an arbitrary tag string; unknown tags are returned as-is.
    pub fn label_for(tag: &str) -> &str {
        match tag.parse::<InterestTag>() {
            Ok(known) => known.label(),
            Err(_) => tag,
        }
    }
}

impl FromStr for InterestTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hiking" => Ok(InterestTag::Hiking),
            "cultural" => Ok(InterestTag::Cultural),
            "beaches" => Ok(InterestTag::Beaches),
            "wildlife" => Ok(InterestTag::Wildlife),
            "history" => Ok(InterestTag::History),
            "adventure" => Ok(InterestTag::Adventure),
            _ => Err(format!("Invalid interest tag: {s}")),
        }
    }
}

/// Ordered, duplicate-free set of interests picked by the user.
///
/// Order matters: the quick itinerary uses the first and second picks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterestSelection(Vec<String>);

impl InterestSelection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the tag when absent and removes it when present.
    ///
    /// Returns true when the tag is selected afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if let Some(position) = self.0.iter().position(|t| t == tag) {
            self.0.remove(position);
            false
        } else {
            self.0.push(tag.to_string());
            true
        }
    }

    /// Whether the tag is selected.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// First picked interest.
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Second picked interest.
    pub fn second(&self) -> Option<&str> {
        self.0.get(1).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: AsRef<str>> FromIterator<S> for InterestSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for tag in iter {
            let tag = tag.as_ref().trim();
            if !tag.is_empty() && !selection.contains(tag) {
                selection.0.push(tag.to_string());
            }
        }
        selection
    }
}

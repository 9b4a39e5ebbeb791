//! Tabbed rendering of the destination detail view.

use std::{fmt, str::FromStr};

use crate::models::DestinationDetail;

/// Sections of the destination detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Itinerary,
    Recommendations,
    Packing,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Itinerary,
        DetailTab::Recommendations,
        DetailTab::Packing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DetailTab::Overview => "overview",
            DetailTab::Itinerary => "itinerary",
            DetailTab::Recommendations => "recommendations",
            DetailTab::Packing => "packing",
        }
    }

    fn heading(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Itinerary => "Sample 3-day itinerary",
            DetailTab::Recommendations => "Local recommendations",
            DetailTab::Packing => "Packing list",
        }
    }
}

impl FromStr for DetailTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" => Ok(DetailTab::Overview),
            "itinerary" => Ok(DetailTab::Itinerary),
            "recommendations" | "tips" => Ok(DetailTab::Recommendations),
            "packing" => Ok(DetailTab::Packing),
            _ => Err(format!("Invalid detail tab: {s}")),
        }
    }
}

impl fmt::Display for DetailTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A destination detail rendered with one tab, or all of them.
///
/// # Examples
///
/// ```rust
/// use wanderlust_core::{
///     display::{DetailTab, DetailView},
///     models::{Destination, DestinationDetail, PackingChecklist},
/// };
///
/// let detail = DestinationDetail {
///     destination: Destination {
///         id: "8".to_string(),
///         name: "Petra".to_string(),
///         country: "Jordan".to_string(),
///         description: "Rose-red city".to_string(),
///         hero_image: String::new(),
///         difficulty: "Moderate".to_string(),
///         best_months: vec![],
///         interests: vec!["history".to_string()],
///         created: None,
///     },
///     recommendations: vec![],
///     itinerary: vec![],
///     packing: PackingChecklist::default(),
/// };
///
/// let output = DetailView::tab(&detail, DetailTab::Recommendations).to_string();
/// assert!(output.contains("No local recommendations yet."));
/// assert!(!output.contains("Packing list"));
/// ```
pub struct DetailView<'a> {
    detail: &'a DestinationDetail,
    tab: Option<DetailTab>,
}

impl<'a> DetailView<'a> {
    /// Shows every tab in order.
    pub fn all(detail: &'a DestinationDetail) -> Self {
        Self { detail, tab: None }
    }

    /// Shows the destination header and a single tab.
    pub fn tab(detail: &'a DestinationDetail, tab: DetailTab) -> Self {
        Self {
            detail,
            tab: Some(tab),
        }
    }

    fn fmt_tab(&self, f: &mut fmt::Formatter<'_>, tab: DetailTab) -> fmt::Result {
        writeln!(f, "## {}", tab.heading())?;
        writeln!(f)?;

        match tab {
            DetailTab::Overview => write!(f, "{}", self.detail.destination),
            DetailTab::Itinerary => {
                for day in &self.detail.itinerary {
                    write!(f, "{day}")?;
                }
                Ok(())
            }
            DetailTab::Recommendations => {
                if self.detail.recommendations.is_empty() {
                    writeln!(f, "No local recommendations yet.")?;
                    return writeln!(f);
                }
                for recommendation in &self.detail.recommendations {
                    write!(f, "{recommendation}")?;
                }
                Ok(())
            }
            DetailTab::Packing => write!(f, "{}", self.detail.packing),
        }
    }
}

impl fmt::Display for DetailView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tab {
            Some(DetailTab::Overview) | None => {}
            Some(_) => {
                let destination = &self.detail.destination;
                writeln!(f, "# {}, {}", destination.name, destination.country)?;
                writeln!(f)?;
            }
        }

        match self.tab {
            Some(tab) => self.fmt_tab(f, tab),
            None => DetailTab::ALL
                .iter()
                .try_for_each(|tab| self.fmt_tab(f, *tab)),
        }
    }
}

impl fmt::Display for DestinationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", DetailView::all(self))
    }
}

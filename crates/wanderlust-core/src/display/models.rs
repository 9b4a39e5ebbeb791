//! Display implementations for domain models.
//!
//! Kept apart from the model definitions. Everything renders as markdown for
//! the terminal renderer.

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{
    Activity, Day, Destination, DestinationMatch, InterestTag, Itinerary, PackingChecklist,
    Recommendation, TripSummary,
};

impl fmt::Display for InterestTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comma-separated interest labels, unknown tags shown verbatim.
fn interest_labels(interests: &[String]) -> String {
    interests
        .iter()
        .map(|tag| InterestTag::label_for(tag))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}, {}", self.id, self.name, self.country)?;
        writeln!(f)?;

        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        if !self.best_months.is_empty() {
            writeln!(f, "- Best months: {}", self.best_months.join(", "))?;
        }
        if !self.interests.is_empty() {
            writeln!(f, "- Interests: {}", interest_labels(&self.interests))?;
        }
        if let Some(created) = &self.created {
            writeln!(f, "- Created: {}", LocalDateTime(created))?;
        }

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for DestinationMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let destination = &self.destination;
        writeln!(
            f,
            "## {}, {} (ID: {}) *{}% match*",
            destination.name, destination.country, destination.id, self.match_percentage
        )?;
        writeln!(f)?;
        if !destination.description.is_empty() {
            writeln!(f, "{}", destination.description)?;
            writeln!(f)?;
        }
        writeln!(f, "- **Difficulty**: {}", destination.difficulty)?;
        if !destination.interests.is_empty() {
            writeln!(
                f,
                "- **Interests**: {}",
                interest_labels(&destination.interests)
            )?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** {} *({})*", self.time, self.activity, self.kind)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => writeln!(f, "### Day {}: {title}", self.day)?,
            None => writeln!(f, "### Day {}", self.day)?,
        }
        writeln!(f)?;
        for activity in &self.activities {
            write!(f, "{activity}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Itinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Trip {}", self.id)?;
        writeln!(f)?;
        writeln!(f, "- Destination: {}", self.destination_id)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created))?;
        writeln!(f)?;

        if self.days.is_empty() {
            writeln!(f, "No days planned.")?;
        } else {
            writeln!(f, "## Itinerary")?;
            writeln!(f)?;
            for day in &self.days {
                write!(f, "{day}")?;
            }
        }

        if !self.packing_list.is_empty() {
            writeln!(f, "## Packing list")?;
            writeln!(f)?;
            for item in &self.packing_list {
                writeln!(f, "- {item}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {} (ID: {}) ★ {:.1}",
            self.name, self.id, self.rating
        )?;
        writeln!(f)?;
        writeln!(f, "*{}* for destination {}", self.kind, self.destination_id)?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PackingChecklist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Packed {}/{} ({}%)",
            self.packed_count(),
            self.len(),
            self.progress_percent()
        )?;

        for (category, items) in self.by_category() {
            writeln!(f)?;
            writeln!(f, "### {category}")?;
            writeln!(f)?;
            for (index, item) in items {
                let mark = if item.checked { "x" } else { " " };
                writeln!(f, "- [{mark}] {}. {}", index + 1, item.item)?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}, {} (Trip ID: {})",
            self.destination_name, self.country, self.id
        )?;
        writeln!(f)?;
        writeln!(f, "- **Days**: {}", self.total_days)?;
        writeln!(f, "- **Packing items**: {}", self.packing_items)?;
        writeln!(f, "- **Created**: {}", LocalDate(&self.created))?;
        writeln!(f)
    }
}

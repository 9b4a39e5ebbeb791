//! Result wrapper types for displaying operation outcomes.
//!
//! Create, update and delete results print a one-line confirmation followed
//! by the affected record.

use std::fmt;

use crate::models::{Destination, Itinerary, Recommendation};

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use wanderlust_core::{display::CreateResult, models::Recommendation};
///
/// let tip = Recommendation {
///     id: "1700000000000".to_string(),
///     destination_id: "2".to_string(),
///     name: "Nishiki Market".to_string(),
///     description: "Narrow market street".to_string(),
///     rating: 4.6,
///     kind: "market".to_string(),
///     created: None,
/// };
///
/// let output = format!("{}", CreateResult::new(tip));
/// assert!(output.contains("Created recommendation with ID: 1700000000000"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Lists the fields the update changed, if any.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with the names of the changed fields.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

/// Wrapper type for displaying the result of delete operations.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

/// Kind name and one-line label used in confirmations.
pub trait Described: fmt::Display {
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn label(&self) -> String;
}

impl Described for Destination {
    const KIND: &'static str = "destination";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

impl Described for Itinerary {
    const KIND: &'static str = "trip";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        format!("{} days to destination {}", self.days.len(), self.destination_id)
    }
}

impl Described for Recommendation {
    const KIND: &'static str = "recommendation";

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl<T: Described> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl<T: Described> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Nothing changed.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

impl<T: Described> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}

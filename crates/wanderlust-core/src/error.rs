//! Error types for the travel planner library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all planner operations.
#[derive(Error, Debug)]
pub enum TravelError {
    /// Destination not found for the given ID
    #[error("Destination with ID {id} not found")]
    DestinationNotFound { id: String },
    /// Itinerary not found for the given ID
    #[error("Itinerary with ID {id} not found")]
    ItineraryNotFound { id: String },
    /// Recommendation not found for the given ID
    #[error("Recommendation with ID {id} not found")]
    RecommendationNotFound { id: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Fixture collections could not be loaded
    #[error("Failed to load fixture '{name}': {reason}")]
    Fixture { name: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TravelError {
        TravelError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TravelError {
        TravelError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TravelError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true for the not-found family of errors.
    ///
    /// Missing records are the only domain error; callers that render a
    /// "not found" view instead of a failure branch on this.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::DestinationNotFound { .. }
                | Self::ItineraryNotFound { .. }
                | Self::RecommendationNotFound { .. }
        )
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TravelError::database(message).with_source(e))
    }
}

/// Result type alias for planner operations
pub type Result<T> = std::result::Result<T, TravelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_family() {
        let err = TravelError::DestinationNotFound { id: "7".to_string() };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Destination with ID 7 not found");

        let err = TravelError::ItineraryNotFound { id: "9".to_string() };
        assert!(err.is_not_found());

        let err = TravelError::invalid_input("confirmed").with_reason("missing");
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'confirmed': missing"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to read").unwrap_err();
        assert!(matches!(err, TravelError::Database { .. }));
        assert_eq!(err.to_string(), "Database error: Failed to read");
    }
}

//! Status and confirmation message types for operation feedback.

use std::fmt;

/// Confirmation message for operations without a record to show, such as
/// saving or unsaving a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.success { "Done:" } else { "Nothing to do:" };
        writeln!(f, "{prefix} {}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Saved Kyoto (2)".to_string());
        assert_eq!(format!("{success}"), "Done: Saved Kyoto (2)\n");

        let failure = OperationStatus::failure("Destination 9 was not saved".to_string());
        assert!(format!("{failure}").starts_with("Nothing to do:"));
    }
}

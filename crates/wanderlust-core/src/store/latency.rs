//! Simulated round-trip latency for repository calls.

use std::time::Duration;

/// Repository operation kinds, each with its own simulated delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
    GetByDestination,
}

impl Operation {
    /// Delay waited before the operation under [`Latency::Simulated`].
    pub fn simulated_delay(self) -> Duration {
        let millis = match self {
            Operation::GetAll => 300,
            Operation::GetById => 250,
            Operation::Create => 400,
            Operation::Update => 300,
            Operation::Delete => 250,
            Operation::GetByDestination => 300,
        };
        Duration::from_millis(millis)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operation::GetAll => "get_all",
            Operation::GetById => "get_by_id",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::GetByDestination => "get_by_destination",
        }
    }
}

/// Whether repository calls pretend to cross a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Latency {
    /// Return immediately
    None,
    /// Sleep for the operation's simulated delay first
    #[default]
    Simulated,
}

impl Latency {
    /// Suspends the caller for the operation's delay, if any.
    pub async fn wait(self, operation: Operation) {
        if self == Latency::Simulated {
            tokio::time::sleep(operation.simulated_delay()).await;
        }
    }
}

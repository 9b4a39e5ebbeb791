//! CLI output matches the core Display implementations
//!
//! The binary and a planner built in-process load the same fixtures, so the
//! markdown they produce must be identical.

use std::{path::Path, process::Command};

use tempfile::TempDir;
use wanderlust_core::{
    params::{Discover, Id, ListRecommendations},
    store::Latency,
    TripPlanner, TripPlannerBuilder,
};

/// Helper function to create a test planner with temporary database
async fn create_test_planner() -> (TripPlanner, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let db_path = temp_dir.path().join("test.db");

    let planner = TripPlannerBuilder::new()
        .with_database_path(Some(db_path))
        .with_latency(Latency::None)
        .build()
        .await
        .expect("Failed to create planner");

    (planner, temp_dir)
}

/// Run a CLI command and capture its output
fn run_cli_command(db_path: &Path, args: &[&str]) -> String {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_wl"));
    cmd.arg("--no-color")
        .arg("--instant")
        .arg("--database-file")
        .arg(db_path);

    for arg in args {
        cmd.arg(arg);
    }

    let output = cmd.output().expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_trip_display_consistency() {
    let (planner, temp_dir) = create_test_planner().await;

    let trip = planner
        .show_trip(&Id::new("1"))
        .await
        .expect("Failed to show trip");
    let cli_output = run_cli_command(&temp_dir.path().join("test.db"), &["trip", "show", "1"]);

    assert_eq!(cli_output, format!("{trip}"));
}

#[tokio::test]
async fn test_recommendations_display_consistency() {
    let (planner, temp_dir) = create_test_planner().await;

    let recommendations = planner
        .list_recommendations(&ListRecommendations {
            destination_id: Some("1".to_string()),
        })
        .await;
    let cli_output = run_cli_command(
        &temp_dir.path().join("test.db"),
        &["recommendation", "list", "-d", "1"],
    );

    assert_eq!(cli_output, format!("{recommendations}"));
}

#[tokio::test]
async fn test_discover_display_consistency() {
    let (planner, temp_dir) = create_test_planner().await;

    let matches = planner
        .discover(&Discover {
            search: None,
            interests: vec!["history".to_string()],
        })
        .await;
    let cli_output = run_cli_command(
        &temp_dir.path().join("test.db"),
        &["discover", "-i", "history"],
    );

    assert_eq!(
        cli_output,
        format!("# Discover\n\nMatching: History\n\n{matches}")
    );
}

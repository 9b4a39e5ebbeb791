use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Command with plain output, no simulated latency and a private database
fn wl_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("wl").expect("Failed to find wl binary");
    cmd.arg("--no-color")
        .arg("--instant")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run wl");
    assert!(output.status.success(), "wl failed: {output:?}");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[test]
fn test_cli_without_command_shows_discover() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Discover"))
        .stdout(predicate::str::contains("## Torres del Paine, Chile (ID: 1) *0% match*"))
        .stdout(predicate::str::contains("Petra"));
}

#[test]
fn test_cli_discover_ranks_by_interests() {
    let temp_dir = create_cli_test_environment();

    let output = stdout_of(wl_cmd(&temp_dir).args(["discover", "--interests", "beaches,cultural"]));

    assert!(output.contains("Matching: Hidden Beaches, Cultural"));
    let amalfi = output.find("Amalfi Coast").expect("Amalfi listed");
    let kyoto = output.find("Kyoto").expect("Kyoto listed");
    assert!(amalfi < kyoto);
    assert!(output.contains("*100% match*"));
    assert!(!output.contains("Serengeti"));
}

#[test]
fn test_cli_discover_search() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["discover", "-s", "PERU"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cusco"))
        .stdout(predicate::str::contains("Kyoto").not());
}

#[test]
fn test_cli_discover_rejects_unknown_interest() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["discover", "-i", "shopping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_show_destination_detail() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["destination", "show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2. Kyoto, Japan"))
        .stdout(predicate::str::contains("## Sample 3-day itinerary"))
        .stdout(predicate::str::contains("cultural adventure"))
        .stdout(predicate::str::contains("Nishiki Market"))
        .stdout(predicate::str::contains("Packed 0/"));
}

#[test]
fn test_cli_show_packing_tab_with_packed_items() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["destination", "show", "6", "--tab", "packing", "--pack", "1,3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Amalfi Coast, Italy"))
        .stdout(predicate::str::contains("Packed 2/12 (16%)"))
        .stdout(predicate::str::contains("- [x] 1. Passport and travel documents"))
        .stdout(predicate::str::contains("- [ ] 2. Camera and extra batteries"))
        .stdout(predicate::str::contains("Sample 3-day itinerary").not());
}

#[test]
fn test_cli_pack_out_of_range_fails() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["destination", "show", "2", "--pack", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No packing item 40"));
}

#[test]
fn test_cli_show_missing_destination_fails() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["destination", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Destination with ID 99 not found"));
}

#[test]
fn test_cli_trip_list_and_create() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["trip", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Kyoto, Japan (Trip ID: 1)"));

    wl_cmd(&temp_dir)
        .args(["trip", "create", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created trip with ID:"))
        .stdout(predicate::str::contains("### Day 2: Main Adventure"))
        .stdout(predicate::str::contains("history adventure"));
}

#[test]
fn test_cli_quick_trip() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["trip", "quick", "5", "-i", "wildlife,beaches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("### Day 2\n"))
        .stdout(predicate::str::contains("Main adventure activity *(wildlife)*"))
        .stdout(predicate::str::contains("Secondary activity *(beaches)*"));
}

#[test]
fn test_cli_delete_trip_requires_confirm() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["trip", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--confirm"));

    wl_cmd(&temp_dir)
        .args(["trip", "delete", "1", "--confirm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted trip"));
}

#[test]
fn test_cli_saved_destinations_persist() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved destinations yet"));

    wl_cmd(&temp_dir)
        .args(["saved", "add", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved Kyoto (2)"));

    wl_cmd(&temp_dir)
        .args(["saved", "add", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already saved"));

    wl_cmd(&temp_dir)
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 2. Kyoto, Japan"));

    wl_cmd(&temp_dir)
        .args(["destination", "show", "2", "--tab", "overview"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("*Saved*"));

    wl_cmd(&temp_dir)
        .args(["saved", "remove", "2"])
        .assert()
        .success();

    wl_cmd(&temp_dir)
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kyoto").not());
}

#[test]
fn test_cli_saved_random_exhausts() {
    let temp_dir = create_cli_test_environment();

    for _ in 0..8 {
        wl_cmd(&temp_dir)
            .args(["saved", "random"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved a surprise pick"));
    }

    wl_cmd(&temp_dir)
        .args(["saved", "random"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Every destination is already saved."));
}

#[test]
fn test_cli_interests() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .arg("interests")
        .assert()
        .success()
        .stdout(predicate::str::contains("- **beaches**: Hidden Beaches *(Waves)*"))
        .stdout(predicate::str::contains("Adventure Sports"));
}

#[test]
fn test_cli_recommendations_for_destination() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args(["recommendation", "list", "--destination", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nishiki Market"))
        .stdout(predicate::str::contains("Refugio Chileno").not());
}

#[test]
fn test_cli_create_and_update_destination() {
    let temp_dir = create_cli_test_environment();

    wl_cmd(&temp_dir)
        .args([
            "destination",
            "create",
            "Lofoten",
            "Norway",
            "--interests",
            "hiking,wildlife",
            "--best-months",
            "June,July",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created destination with ID:"))
        .stdout(predicate::str::contains("Lofoten, Norway"))
        .stdout(predicate::str::contains("- Best months: June, July"));

    wl_cmd(&temp_dir)
        .args(["destination", "update", "7", "--difficulty", "Extreme"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated destination with ID: 7"))
        .stdout(predicate::str::contains("- difficulty"));
}

#[test]
fn test_cli_fixtures_dir() {
    let temp_dir = create_cli_test_environment();
    let fixtures = temp_dir.path().join("fixtures");
    std::fs::create_dir(&fixtures).unwrap();
    std::fs::write(
        fixtures.join("destinations.json"),
        r#"[{"id": "a1", "name": "Svalbard", "country": "Norway", "description": "",
            "heroImage": "", "difficulty": "Hard", "interests": ["wildlife"]}]"#,
    )
    .unwrap();
    std::fs::write(fixtures.join("itineraries.json"), "[]").unwrap();
    std::fs::write(fixtures.join("recommendations.json"), "[]").unwrap();

    wl_cmd(&temp_dir)
        .arg("--fixtures-dir")
        .arg(&fixtures)
        .args(["discover", "-i", "wildlife"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Svalbard, Norway (ID: a1) *100% match*"))
        .stdout(predicate::str::contains("Kyoto").not());
}

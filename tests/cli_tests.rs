use predicates::str::contains;
use std::fs;

mod common;
use common::{setup_test_config, tl, write_offline_config};

#[test]
fn init_writes_a_default_config() {
    let cfg_path = setup_test_config("init_default");

    tl().args(["--config", &cfg_path, "init"])
        .assert()
        .success()
        .stdout(contains("Initializing tripline"));

    let content = fs::read_to_string(&cfg_path).unwrap();
    assert!(content.contains("sheet_id"));
    assert!(content.contains("trips"));
}

#[test]
fn trips_lists_the_registry_in_order() {
    let cfg_path = setup_test_config("trips_list");

    tl().args(["--config", &cfg_path, "init"]).assert().success();

    tl().args(["--config", &cfg_path, "trips"])
        .assert()
        .success()
        .stdout(contains("New York"))
        .stdout(contains("Virgin Voyage 27"));
}

#[test]
fn config_print_shows_the_yaml() {
    let cfg_path = write_offline_config("config_print");

    tl().args(["--config", &cfg_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("base_url"))
        .stdout(contains("Testville"));
}

#[test]
fn show_surfaces_a_fetch_failure() {
    // base_url points at a closed local port: the trip load must fail
    // visibly instead of rendering an empty timeline.
    let cfg_path = write_offline_config("show_fetch_fail");

    tl().args(["--config", &cfg_path, "show"])
        .assert()
        .failure()
        .stderr(contains("Error"));
}

#[test]
fn show_rejects_an_unknown_trip() {
    let cfg_path = write_offline_config("show_unknown_trip");

    tl().args(["--config", &cfg_path, "show", "Atlantis"])
        .assert()
        .failure()
        .stderr(contains("Unknown trip"));
}

#[test]
fn calendar_degrades_per_trip_instead_of_failing() {
    // Every fetch fails, yet the calendar command still succeeds: bad trips
    // are skipped with a warning and the (empty) month renders.
    let cfg_path = write_offline_config("calendar_partial");

    tl().args(["--config", &cfg_path, "calendar", "--month", "2026-01"])
        .assert()
        .success()
        .stderr(contains("Skipping trip"))
        .stdout(contains("January 2026"));
}

#[test]
fn calendar_rejects_a_malformed_month() {
    let cfg_path = write_offline_config("calendar_bad_month");

    tl().args(["--config", &cfg_path, "calendar", "--month", "junk"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

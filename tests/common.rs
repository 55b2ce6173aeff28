#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

use tripline::models::row::Row;

pub fn tl() -> Command {
    cargo_bin_cmd!("tripline")
}

/// Create a unique test config path inside the system temp dir and remove
/// any existing file
pub fn setup_test_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_tripline.conf", name));
    let cfg_path = path.to_string_lossy().to_string();
    fs::remove_file(&cfg_path).ok();
    cfg_path
}

/// Write a config whose base_url points at a closed local port, so every
/// fetch fails fast without touching the network.
pub fn write_offline_config(name: &str) -> String {
    let cfg_path = setup_test_config(name);
    let yaml = "\
sheet_id: test-sheet
base_url: \"http://127.0.0.1:9\"
trips:
  - name: Testville
    tab: Testville Jan 26
";
    fs::write(&cfg_path, yaml).unwrap();
    cfg_path
}

/// Interval row builder (hotel, flight, ...) for transform tests.
pub fn interval_row(
    kind: &str,
    title: &str,
    details: &str,
    start: (&str, &str, &str),
    end: (&str, &str, &str),
) -> Row {
    Row {
        kind: kind.to_string(),
        title: title.to_string(),
        details: details.to_string(),
        start_date: start.0.to_string(),
        start_time: start.1.to_string(),
        start_utc: start.2.to_string(),
        end_date: end.0.to_string(),
        end_time: end.1.to_string(),
        end_utc: end.2.to_string(),
        ..Default::default()
    }
}

/// Single-point row builder (show, event, uber, ...).
pub fn point_row(kind: &str, title: &str, start: (&str, &str, &str)) -> Row {
    Row {
        kind: kind.to_string(),
        title: title.to_string(),
        start_date: start.0.to_string(),
        start_time: start.1.to_string(),
        start_utc: start.2.to_string(),
        ..Default::default()
    }
}

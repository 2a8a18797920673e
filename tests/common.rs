#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn eco() -> Command {
    cargo_bin_cmd!("ecotracker")
}

/// Create a unique data file path inside the system temp dir and remove any existing file
pub fn setup_data_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ecotracker.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ecotracker_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Run `ecotracker --data <file> <args...>` and require success
pub fn eco_ok(data_path: &str, args: &[&str]) {
    eco()
        .args(["--data", data_path])
        .args(args)
        .assert()
        .success();
}

/// Initialize an empty log and add one activity of each kind
pub fn init_with_data(data_path: &str) {
    eco_ok(data_path, &["--test", "init"]);
    eco_ok(data_path, &["add", "transport", "car", "10"]);
    eco_ok(data_path, &["add", "electricity", "20"]);
    eco_ok(data_path, &["add", "water", "80"]);
    eco_ok(data_path, &["add", "waste", "5"]);
}

/// The example document of the persisted format
pub const SAMPLE_DOCUMENT: &str = r#"[
  {"type":"transport","subtype":"car","distance":12.5,"emissions":2.1375,"date":"2024-01-15"},
  {"type":"electricity","kwh":10,"emissions":4.75,"date":"2024-01-15"},
  {"type":"water","litres":80,"date":"2024-01-15"},
  {"type":"waste","kg":3,"emissions":1.5,"date":"2024-01-15"}
]"#;

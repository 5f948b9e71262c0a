#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Isolated HOME so a developer's own configuration never leaks into tests.
pub fn test_home(name: &str) -> PathBuf {
    let mut home = env::temp_dir();
    home.push(format!("rweekreport_home_{name}"));
    fs::create_dir_all(&home).ok();
    home
}

pub fn rwr() -> Command {
    let mut cmd = cargo_bin_cmd!("rweekreport");
    cmd.env("HOME", test_home("default"));
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rweekreport.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema without touching any config file
pub fn init_db(db_path: &str) {
    rwr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Submit one report for the week 2024-03-04..2024-03-10
pub fn submit(db_path: &str, employee: &str, department: &str, date: &str, rows: &[&str]) {
    let mut args: Vec<String> = [
        "--db",
        db_path,
        "submit",
        "--employee",
        employee,
        "--department",
        department,
        "--date",
        date,
        "--week-start",
        "2024-03-04",
        "--week-end",
        "2024-03-10",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for r in rows {
        args.push("--row".to_string());
        args.push(r.to_string());
    }

    rwr().args(&args).assert().success();
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);
    submit(
        db_path,
        "Alice",
        "GIS",
        "2024-03-09",
        &["19|vulnerability map|no", "21|yield model|yes|waiting for imagery"],
    );
    submit(db_path, "Bob", "KMS", "2024-03-08", &["18|webkms search|no"]);
    submit(db_path, "Carol", "GIS", "2024-01-15", &["24|change detection|no"]);
}

/// `show --json` output parsed into JSON values
pub fn show_json(db_path: &str, employee: &str) -> Vec<serde_json::Value> {
    let out = rwr()
        .args([
            "--db",
            db_path,
            "show",
            "--employee",
            employee,
            "--week-start",
            "2024-03-04",
            "--week-end",
            "2024-03-10",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    serde_json::from_slice(&out).expect("show --json output")
}

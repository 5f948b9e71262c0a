use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};
use std::fs;

mod common;
use common::{init_db, init_db_with_data, rwr, setup_test_db, show_json, submit, test_home};

#[test]
fn test_submit_then_resubmit_replaces_rows() {
    let db_path = setup_test_db("submit_resubmit");
    init_db(&db_path);

    submit(
        &db_path,
        "Alice",
        "GIS",
        "2024-03-11",
        &["1|first item|no", "|", "2|second item|yes|waiting on vendor"],
    );

    let rows = show_json(&db_path, "Alice");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["work"], "first item");
    assert_eq!(rows[1]["work"], "second item");
    assert_eq!(rows[1]["pending"], true);
    assert_eq!(rows[1]["justification"], "waiting on vendor");

    submit(&db_path, "Alice", "GIS", "2024-03-12", &["3|only item"]);

    let rows = show_json(&db_path, "Alice");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["work"], "only item");
}

#[test]
fn test_justification_is_dropped_when_not_pending() {
    let db_path = setup_test_db("drop_justification");
    init_db(&db_path);

    submit(&db_path, "Alice", "GIS", "2024-03-11", &["5|done|no|left over text"]);

    let rows = show_json(&db_path, "Alice");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["justification"], "");
}

#[test]
fn test_show_empty_week_returns_template_row() {
    let db_path = setup_test_db("show_template");
    init_db(&db_path);

    let rows = show_json(&db_path, "Nobody");
    assert_eq!(rows.len(), 1);
    assert!(rows[0]["theme"].as_str().unwrap().starts_with("1. "));
    assert_eq!(rows[0]["work"], "");
    assert_eq!(rows[0]["pending"], false);
    assert_eq!(rows[0]["justification"], "");
}

#[test]
fn test_other_reports_are_untouched() {
    let db_path = setup_test_db("isolation");
    init_db_with_data(&db_path);

    submit(&db_path, "Alice", "GIS", "2024-03-12", &[]);

    assert_eq!(show_json(&db_path, "Bob").len(), 1);
    assert_eq!(show_json(&db_path, "Bob")[0]["work"], "webkms search");
    // Alice's week is now empty again: template row only
    assert_eq!(show_json(&db_path, "Alice")[0]["work"], "");
}

#[test]
fn test_submit_without_employee_is_rejected() {
    let db_path = setup_test_db("empty_employee");
    init_db(&db_path);

    rwr()
        .args([
            "--db",
            &db_path,
            "submit",
            "--employee",
            "   ",
            "--row",
            "1|something",
        ])
        .assert()
        .failure()
        .stderr(contains("please provide your name"));
}

#[test]
fn test_unknown_theme_is_rejected() {
    let db_path = setup_test_db("bad_theme");
    init_db(&db_path);

    rwr()
        .args([
            "--db",
            &db_path,
            "submit",
            "--employee",
            "Alice",
            "--row",
            "42|something",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown theme"));
}

#[test]
fn test_missing_database_reports_connection_error() {
    let db_path = setup_test_db("never_initialized");

    rwr()
        .args([
            "--db",
            &db_path,
            "submit",
            "--employee",
            "Alice",
            "--row",
            "1|x",
        ])
        .assert()
        .failure()
        .stderr(contains("Cannot open database").and(contains("rweekreport init")));

    assert!(!std::path::Path::new(&db_path).exists());
}

#[test]
fn test_admin_views_require_admin_role() {
    let db_path = setup_test_db("role_gate");
    init_db_with_data(&db_path);

    rwr()
        .args(["--db", &db_path, "list"])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));

    rwr()
        .args(["--db", &db_path, "--role", "superuser", "dashboard"])
        .assert()
        .failure()
        .stderr(contains("Forbidden"));

    rwr()
        .args(["--db", &db_path, "--role", "ADMIN", "list"])
        .assert()
        .success()
        .stdout(contains("not authenticated"))
        .stdout(contains("webkms search"))
        .stdout(contains("change detection"));
}

#[test]
fn test_dashboard_counts() {
    let db_path = setup_test_db("dashboard_counts");
    init_db_with_data(&db_path);

    rwr()
        .args([
            "--db",
            &db_path,
            "--role",
            "admin",
            "dashboard",
            "--period",
            "yearly",
            "--as-of",
            "2024-03-15",
            "--department",
            "GIS",
        ])
        .assert()
        .success()
        .stdout(contains("Total activities"))
        .stdout(contains("since 2024-01-01"))
        .stdout(contains("vulnerability map"))
        .stdout(contains("change detection"))
        .stdout(contains("webkms search").not());
}

#[test]
fn test_dashboard_weekly_window() {
    let db_path = setup_test_db("dashboard_weekly");
    init_db_with_data(&db_path);

    rwr()
        .args([
            "--db",
            &db_path,
            "--role",
            "admin",
            "dashboard",
            "--period",
            "weekly",
            "--as-of",
            "2024-03-15",
        ])
        .assert()
        .success()
        .stdout(contains("yield model"))
        .stdout(contains("webkms search").not());
}

#[test]
fn test_broken_config_halts_startup() {
    let home = test_home("broken_config");
    let conf_dir = home.join(".rweekreport");
    fs::create_dir_all(&conf_dir).unwrap();
    fs::write(conf_dir.join("rweekreport.conf"), "database: [oops").unwrap();

    rwr()
        .env("HOME", &home)
        .args(["catalog"])
        .assert()
        .failure()
        .stderr(contains("Configuration error"));
}

#[test]
fn test_catalog_lists_themes() {
    rwr()
        .args(["catalog"])
        .assert()
        .success()
        .stdout(contains("28. IT Documentation & Support"))
        .stdout(contains("Dissemination"));
}

#[test]
fn test_backup_compressed() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let out = common::temp_out("backup_zip", "sqlite");
    let zip = out.replace(".sqlite", ".zip");
    fs::remove_file(&zip).ok();

    rwr()
        .args([
            "--db", &db_path, "--role", "admin", "backup", "--file", &out, "--compress", "--force",
        ])
        .assert()
        .success();

    assert!(std::path::Path::new(&zip).exists());
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_relative_db_path_is_shared_by_init_and_submit() {
    let home = test_home("relative_db");
    let cwd = std::env::temp_dir().join("rweekreport_relative_cwd");
    fs::create_dir_all(&cwd).unwrap();
    let db_file = home.join(".rweekreport").join("team_relative.sqlite");
    fs::remove_file(&db_file).ok();

    rwr()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args(["--db", "team_relative.sqlite", "--test", "init"])
        .assert()
        .success();

    rwr()
        .env("HOME", &home)
        .current_dir(&cwd)
        .args([
            "--db",
            "team_relative.sqlite",
            "submit",
            "--employee",
            "Dana",
            "--department",
            "Platform",
            "--date",
            "2024-03-09",
            "--week-start",
            "2024-03-04",
            "--week-end",
            "2024-03-10",
            "--row",
            "5|fpo app release|no",
        ])
        .assert()
        .success();

    assert!(db_file.exists());
    assert!(!cwd.join("team_relative.sqlite").exists());
    let rows = show_json(&db_file.to_string_lossy(), "Dana");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["work"], "fpo app release");
}

#[test]
fn test_submit_from_file_comes_before_rows() {
    let db_path = setup_test_db("submit_from_file");
    init_db(&db_path);

    let rows_file = common::temp_out("submit_from_file_rows", "json");
    fs::write(
        &rows_file,
        r#"[
            {"theme": "7", "work": "file a"},
            {"work": "   "},
            {"pending": true, "justification": "waiting for API key"}
        ]"#,
    )
    .unwrap();

    rwr()
        .args([
            "--db",
            &db_path,
            "submit",
            "--employee",
            "Erin",
            "--department",
            "KMS",
            "--week-start",
            "2024-03-04",
            "--week-end",
            "2024-03-10",
            "--from-file",
            &rows_file,
            "--row",
            "2|cli b",
        ])
        .assert()
        .success();

    let rows = show_json(&db_path, "Erin");
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0]["theme"],
        "7. Domain-Specific Data Management Tools (Web Scraping + GIS/ML)"
    );
    assert_eq!(rows[0]["work"], "file a");
    assert_eq!(rows[1]["pending"], true);
    assert_eq!(rows[1]["justification"], "waiting for API key");
    assert_eq!(rows[2]["work"], "cli b");
    assert!(rows[2]["theme"].as_str().unwrap().starts_with("2. "));
}

#[test]
fn test_config_check_reports_missing_keys() {
    let home = test_home("config_check_partial");
    let conf_dir = home.join(".rweekreport");
    fs::create_dir_all(&conf_dir).unwrap();
    let db_path = setup_test_db("config_check_partial");
    fs::write(
        conf_dir.join("rweekreport.conf"),
        format!("database: {db_path}\n"),
    )
    .unwrap();

    rwr()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .failure()
        .stderr(contains("missing required keys").and(contains("default_department, separator_char")));
}

#[test]
fn test_config_check_after_init_is_complete() {
    let home = test_home("config_check_complete");
    fs::remove_file(home.join(".rweekreport").join("rweekreport.conf")).ok();

    rwr().env("HOME", &home).args(["init"]).assert().success();

    rwr()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));
}

#[test]
fn test_db_info_reports_store_counts() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rwr()
        .args(["--db", &db_path, "--role", "admin", "db", "--info"])
        .assert()
        .success()
        .stdout(is_match(r"Work items\s+\x1b\[0m 4\b").unwrap())
        .stdout(is_match(r"Reports\s+\x1b\[0m 3\b").unwrap())
        .stdout(is_match(r"Employees\s+\x1b\[0m 3\b").unwrap())
        .stdout(is_match(r"Pending items\s+\x1b\[0m 1\b").unwrap())
        .stdout(is_match(r"First submission\s+\x1b\[0m 2024-01-15\b").unwrap());
}

#[test]
fn test_db_check_and_migrate() {
    let db_path = setup_test_db("db_check_migrate");
    init_db_with_data(&db_path);

    rwr()
        .args(["--db", &db_path, "--role", "admin", "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));

    rwr()
        .args(["--db", &db_path, "--role", "admin", "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("applied: 20250301_0001_report_indexes"))
        .stdout(contains("applied: 20250412_0002_submission_date_index"))
        .stdout(contains("Migration completed."));

    // maintenance leaves the reports in place
    assert_eq!(show_json(&db_path, "Alice").len(), 2);
}

#[test]
fn test_db_maintenance_requires_admin() {
    let db_path = setup_test_db("db_forbidden");
    init_db(&db_path);

    rwr()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .failure()
        .stderr(contains("Forbidden").and(contains("`db`")));
}

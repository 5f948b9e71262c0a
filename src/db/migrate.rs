use crate::ui::messages::{info, success};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `reports` table exists.
fn reports_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='reports'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `reports` table.
///
/// Dates are ISO `YYYY-MM-DD` text, `updated` an RFC 3339 UTC timestamp.
fn create_reports_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS reports (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            submission_date  TEXT NOT NULL,
            week_start       TEXT NOT NULL,
            week_end         TEXT NOT NULL,
            employee         TEXT NOT NULL,
            department       TEXT NOT NULL DEFAULT '',
            theme            TEXT NOT NULL,
            work             TEXT NOT NULL DEFAULT '',
            pending          INTEGER NOT NULL DEFAULT 0 CHECK(pending IN (0, 1)),
            justification    TEXT NOT NULL DEFAULT '',
            updated          TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        );
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Lookup indexes for the report key and the dashboard ordering.
fn migrate_add_report_indexes(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_report_indexes";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_reports_key
            ON reports(employee, week_start, week_end);
        CREATE INDEX IF NOT EXISTS idx_reports_updated
            ON reports(updated);
        "#,
    )?;

    mark_applied(conn, version, "Added report key and updated indexes")?;
    success(format!("Migration applied: {version}"));
    Ok(())
}

fn migrate_add_submission_index(conn: &Connection) -> Result<()> {
    let version = "20250412_0002_submission_date_index";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        "CREATE INDEX IF NOT EXISTS idx_reports_submission ON reports(submission_date);",
    )?;

    mark_applied(conn, version, "Added submission_date index")?;
    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `init` and `db --migrate`; safe to run repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !reports_table_exists(conn)? {
        create_reports_table(conn)?;
        success("Created reports table.");
    } else {
        info("Reports table already present.");
    }

    migrate_add_report_indexes(conn)?;
    migrate_add_submission_index(conn)?;

    Ok(())
}

/// Versions recorded by `mark_applied`, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log
         WHERE operation = 'migration_applied'
         ORDER BY id",
    )?;
    stmt.query_map([], |row| row.get(0))?.collect()
}

/// Create the schema without any console output (unit tests).
#[cfg(test)]
pub(crate) fn create_schema_quietly(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_reports_table(conn)
}

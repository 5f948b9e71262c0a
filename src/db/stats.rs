//! Store-level facts shown by `db --info` and the integrity check behind
//! `db --check`.

use crate::errors::AppResult;
use rusqlite::Connection;

/// Counts over the `reports` table.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DbStats {
    pub work_items: i64,
    pub reports: i64,
    pub employees: i64,
    pub departments: i64,
    pub pending: i64,
    pub first_submission: Option<String>,
    pub last_submission: Option<String>,
    pub last_update: Option<String>,
}

impl DbStats {
    pub fn collect(conn: &Connection) -> AppResult<Self> {
        let (work_items, employees, departments, pending): (i64, i64, i64, i64) = conn.query_row(
            "SELECT COUNT(*),
                    COUNT(DISTINCT employee),
                    COUNT(DISTINCT department),
                    COALESCE(SUM(pending), 0)
             FROM reports",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?)),
        )?;

        // One report per (employee, week) key
        let reports: i64 = conn.query_row(
            "SELECT COUNT(*) FROM (SELECT DISTINCT employee, week_start, week_end FROM reports)",
            [],
            |row| row.get(0),
        )?;

        let (first_submission, last_submission, last_update): (
            Option<String>,
            Option<String>,
            Option<String>,
        ) = conn.query_row(
            "SELECT MIN(submission_date), MAX(submission_date), MAX(updated) FROM reports",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )?;

        Ok(Self {
            work_items,
            reports,
            employees,
            departments,
            pending,
            first_submission,
            last_submission,
            last_update,
        })
    }
}

/// Lines reported by `PRAGMA integrity_check`; empty when the file is sound.
pub fn integrity_problems(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check")?;
    let lines = stmt
        .query_map([], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.into_iter().filter(|l| l != "ok").collect())
}

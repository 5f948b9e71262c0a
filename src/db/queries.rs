//! Report store: every read and write against the `reports` table.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::report::{ReportKey, ReportRow, RowInput};
use chrono::{NaiveDate, SecondsFormat, Utc};
use rusqlite::{Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

fn fmt_date(d: NaiveDate) -> String {
    d.format(DATE_FMT).to_string()
}

/// Write timestamp: fixed-width UTC, so text order is chronological.
fn write_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Replace the whole report identified by `key`.
///
/// Deletes every stored row of the key, then inserts the non-blank subset of
/// `rows` in input order. Both phases run in one transaction. Returns the
/// number of rows persisted.
pub fn upsert_report(
    pool: &mut DbPool,
    key: &ReportKey,
    submission_date: NaiveDate,
    department: &str,
    rows: &[RowInput],
) -> AppResult<usize> {
    if key.employee.is_empty() {
        return Err(AppError::Validation("employee name is empty".to_string()));
    }

    let week_start = fmt_date(key.week_start);
    let week_end = fmt_date(key.week_end);
    let submitted = fmt_date(submission_date);
    let now = write_stamp();

    pool.with_transaction(|tx| {
        tx.execute(
            "DELETE FROM reports
             WHERE employee = ?1
               AND week_start = ?2
               AND week_end = ?3",
            params![key.employee, week_start, week_end],
        )?;

        let mut stmt = tx.prepare_cached(
            "INSERT INTO reports (
                submission_date, week_start, week_end, employee, department,
                theme, work, pending, justification, updated
             )
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;

        let mut written = 0;
        for row in rows.iter().filter_map(RowInput::normalized) {
            stmt.execute(params![
                submitted,
                week_start,
                week_end,
                key.employee,
                department.trim(),
                row.theme,
                row.work,
                row.pending as i32,
                row.justification,
                now,
            ])?;
            written += 1;
        }

        Ok(written)
    })
}

/// Rows of one report in insertion order.
///
/// An empty key yields the single editor placeholder row (never persisted).
pub fn load_report(pool: &mut DbPool, key: &ReportKey) -> AppResult<Vec<RowInput>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT theme, work, pending, justification
         FROM reports
         WHERE employee = ?1
           AND week_start = ?2
           AND week_end = ?3
         ORDER BY id ASC",
    )?;

    let rows = stmt.query_map(
        params![key.employee, fmt_date(key.week_start), fmt_date(key.week_end)],
        |row| {
            Ok(RowInput {
                theme: row.get(0)?,
                work: row.get(1)?,
                pending: row.get::<_, i64>(2)? != 0,
                justification: row.get(3)?,
            })
        },
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    if out.is_empty() {
        out.push(RowInput::placeholder());
    }
    Ok(out)
}

/// Every stored row, most recently written first.
///
/// Rows written by the same submission share a timestamp and keep their
/// input order.
pub fn list_all_reports(pool: &mut DbPool) -> AppResult<Vec<ReportRow>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, submission_date, week_start, week_end, employee, department,
                theme, work, pending, justification, updated
         FROM reports
         ORDER BY updated DESC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn parse_date_col(row: &Row, idx: usize) -> Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

pub fn map_row(row: &Row) -> Result<ReportRow> {
    Ok(ReportRow {
        id: row.get(0)?,
        submission_date: parse_date_col(row, 1)?,
        week_start: parse_date_col(row, 2)?,
        week_end: parse_date_col(row, 3)?,
        employee: row.get(4)?,
        department: row.get(5)?,
        theme: row.get(6)?,
        work: row.get(7)?,
        pending: row.get::<_, i64>(8)? != 0,
        justification: row.get(9)?,
        updated: row.get(10)?,
    })
}

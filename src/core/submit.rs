use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::upsert_report;
use crate::errors::{AppError, AppResult};
use crate::models::report::{ReportKey, RowInput};
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// Everything the submit form collects for one weekly report.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub employee: String,
    pub department: String,
    pub submission_date: NaiveDate,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub rows: Vec<RowInput>,
}

impl SubmitRequest {
    pub fn key(&self) -> ReportKey {
        ReportKey::new(&self.employee, self.week_start, self.week_end)
    }
}

pub struct SubmitLogic;

impl SubmitLogic {
    /// Checks done before the store is touched.
    pub fn validate(req: &SubmitRequest) -> AppResult<()> {
        if req.employee.trim().is_empty() {
            return Err(AppError::Validation(
                "please provide your name (--employee)".to_string(),
            ));
        }

        if req.week_start > req.week_end {
            warning(format!(
                "Week start {} is after week end {}; saving as given.",
                req.week_start, req.week_end
            ));
        }

        Ok(())
    }

    /// Validate and replace the stored report; returns the rows written.
    pub fn apply(pool: &mut DbPool, req: &SubmitRequest) -> AppResult<usize> {
        Self::validate(req)?;

        let key = req.key();
        let written = upsert_report(
            pool,
            &key,
            req.submission_date,
            &req.department,
            &req.rows,
        )?;

        let dropped = req.rows.len() - written;
        ttlog_soft(
            &pool.conn,
            "submit",
            &key.to_string(),
            &format!("{written} item(s) saved, {dropped} blank row(s) skipped"),
        );

        Ok(written)
    }
}

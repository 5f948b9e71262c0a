// src/export/logic.rs

use crate::core::aggregate::DashboardQuery;
use crate::db::log::ttlog_soft;
use crate::db::pool::DbPool;
use crate::db::queries::list_all_reports;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export of report rows.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows selected by `query` (same filters as the dashboard).
    ///
    /// - `file` must be an absolute path (`~/` is expanded)
    /// - an existing file is only replaced with `force` or after confirmation
    ///
    /// Returns the number of rows written; nothing is written when the
    /// selection is empty.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        query: &DashboardQuery,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let rows = query.apply(list_all_reports(pool)?);

        if rows.is_empty() {
            warning("No reports found for the selected filters.");
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        ttlog_soft(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} rows as {} (period {})",
                rows.len(),
                format.as_str(),
                query.period
            ),
        );

        Ok(rows.len())
    }
}

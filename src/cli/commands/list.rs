use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::list_all_reports;
use crate::errors::AppResult;
use crate::models::report::ReportRow;
use crate::ui::messages::warning;
use crate::utils::colors::{colorize_optional, colorize_pending};
use crate::utils::table::{Column, Table};

/// List every stored work item, latest submission first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;
    let rows = list_all_reports(&mut pool)?;

    if rows.is_empty() {
        warning("No reports submitted yet.");
        return Ok(());
    }

    print_rows(&rows, cfg.separator());
    Ok(())
}

/// Detailed rows table, shared with the dashboard.
pub(crate) fn print_rows(rows: &[ReportRow], sep: char) {
    let mut table = Table::new(vec![
        Column::new("id"),
        Column::new("submitted"),
        Column::new("week"),
        Column::capped("employee", 20),
        Column::capped("dept", 14),
        Column::capped("theme", 32),
        Column::capped("work", 40),
        Column::new("pending"),
        Column::capped("justification", 30),
    ])
    .with_separator(sep);

    for r in rows {
        table.add_row(vec![
            r.id.to_string(),
            r.submission_date.to_string(),
            format!("{}..{}", r.week_start, r.week_end),
            r.employee.clone(),
            r.department.clone(),
            r.theme.clone(),
            colorize_optional(&r.work),
            colorize_pending(r.pending),
            colorize_optional(&r.justification),
        ]);
    }

    print!("{}", table.render());
}

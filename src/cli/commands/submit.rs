use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{SubmitLogic, SubmitRequest};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::catalog::{self, canonical_department};
use crate::models::report::RowInput;
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::fs;

/// Submit or replace one weekly report.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Submit {
        employee,
        department,
        date: submission,
        week_start,
        week_end,
        rows,
        from_file,
    } = cmd
    {
        //
        // 1. Dates (defaults: today, previous Monday..Sunday)
        //
        let today = date::today();
        let submission_date = date::parse_or(submission.as_ref(), today)?;
        let week_start = date::parse_or(week_start.as_ref(), date::last_monday(today))?;
        let week_end = date::parse_or(week_end.as_ref(), date::last_sunday(today))?;

        //
        // 2. Department: canonical spelling, or free text for "Other"
        //
        let department = resolve_department(department.as_deref(), cfg);

        //
        // 3. Work items: file first, then --row values
        //
        let mut items = match from_file {
            Some(f) => read_rows_file(f)?,
            None => Vec::new(),
        };
        for spec in rows {
            items.push(spec.parse::<RowInput>()?);
        }

        if items.is_empty() {
            warning("No work items given: the stored report for this week will be emptied.");
        }

        if !catalog::is_known_employee(employee) {
            info(format!("'{}' is not in the staff list; saving as free text.", employee.trim()));
        }

        let req = SubmitRequest {
            employee: employee.clone(),
            department,
            submission_date,
            week_start,
            week_end,
            rows: items,
        };

        //
        // 4. Store (rejected requests never open the database)
        //
        SubmitLogic::validate(&req)?;
        let mut pool = DbPool::new(&cfg.database)?;
        let written = SubmitLogic::apply(&mut pool, &req)?;

        success(format!(
            "Weekly report saved for {}: {} item(s)",
            req.key(),
            written
        ));
    }

    Ok(())
}

fn resolve_department(raw: Option<&str>, cfg: &Config) -> String {
    let raw = raw.unwrap_or(cfg.default_department.as_str()).trim();
    match canonical_department(raw) {
        Some(d) => d.to_string(),
        None => {
            warning(format!(
                "Department '{raw}' is not one of {}; kept as free text.",
                catalog::DEPARTMENTS.join(", ")
            ));
            raw.to_string()
        }
    }
}

/// Read a JSON array of work items, resolving theme numbers like `--row`.
fn read_rows_file(file: &str) -> AppResult<Vec<RowInput>> {
    let path = expand_tilde(file);
    let content = fs::read_to_string(&path)?;

    let items: Vec<RowInput> = serde_json::from_str(&content).map_err(|e| {
        AppError::InvalidRow(format!("{}: {e}", path.display()))
    })?;

    items
        .into_iter()
        .map(|mut r| -> AppResult<RowInput> {
            if let Some(t) = catalog::resolve_theme(&r.theme)? {
                r.theme = t.to_string();
            }
            Ok(r)
        })
        .collect()
}

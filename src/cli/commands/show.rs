use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_report;
use crate::errors::{AppError, AppResult};
use crate::models::report::{ReportKey, RowInput};
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_pending};
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// Print the stored rows of one report, or the editor placeholder row.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        employee,
        week_start,
        week_end,
        json,
    } = cmd
    {
        let today = date::today();
        let week_start = date::parse_or(week_start.as_ref(), date::last_monday(today))?;
        let week_end = date::parse_or(week_end.as_ref(), date::last_sunday(today))?;

        let key = ReportKey::new(employee, week_start, week_end);
        if key.employee.is_empty() {
            return Err(AppError::Validation(
                "please provide your name (--employee)".to_string(),
            ));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_report(&mut pool, &key)?;

        if *json {
            let out = serde_json::to_string_pretty(&rows)
                .map_err(|e| AppError::Other(format!("JSON serialization error: {e}")))?;
            println!("{out}");
            return Ok(());
        }

        header(format!("Weekly report: {key}"));
        if rows.len() == 1 && rows[0] == RowInput::placeholder() {
            info("Nothing stored for this week yet; showing the empty template.");
        }
        print_items(&rows, cfg.separator());
    }

    Ok(())
}

fn print_items(rows: &[RowInput], sep: char) {
    let mut table = Table::new(vec![
        Column::new("#"),
        Column::capped("theme", 48),
        Column::capped("work", 60),
        Column::new("pending"),
        Column::capped("justification", 40),
    ])
    .with_separator(sep);

    for (i, r) in rows.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            r.theme.clone(),
            colorize_optional(&r.work),
            colorize_pending(r.pending),
            colorize_optional(&r.justification),
        ]);
    }

    print!("{}", table.render());
}

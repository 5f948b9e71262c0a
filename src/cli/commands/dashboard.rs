use crate::cli::commands::list::print_rows;
use crate::cli::parser::{Commands, FilterArgs};
use crate::config::Config;
use crate::core::aggregate::{Dashboard, DashboardQuery};
use crate::db::pool::DbPool;
use crate::db::queries::list_all_reports;
use crate::errors::AppResult;
use crate::ui::messages::{header, metric, warning};
use crate::utils::date;
use crate::utils::table::{Column, Table};
use std::collections::BTreeMap;

impl FilterArgs {
    /// Turn the raw CLI filters into an aggregator query.
    pub fn to_query(&self) -> AppResult<DashboardQuery> {
        Ok(DashboardQuery {
            period: self.period,
            as_of: date::parse_or(self.as_of.as_ref(), date::today())?,
            employee: self.employee.clone(),
            department: self.department.clone(),
        })
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        filters,
        no_details,
    } = cmd
    {
        let query = filters.to_query()?;

        let mut pool = DbPool::new(&cfg.database)?;
        let all = list_all_reports(&mut pool)?;

        if all.is_empty() {
            warning("No reports submitted yet.");
            return Ok(());
        }

        let dash = Dashboard::build(all, &query);
        let sep = cfg.separator();

        header("Admin report dashboard");
        let window = match query.period.start(query.as_of) {
            Some(start) => format!("{} (since {start})", query.period),
            None => query.period.to_string(),
        };
        metric("Period", window);
        metric(
            "Employee",
            query.employee.as_deref().unwrap_or("All"),
        );
        metric(
            "Department",
            query.department.as_deref().unwrap_or("All"),
        );
        println!();
        metric("Total activities", dash.summary.total_count);
        metric("Pending tasks", dash.summary.pending_count);

        header("By employee");
        print_counts("employee", &dash.summary.by_employee, sep);

        header("By theme");
        print_counts("theme", &dash.summary.by_theme, sep);

        if !*no_details && !dash.rows.is_empty() {
            header("Detailed data");
            print_rows(&dash.rows, sep);
        }

        println!();
        println!("Employees on file:   {}", dash.employees.join(", "));
        println!("Departments on file: {}", dash.departments.join(", "));
    }

    Ok(())
}

fn print_counts(label: &str, counts: &BTreeMap<String, usize>, sep: char) {
    if counts.is_empty() {
        println!("(no activities)");
        return;
    }

    let mut table = Table::new(vec![Column::capped(label, 60), Column::new("activities")])
        .with_separator(sep);
    for (k, v) in counts {
        table.add_row(vec![k.clone(), v.to_string()]);
    }
    print!("{}", table.render());
}

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_soft;
use crate::db::migrate::{applied_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats::{DbStats, integrity_problems};
use crate::errors::AppResult;
use crate::ui::messages::{header, info, metric, success, warning};
use std::fs;

/// Store maintenance; `db` with no flag shows `--info`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let nothing_selected = !(*migrate || *check || *vacuum || *show_info);

        if *migrate {
            info("Running migrations…");
            run_pending_migrations(&pool.conn)?;
            for version in applied_migrations(&pool.conn)? {
                info(format!("applied: {version}"));
            }
            ttlog_soft(&pool.conn, "db", "migrate", "Pending migrations applied");
            success("Migration completed.");
        }

        if *show_info || nothing_selected {
            print_info(&pool, &cfg.database)?;
        }

        if *check {
            let problems = integrity_problems(&pool.conn)?;
            if problems.is_empty() {
                success("Integrity check passed.");
            } else {
                warning(format!("Integrity check found {} problem(s):", problems.len()));
                for p in &problems {
                    println!("  {p}");
                }
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM;")?;
            ttlog_soft(&pool.conn, "db", "vacuum", "Database compacted");
            success("Vacuum completed.");
        }
    }

    Ok(())
}

fn print_info(pool: &DbPool, path: &str) -> AppResult<()> {
    let stats = DbStats::collect(&pool.conn)?;
    let size_kb = fs::metadata(path).map(|m| m.len()).unwrap_or(0) as f64 / 1024.0;
    let or_dash = |v: Option<String>| v.unwrap_or_else(|| "--".to_string());

    header("Report store");
    metric("File", path);
    metric("Size", format!("{size_kb:.1} KB"));
    metric("Work items", stats.work_items);
    metric("Reports", stats.reports);
    metric("Employees", stats.employees);
    metric("Departments", stats.departments);
    metric("Pending items", stats.pending);
    metric("First submission", or_dash(stats.first_submission));
    metric("Last submission", or_dash(stats.last_submission));
    metric("Last update", or_dash(stats.last_update));
    Ok(())
}

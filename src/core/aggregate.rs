//! Report aggregation for the admin dashboard.
//!
//! Pure functions over the rows returned by `list_all_reports`; nothing here
//! touches the database.

use crate::models::catalog::is_all;
use crate::models::period::Period;
use crate::models::report::ReportRow;
use crate::models::summary::Summary;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Keep rows submitted on or after the start of `period` relative to `as_of`.
pub fn filter_by_period(rows: Vec<ReportRow>, period: Period, as_of: NaiveDate) -> Vec<ReportRow> {
    match period.start(as_of) {
        Some(start) => rows
            .into_iter()
            .filter(|r| r.submission_date >= start)
            .collect(),
        None => rows,
    }
}

/// Exact-match employee filter; `None` or "All" keeps everything.
/// The filter value is trimmed like stored names are.
pub fn filter_by_employee(rows: Vec<ReportRow>, employee: Option<&str>) -> Vec<ReportRow> {
    match employee.map(str::trim) {
        Some(e) if !is_all(e) => rows.into_iter().filter(|r| r.employee == e).collect(),
        _ => rows,
    }
}

/// Exact-match department filter; `None` or "All" keeps everything.
pub fn filter_by_department(rows: Vec<ReportRow>, department: Option<&str>) -> Vec<ReportRow> {
    match department.map(str::trim) {
        Some(d) if !is_all(d) => rows.into_iter().filter(|r| r.department == d).collect(),
        _ => rows,
    }
}

pub fn summarize(rows: &[ReportRow]) -> Summary {
    let mut s = Summary {
        total_count: rows.len(),
        ..Summary::default()
    };

    for r in rows {
        if r.pending {
            s.pending_count += 1;
        }
        *s.by_employee.entry(r.employee.clone()).or_default() += 1;
        *s.by_theme.entry(r.theme.clone()).or_default() += 1;
    }

    s
}

/// Filter selection of one dashboard view.
#[derive(Debug, Clone)]
pub struct DashboardQuery {
    pub period: Period,
    pub as_of: NaiveDate,
    pub employee: Option<String>,
    pub department: Option<String>,
}

impl DashboardQuery {
    /// Apply period, then employee, then department.
    pub fn apply(&self, rows: Vec<ReportRow>) -> Vec<ReportRow> {
        let rows = filter_by_period(rows, self.period, self.as_of);
        let rows = filter_by_employee(rows, self.employee.as_deref());
        filter_by_department(rows, self.department.as_deref())
    }
}

/// Filtered rows, their counts, and the filter options offered by the
/// unfiltered data set.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub rows: Vec<ReportRow>,
    pub summary: Summary,
    pub employees: Vec<String>,
    pub departments: Vec<String>,
}

impl Dashboard {
    pub fn build(all: Vec<ReportRow>, query: &DashboardQuery) -> Self {
        let employees = distinct(&all, |r| &r.employee);
        let departments = distinct(&all, |r| &r.department);

        let rows = query.apply(all);
        let summary = summarize(&rows);

        Self {
            rows,
            summary,
            employees,
            departments,
        }
    }
}

fn distinct<F>(rows: &[ReportRow], field: F) -> Vec<String>
where
    F: Fn(&ReportRow) -> &String,
{
    rows.iter()
        .map(|r| field(r).clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn report(id: i64, submitted: &str, employee: &str, dept: &str, theme: &str, pending: bool) -> ReportRow {
        ReportRow {
            id,
            submission_date: d(submitted),
            week_start: d("2024-03-04"),
            week_end: d("2024-03-10"),
            employee: employee.to_string(),
            department: dept.to_string(),
            theme: theme.to_string(),
            work: format!("item {id}"),
            pending,
            justification: if pending { "waiting".into() } else { String::new() },
            updated: "2024-03-15T10:00:00.000000Z".to_string(),
        }
    }

    fn sample() -> Vec<ReportRow> {
        vec![
            report(1, "2024-03-08", "Alice", "GIS", "T1", false),
            report(2, "2024-03-09", "Alice", "GIS", "T2", true),
            report(3, "2024-03-15", "Bob", "KMS", "T1", false),
            report(4, "2024-01-02", "Carol", "GIS", "T3", true),
            report(5, "2023-12-30", "Bob", "KMS", "T1", false),
        ]
    }

    fn ids(rows: &[ReportRow]) -> Vec<i64> {
        rows.iter().map(|r| r.id).collect()
    }

    #[test]
    fn weekly_window_is_inclusive_of_six_days_back() {
        let kept = filter_by_period(sample(), Period::Weekly, d("2024-03-15"));
        assert_eq!(ids(&kept), vec![2, 3]);
    }

    #[test]
    fn longer_windows() {
        let as_of = d("2024-03-15");
        assert_eq!(ids(&filter_by_period(sample(), Period::Monthly, as_of)), vec![1, 2, 3]);
        assert_eq!(ids(&filter_by_period(sample(), Period::Quarterly, as_of)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_by_period(sample(), Period::HalfYearly, as_of)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_by_period(sample(), Period::Yearly, as_of)), vec![1, 2, 3, 4]);
        assert_eq!(ids(&filter_by_period(sample(), Period::All, as_of)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn employee_and_department_filters() {
        assert_eq!(ids(&filter_by_employee(sample(), Some("Bob"))), vec![3, 5]);
        assert_eq!(ids(&filter_by_employee(sample(), Some("All"))).len(), 5);
        assert_eq!(ids(&filter_by_employee(sample(), None)).len(), 5);
        assert!(filter_by_employee(sample(), Some("bob")).is_empty());

        assert_eq!(ids(&filter_by_department(sample(), Some("GIS"))), vec![1, 2, 4]);
        assert_eq!(ids(&filter_by_department(sample(), Some("all"))).len(), 5);
    }

    #[test]
    fn filter_values_are_trimmed_like_stored_ones() {
        assert_eq!(ids(&filter_by_employee(sample(), Some(" Alice "))), vec![1, 2]);
        assert_eq!(ids(&filter_by_department(sample(), Some("KMS  "))), vec![3, 5]);
        assert_eq!(filter_by_employee(sample(), Some("  All")).len(), 5);
    }

    #[test]
    fn summary_counts() {
        let rows = vec![
            report(1, "2024-03-08", "Alice", "GIS", "T1", false),
            report(2, "2024-03-09", "Alice", "GIS", "T2", true),
            report(3, "2024-03-15", "Bob", "KMS", "T1", false),
        ];
        let s = summarize(&rows);
        assert_eq!(s.total_count, 3);
        assert_eq!(s.pending_count, 1);
        assert_eq!(s.by_employee.get("Alice"), Some(&2));
        assert_eq!(s.by_employee.get("Bob"), Some(&1));
        assert_eq!(s.by_theme.get("T1"), Some(&2));
        assert_eq!(s.by_theme.get("T2"), Some(&1));
    }

    #[test]
    fn dashboard_applies_all_filters() {
        let q = DashboardQuery {
            period: Period::Yearly,
            as_of: d("2024-03-15"),
            employee: None,
            department: Some("GIS".into()),
        };
        let dash = Dashboard::build(sample(), &q);
        assert_eq!(ids(&dash.rows), vec![1, 2, 4]);
        assert_eq!(dash.summary.pending_count, 2);
        assert_eq!(dash.employees, vec!["Alice", "Bob", "Carol"]);
        assert_eq!(dash.departments, vec!["GIS", "KMS"]);
    }
}

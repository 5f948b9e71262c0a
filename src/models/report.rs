use crate::errors::{AppError, AppResult};
use crate::models::catalog;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Natural key of a report: one employee, one reporting week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportKey {
    pub employee: String,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}

impl ReportKey {
    pub fn new(employee: &str, week_start: NaiveDate, week_end: NaiveDate) -> Self {
        Self {
            employee: employee.trim().to_string(),
            week_start,
            week_end,
        }
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}..{}", self.employee, self.week_start, self.week_end)
    }
}

/// One editable work item, as supplied by the CLI or a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RowInput {
    pub theme: String,
    pub work: String,
    pub pending: bool,
    pub justification: String,
}

impl RowInput {
    /// The editor default shown when a week has nothing stored yet.
    pub fn placeholder() -> Self {
        Self {
            theme: catalog::first_theme().to_string(),
            ..Self::default()
        }
    }

    /// A row with no work, not pending and no justification carries nothing.
    pub fn is_blank(&self) -> bool {
        self.work.trim().is_empty() && !self.pending && self.justification.trim().is_empty()
    }

    /// Shape the row the way it is persisted, or `None` for a blank row.
    ///
    /// Trims free text, defaults the theme and drops the justification of
    /// items that are not pending.
    pub fn normalized(&self) -> Option<RowInput> {
        if self.is_blank() {
            return None;
        }

        let theme = match self.theme.trim() {
            "" => catalog::first_theme().to_string(),
            t => t.to_string(),
        };

        Some(RowInput {
            theme,
            work: self.work.trim().to_string(),
            pending: self.pending,
            justification: if self.pending {
                self.justification.trim().to_string()
            } else {
                String::new()
            },
        })
    }
}

fn parse_pending(raw: &str) -> AppResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "n" | "no" | "false" | "0" => Ok(false),
        "y" | "yes" | "true" | "1" | "pending" => Ok(true),
        other => Err(AppError::InvalidRow(format!(
            "pending flag '{other}' is not one of yes/no/true/false/1/0"
        ))),
    }
}

/// Parse `THEME|WORK|PENDING|JUSTIFICATION` (trailing fields optional).
///
/// THEME may be a catalog number, the full catalog name, or empty.
impl FromStr for RowInput {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.splitn(4, '|').collect();

        let theme = catalog::resolve_theme(parts[0])?
            .map(str::to_string)
            .unwrap_or_default();
        let work = parts.get(1).copied().unwrap_or("").to_string();
        let pending = parse_pending(parts.get(2).copied().unwrap_or(""))?;
        let justification = parts.get(3).copied().unwrap_or("").to_string();

        Ok(RowInput {
            theme,
            work,
            pending,
            justification,
        })
    }
}

/// One persisted row of the `reports` table.
///
/// Field order matches the table columns, so serde-driven CSV/JSON exports
/// come out with the schema's column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub id: i64,
    pub submission_date: NaiveDate,
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub employee: String,
    pub department: String,
    pub theme: String,
    pub work: String,
    pub pending: bool,
    pub justification: String,
    pub updated: String,
}

#[cfg(test)]
impl ReportRow {
    pub fn key(&self) -> ReportKey {
        ReportKey::new(&self.employee, self.week_start, self.week_end)
    }

    pub fn as_input(&self) -> RowInput {
        RowInput {
            theme: self.theme.clone(),
            work: self.work.clone(),
            pending: self.pending,
            justification: self.justification.clone(),
        }
    }
}

use chrono::{Datelike, Duration, NaiveDate};
use clap::ValueEnum;
use std::fmt;

/// Time window offered by the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Weekly,
    Monthly,
    Quarterly,
    #[value(name = "half-yearly", alias = "halfyearly", alias = "half_yearly")]
    HalfYearly,
    Yearly,
    All,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Weekly => "Weekly",
            Period::Monthly => "Monthly",
            Period::Quarterly => "Quarterly",
            Period::HalfYearly => "Half-Yearly",
            Period::Yearly => "Yearly",
            Period::All => "All",
        }
    }

    /// First submission date included in the window ending at `as_of`.
    /// `None` for `All`.
    pub fn start(&self, as_of: NaiveDate) -> Option<NaiveDate> {
        let y = as_of.year();
        match self {
            Period::Weekly => Some(as_of - Duration::days(6)),
            Period::Monthly => as_of.with_day(1),
            Period::Quarterly => {
                let first_month = ((as_of.month() - 1) / 3) * 3 + 1;
                NaiveDate::from_ymd_opt(y, first_month, 1)
            }
            Period::HalfYearly => {
                let first_month = if as_of.month() <= 6 { 1 } else { 7 };
                NaiveDate::from_ymd_opt(y, first_month, 1)
            }
            Period::Yearly => NaiveDate::from_ymd_opt(y, 1, 1),
            Period::All => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn weekly_goes_back_six_days() {
        assert_eq!(Period::Weekly.start(d(2024, 3, 15)), Some(d(2024, 3, 9)));
        assert_eq!(Period::Weekly.start(d(2024, 3, 3)), Some(d(2024, 2, 26)));
    }

    #[test]
    fn quarter_starts() {
        assert_eq!(Period::Quarterly.start(d(2024, 5, 10)), Some(d(2024, 4, 1)));
        assert_eq!(Period::Quarterly.start(d(2024, 1, 31)), Some(d(2024, 1, 1)));
        assert_eq!(Period::Quarterly.start(d(2024, 9, 30)), Some(d(2024, 7, 1)));
        assert_eq!(Period::Quarterly.start(d(2024, 12, 1)), Some(d(2024, 10, 1)));
    }

    #[test]
    fn month_half_year_and_year() {
        assert_eq!(Period::Monthly.start(d(2024, 2, 29)), Some(d(2024, 2, 1)));
        assert_eq!(Period::HalfYearly.start(d(2024, 6, 30)), Some(d(2024, 1, 1)));
        assert_eq!(Period::HalfYearly.start(d(2024, 7, 1)), Some(d(2024, 7, 1)));
        assert_eq!(Period::Yearly.start(d(2024, 11, 5)), Some(d(2024, 1, 1)));
        assert_eq!(Period::All.start(d(2024, 11, 5)), None);
    }

    #[test]
    fn parse_names() {
        let parse = |s: &str| <Period as ValueEnum>::from_str(s, true);
        assert_eq!(parse("Half-Yearly").unwrap(), Period::HalfYearly);
        assert_eq!(parse("half_yearly").unwrap(), Period::HalfYearly);
        assert_eq!(parse("ALL").unwrap(), Period::All);
        assert!(parse("fortnightly").is_err());
    }
}

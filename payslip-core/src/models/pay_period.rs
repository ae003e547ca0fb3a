use std::fmt;

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// The calendar month a slip is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PayPeriod {
    pub year: i32,
    pub month: u32,
}

impl PayPeriod {
    pub fn new(
        year: i32,
        month: u32,
    ) -> Self {
        Self { year, month }
    }

    /// First calendar day of the period, or `None` when the month is out of range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn is_valid(&self) -> bool {
        self.first_day().is_some()
    }

    /// Number of calendar days in the month.
    pub fn days_in_month(&self) -> Option<u32> {
        let first = self.first_day()?;
        let next = first.checked_add_months(Months::new(1))?;
        u32::try_from((next - first).num_days()).ok()
    }

    /// Human readable label such as "March 2025".
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(day) => day.format("%B %Y").to_string(),
            None => format!("{:02}/{}", self.month, self.year),
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.label())
    }
}

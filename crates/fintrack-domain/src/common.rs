//! Shared traits and calendar helpers for finance records.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Exposes the stable identifier of a stored record.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// A calendar month, used as the boundary for "once per period" rules and
/// for monthly aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PeriodKey {
    pub year: i32,
    pub month: u32,
}

impl PeriodKey {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Returns the period containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns `true` when `date` falls inside this period.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Returns the calendar month immediately before this one.
    pub fn previous(&self) -> Self {
        if self.month <= 1 {
            Self::new(self.year - 1, 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }

    /// Returns the calendar month immediately after this one.
    pub fn next(&self) -> Self {
        if self.month >= 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// First day of the period.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Number of days in the period.
    pub fn days(&self) -> u32 {
        let next = self.next();
        match (self.first_day(), next.first_day()) {
            (Some(start), Some(end)) => (end - start).num_days() as u32,
            _ => 0,
        }
    }
}

impl From<NaiveDate> for PeriodKey {
    fn from(date: NaiveDate) -> Self {
        PeriodKey::of(date)
    }
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Computes `part / whole` as a percentage capped at 100. A zero `whole`
/// yields 0 rather than an undefined ratio.
pub fn capped_percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole * 100.0).min(100.0)
    } else {
        0.0
    }
}

//! Recurring templates that the reconciliation pass turns into transactions.

use serde::{Deserialize, Serialize};

use crate::{category::Category, common::*, transaction::TransactionKind};

pub const SALARY_MARKER: &str = "Auto-Salary Credit";
const SCHEDULE_MARKER_SUFFIX: &str = " (Auto)";

/// A user-defined monthly transaction template.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecurringSchedule {
    pub id: String,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: Category,
    /// Day of the month (1..=31) on or after which the occurrence is due.
    pub day_of_month: u32,
}

impl RecurringSchedule {
    /// Description stamped on every transaction generated from this schedule.
    pub fn marker(&self) -> String {
        format!("{}{}", self.description, SCHEDULE_MARKER_SUFFIX)
    }
}

impl Identifiable for RecurringSchedule {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for RecurringSchedule {
    fn display_label(&self) -> String {
        format!(
            "{} {} on day {} [{}]",
            self.description, self.kind, self.day_of_month, self.category
        )
    }
}

/// Input for creating a [`RecurringSchedule`]; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleDraft {
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub category: Category,
    pub day_of_month: u32,
}

impl Default for ScheduleDraft {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: 0.0,
            kind: TransactionKind::Expense,
            category: Category::Utilities,
            day_of_month: 1,
        }
    }
}

/// Salary settings read from the profile scalars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalarySchedule {
    pub amount: f64,
    pub day_of_month: u32,
}

impl SalarySchedule {
    pub const DEFAULT_DAY: u32 = 1;

    /// Builds the schedule, returning `None` when the salary is absent or not positive.
    pub fn from_parts(amount: Option<f64>, day: Option<u32>) -> Option<Self> {
        let amount = amount.filter(|value| *value > 0.0)?;
        let day_of_month = day
            .filter(|value| *value > 0)
            .unwrap_or(Self::DEFAULT_DAY);
        Some(Self {
            amount,
            day_of_month,
        })
    }

    pub fn marker(&self) -> &'static str {
        SALARY_MARKER
    }
}

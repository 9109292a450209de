//! Materializes the salary credit and recurring items that are due in the
//! current calendar month.
//!
//! Occurrences are detected purely by scanning existing transactions for the
//! schedule's marker description within the current [`PeriodKey`], so the pass
//! is idempotent without any persisted scheduling state.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, trace};
use uuid::Uuid;

use fintrack_domain::{
    Category, PeriodKey, RecurringSchedule, SalarySchedule, Transaction, TransactionKind,
    UserProfile,
};

/// Result of one reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// Full history; newly created rows come first.
    pub transactions: Vec<Transaction>,
    /// `false` means `transactions` is exactly the input vector.
    pub changed: bool,
    pub created: usize,
}

/// Where a schedule stands within the current period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleStatus {
    /// An occurrence already exists this month.
    Materialized,
    /// The due day has passed but no occurrence exists yet.
    Due,
    /// The due day is later this month.
    Upcoming,
    /// The due day does not exist in this month.
    Skipped,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSnapshot {
    /// `None` for the salary credit.
    pub schedule_id: Option<String>,
    pub marker: String,
    pub amount: f64,
    pub kind: TransactionKind,
    pub day_of_month: u32,
    pub status: ScheduleStatus,
}

/// A due-check template shared by the salary credit and user schedules.
struct Template<'a> {
    marker: String,
    threshold: u32,
    amount: f64,
    kind: TransactionKind,
    category: Category,
    schedule_id: Option<&'a str>,
}

impl<'a> Template<'a> {
    fn salary(salary: SalarySchedule) -> Self {
        Self {
            marker: salary.marker().to_string(),
            threshold: salary.day_of_month,
            amount: salary.amount,
            kind: TransactionKind::Income,
            category: Category::Salary,
            schedule_id: None,
        }
    }

    fn schedule(rec: &'a RecurringSchedule) -> Self {
        Self {
            marker: rec.marker(),
            threshold: rec.day_of_month,
            amount: rec.amount,
            kind: rec.kind,
            category: rec.category,
            schedule_id: Some(rec.id.as_str()),
        }
    }

    fn is_materialized<'t>(
        &self,
        period: PeriodKey,
        mut history: impl Iterator<Item = &'t Transaction>,
    ) -> bool {
        history.any(|txn| txn.description == self.marker && period.contains(txn.date))
    }

    fn is_due(&self, today: NaiveDate) -> bool {
        today.day() >= self.threshold
    }

    fn materialize(&self, today: NaiveDate) -> Transaction {
        let suffix = Uuid::new_v4().simple().to_string();
        let id = match self.schedule_id {
            Some(schedule_id) => format!("auto-{schedule_id}-{suffix}"),
            None => format!("auto-salary-{suffix}"),
        };
        Transaction {
            id,
            amount: self.amount,
            kind: self.kind,
            category: self.category,
            description: self.marker.clone(),
            date: today,
        }
    }
}

/// Salary first, then each recurring item in profile order.
fn templates(profile: &UserProfile) -> impl Iterator<Item = Template<'_>> {
    profile
        .salary()
        .map(Template::salary)
        .into_iter()
        .chain(profile.recurring_transactions.iter().map(Template::schedule))
}

/// Builds the transactions that must be inserted so every due schedule has
/// exactly one occurrence in the period containing `today`.
///
/// Rows are returned in creation order. Each check also sees the rows created
/// earlier in the same pass, so two schedules sharing a marker yield one row.
pub fn materialize_due(
    transactions: &[Transaction],
    profile: &UserProfile,
    today: NaiveDate,
) -> Vec<Transaction> {
    let period = PeriodKey::of(today);
    templates(profile).fold(Vec::new(), |mut created, template| {
        if template.is_materialized(period, transactions.iter().chain(created.iter())) {
            trace!(marker = %template.marker, %period, "already materialized");
        } else if template.is_due(today) {
            let txn = template.materialize(today);
            debug!(
                marker = %txn.description,
                amount = txn.amount,
                id = %txn.id,
                "materialized recurring transaction"
            );
            created.push(txn);
        } else {
            trace!(
                marker = %template.marker,
                due_day = template.threshold,
                "not yet due"
            );
        }
        created
    })
}

/// Brings `transactions` up to date with the profile's salary and recurring
/// schedules as of `today`.
///
/// Existing rows are never modified or removed. New rows are prepended with the
/// most recently created one first. When nothing is due the input vector is
/// returned as-is with `changed == false`.
pub fn reconcile(
    transactions: Vec<Transaction>,
    profile: &UserProfile,
    today: NaiveDate,
) -> Reconciliation {
    let created = materialize_due(&transactions, profile, today);
    if created.is_empty() {
        return Reconciliation {
            transactions,
            changed: false,
            created: 0,
        };
    }

    let count = created.len();
    info!(created = count, period = %PeriodKey::of(today), "reconciled recurring items");
    let mut updated = Vec::with_capacity(transactions.len() + count);
    updated.extend(created.into_iter().rev());
    updated.extend(transactions);
    Reconciliation {
        transactions: updated,
        changed: true,
        created: count,
    }
}

/// Reports, for the salary credit and each recurring item, whether it has been
/// materialized in the period containing `today`.
pub fn snapshot_schedules(
    transactions: &[Transaction],
    profile: &UserProfile,
    today: NaiveDate,
) -> Vec<ScheduleSnapshot> {
    let period = PeriodKey::of(today);
    let month_length = period.days();
    templates(profile)
        .map(|template| {
            let status = if template.is_materialized(period, transactions.iter()) {
                ScheduleStatus::Materialized
            } else if template.is_due(today) {
                ScheduleStatus::Due
            } else if template.threshold > month_length {
                ScheduleStatus::Skipped
            } else {
                ScheduleStatus::Upcoming
            };
            ScheduleSnapshot {
                schedule_id: template.schedule_id.map(str::to_string),
                marker: template.marker,
                amount: template.amount,
                kind: template.kind,
                day_of_month: template.threshold,
                status,
            }
        })
        .collect()
}

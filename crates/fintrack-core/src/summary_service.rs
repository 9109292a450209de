//! Aggregations behind the dashboard: totals, month-over-month trends and
//! recent activity series.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use fintrack_domain::{PeriodKey, Transaction, TransactionKind};

const DEFAULT_PERFORMANCE_MONTHS: usize = 6;
const DEFAULT_DAILY_POINTS: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MonthlyStats {
    pub income: f64,
    pub expense: f64,
}

impl MonthlyStats {
    fn record(&mut self, txn: &Transaction) {
        match txn.kind {
            TransactionKind::Income => self.income += txn.amount,
            TransactionKind::Expense => self.expense += txn.amount,
        }
    }

    pub fn net(&self) -> f64 {
        self.income - self.expense
    }
}

/// Percent change of the current month against the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Trends {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyPerformance {
    pub period: PeriodKey,
    pub income: f64,
    pub expense: f64,
    /// Expense relative to the largest monthly expense in the series.
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotals {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
    pub net: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Income, expenses and balance over the whole history.
    pub fn totals(transactions: &[Transaction]) -> Totals {
        let stats = transactions
            .iter()
            .fold(MonthlyStats::default(), |mut acc, txn| {
                acc.record(txn);
                acc
            });
        Totals {
            income: stats.income,
            expenses: stats.expense,
            balance: stats.net(),
        }
    }

    pub fn monthly_stats(transactions: &[Transaction]) -> BTreeMap<PeriodKey, MonthlyStats> {
        let mut months: BTreeMap<PeriodKey, MonthlyStats> = BTreeMap::new();
        for txn in transactions {
            months.entry(txn.period()).or_default().record(txn);
        }
        months
    }

    /// Compares the month containing `today` with the month before it.
    pub fn trends(transactions: &[Transaction], today: NaiveDate) -> Trends {
        let months = Self::monthly_stats(transactions);
        let current_key = PeriodKey::of(today);
        let current = months.get(&current_key).copied().unwrap_or_default();
        let previous = months
            .get(&current_key.previous())
            .copied()
            .unwrap_or_default();
        Trends {
            income: percent_delta(current.income, previous.income),
            expense: percent_delta(current.expense, previous.expense),
            balance: percent_delta(current.net(), previous.net()),
        }
    }

    /// The last `months` months that have activity, oldest first.
    pub fn performance(transactions: &[Transaction], months: usize) -> Vec<MonthlyPerformance> {
        let stats = Self::monthly_stats(transactions);
        let skip = stats.len().saturating_sub(months);
        let recent: Vec<_> = stats.into_iter().skip(skip).collect();
        let max_expense = recent
            .iter()
            .map(|(_, month)| month.expense)
            .fold(1.0_f64, f64::max);
        recent
            .into_iter()
            .map(|(period, month)| MonthlyPerformance {
                period,
                income: month.income,
                expense: month.expense,
                percentage: month.expense / max_expense * 100.0,
            })
            .collect()
    }

    pub fn default_performance(transactions: &[Transaction]) -> Vec<MonthlyPerformance> {
        Self::performance(transactions, DEFAULT_PERFORMANCE_MONTHS)
    }

    /// Per-day totals for the last `limit` dates with activity, oldest first.
    pub fn daily_net(transactions: &[Transaction], limit: usize) -> Vec<DailyTotals> {
        let mut days: BTreeMap<NaiveDate, MonthlyStats> = BTreeMap::new();
        for txn in transactions {
            days.entry(txn.date).or_default().record(txn);
        }
        let skip = days.len().saturating_sub(limit);
        days.into_iter()
            .skip(skip)
            .map(|(date, day)| DailyTotals {
                date,
                income: day.income,
                expense: day.expense,
                net: day.net(),
            })
            .collect()
    }

    pub fn default_daily_net(transactions: &[Transaction]) -> Vec<DailyTotals> {
        Self::daily_net(transactions, DEFAULT_DAILY_POINTS)
    }

    /// The most recent transaction by date; ties go to the earlier list entry.
    pub fn latest(transactions: &[Transaction]) -> Option<&Transaction> {
        transactions
            .iter()
            .reduce(|best, txn| if txn.date > best.date { txn } else { best })
    }
}

/// Relative change from `previous` to `current`, in percent. A zero baseline
/// reports 100 when anything happened and 0 otherwise.
fn percent_delta(current: f64, previous: f64) -> f64 {
    if previous == 0.0 {
        if current > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (current - previous) / previous * 100.0
    }
}

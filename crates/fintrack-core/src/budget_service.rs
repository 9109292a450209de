//! Monthly per-category spending limits.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use fintrack_domain::{capped_percent, Budgets, Category, PeriodKey, Transaction};

use crate::CoreError;

/// Spending against one category limit in the current month.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetProgress {
    pub category: Category,
    pub spent: f64,
    pub limit: f64,
    pub percent: f64,
}

impl BudgetProgress {
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    pub fn is_over(&self) -> bool {
        self.spent > self.limit
    }
}

pub struct BudgetService;

impl BudgetService {
    /// Assigns or replaces the limit for `category`.
    pub fn set(budgets: &mut Budgets, category: Category, limit: f64) -> Result<(), CoreError> {
        if !category.is_budgetable() {
            return Err(CoreError::Validation(format!(
                "{category} cannot carry a spending limit"
            )));
        }
        if !(limit >= 0.0) || !limit.is_finite() {
            return Err(CoreError::Validation(format!(
                "budget limit must be zero or positive, got {limit}"
            )));
        }
        budgets.insert(category, limit);
        Ok(())
    }

    /// Clears the limit, returning whether one existed.
    pub fn remove(budgets: &mut Budgets, category: Category) -> bool {
        budgets.remove(&category).is_some()
    }

    /// Expenses of the month containing `today`, compared against each limit.
    pub fn progress(
        transactions: &[Transaction],
        budgets: &Budgets,
        today: NaiveDate,
    ) -> Vec<BudgetProgress> {
        let period = PeriodKey::of(today);
        let mut spent: BTreeMap<Category, f64> = BTreeMap::new();
        for txn in transactions
            .iter()
            .filter(|txn| txn.is_expense() && period.contains(txn.date))
        {
            *spent.entry(txn.category).or_default() += txn.amount;
        }

        budgets
            .iter()
            .map(|(category, limit)| {
                let spent = spent.get(category).copied().unwrap_or(0.0);
                BudgetProgress {
                    category: *category,
                    spent,
                    limit: *limit,
                    percent: capped_percent(spent, *limit),
                }
            })
            .collect()
    }
}

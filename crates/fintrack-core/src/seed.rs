//! Starter content for users who have never saved any data.

use chrono::NaiveDate;

use fintrack_domain::{
    Budgets, Category, SavingGoal, Transaction, TransactionKind, UserData, UserProfile,
};

const DEFAULT_MONTHLY_GOAL: f64 = 500.0;

fn sample(
    id: &str,
    amount: f64,
    kind: TransactionKind,
    category: Category,
    description: &str,
    day: u32,
) -> Option<Transaction> {
    let date = NaiveDate::from_ymd_opt(2024, 5, day)?;
    Some(Transaction::new(amount, kind, category, description, date).with_id(id))
}

/// Sample history shown to a brand new user.
pub fn initial_transactions() -> Vec<Transaction> {
    use Category::*;
    use TransactionKind::*;

    [
        sample("1", 3500.0, Income, Salary, "Monthly Salary", 1),
        sample("2", 1200.0, Expense, Rent, "Apartment Rent", 2),
        sample("3", 45.50, Expense, Food, "Grocery Store", 3),
        sample("4", 120.0, Expense, Transport, "Fuel", 5),
        sample("5", 80.0, Expense, Entertainment, "Movie Night", 7),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn initial_saving_goals() -> Vec<SavingGoal> {
    vec![
        SavingGoal::new("1", "MacBook Pro", 2400.0).with_current(850.0),
        SavingGoal::new("2", "Bali Trip", 3000.0).with_current(1200.0),
    ]
}

/// Default profile for `user` when no onboarding data was supplied.
pub fn default_profile(user: &str) -> UserProfile {
    let mut profile = UserProfile::new(user);
    profile.monthly_goal = DEFAULT_MONTHLY_GOAL;
    profile
}

/// Complete starter document for `user`.
pub fn seed_user_data(user: &str) -> UserData {
    UserData {
        transactions: initial_transactions(),
        budgets: Budgets::new(),
        profile: default_profile(user),
        saving_goals: initial_saving_goals(),
    }
}

//! Per-user orchestration: loading, reconciling and persisting a user's document.

use std::sync::Arc;

use tracing::{info, warn};

use fintrack_domain::{
    Budgets, Category, NewTransaction, RecurringSchedule, SavingGoal, ScheduleDraft, Transaction,
    UserData, UserProfile,
};

use crate::{
    budget_service::BudgetService,
    goal_service::GoalService,
    profile_service::ProfileService,
    reconcile::{reconcile, snapshot_schedules, ScheduleSnapshot},
    seed::seed_user_data,
    storage::{
        delete_user_data, load_user_data_lenient, save_user_data, user_data_key,
        user_data_warnings, KeyValueStorage,
    },
    time::Clock,
    transaction_service::TransactionService,
    CoreError,
};

/// What happened while a session was opened.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpenReport {
    /// No document existed and starter content was written.
    pub seeded: bool,
    /// Recurring transactions materialized during the load.
    pub created: usize,
    pub warnings: Vec<String>,
}

/// Holds one user's document in memory and writes every change through to storage.
///
/// Only one session per user should be active at a time; two sessions working
/// on stale copies can each materialize the same month's recurring items.
pub struct UserSession {
    user: String,
    data: UserData,
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    report: OpenReport,
}

impl UserSession {
    /// Loads `user` (seeding starter content when nothing is stored), reconciles
    /// recurring items and persists the document when anything changed.
    pub fn open(
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
        user: &str,
    ) -> Result<Self, CoreError> {
        let user = normalize_user(user)?;
        let (mut data, skipped, seeded) = match load_user_data_lenient(storage.as_ref(), &user)? {
            Some(loaded) => (loaded.data, loaded.skipped, false),
            None => {
                info!(user = %user, "no stored data, seeding starter content");
                (seed_user_data(&user), Vec::new(), true)
            }
        };

        let today = clock.today();
        let outcome = reconcile(std::mem::take(&mut data.transactions), &data.profile, today);
        data.transactions = outcome.transactions;
        if outcome.changed {
            data.profile.last_auto_update = Some(today);
        }

        let mut warnings = skipped;
        warnings.extend(user_data_warnings(&data));
        for warning in &warnings {
            warn!(user = %user, "{warning}");
        }

        let session = Self {
            user,
            data,
            storage,
            clock,
            report: OpenReport {
                seeded,
                created: outcome.created,
                warnings,
            },
        };
        if seeded || outcome.changed {
            session.save()?;
        }
        Ok(session)
    }

    /// Creates a new user with an onboarding profile and an empty history, then opens it.
    pub fn register(
        storage: Arc<dyn KeyValueStorage>,
        clock: Arc<dyn Clock>,
        user: &str,
        profile: UserProfile,
    ) -> Result<Self, CoreError> {
        let user = normalize_user(user)?;
        if Self::exists(storage.as_ref(), &user)? {
            return Err(CoreError::InvalidOperation(format!(
                "user `{user}` already exists"
            )));
        }
        save_user_data(storage.as_ref(), &user, &UserData::empty(profile))?;
        info!(user = %user, "registered user");
        Self::open(storage, clock, &user)
    }

    pub fn exists(storage: &dyn KeyValueStorage, user: &str) -> Result<bool, CoreError> {
        Ok(storage.get(&user_data_key(user.trim()))?.is_some())
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn data(&self) -> &UserData {
        &self.data
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.data.transactions
    }

    pub fn profile(&self) -> &UserProfile {
        &self.data.profile
    }

    pub fn budgets(&self) -> &Budgets {
        &self.data.budgets
    }

    pub fn goals(&self) -> &[SavingGoal] {
        &self.data.saving_goals
    }

    pub fn open_report(&self) -> &OpenReport {
        &self.report
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Runs reconciliation again against the current profile, persisting when
    /// something was created. Returns the number of new transactions.
    pub fn reconcile(&mut self) -> Result<usize, CoreError> {
        let today = self.clock.today();
        let outcome = reconcile(
            std::mem::take(&mut self.data.transactions),
            &self.data.profile,
            today,
        );
        self.data.transactions = outcome.transactions;
        if outcome.changed {
            self.data.profile.last_auto_update = Some(today);
            self.save()?;
        }
        Ok(outcome.created)
    }

    /// Salary and recurring items with their status in the current month.
    pub fn schedule_snapshots(&self) -> Vec<ScheduleSnapshot> {
        snapshot_schedules(&self.data.transactions, &self.data.profile, self.clock.today())
    }

    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<String, CoreError> {
        let id = TransactionService::add(&mut self.data, new)?;
        self.save()?;
        Ok(id)
    }

    pub fn delete_transaction(&mut self, id: &str) -> Result<Transaction, CoreError> {
        let removed = TransactionService::delete(&mut self.data, id)?;
        self.save()?;
        Ok(removed)
    }

    /// Replaces the profile. Reconciliation runs against the new profile before
    /// it is stored, so a newly added item whose day already passed is
    /// materialized immediately. Returns the number of new transactions.
    pub fn update_profile(&mut self, mut profile: UserProfile) -> Result<usize, CoreError> {
        let today = self.clock.today();
        let outcome = reconcile(std::mem::take(&mut self.data.transactions), &profile, today);
        self.data.transactions = outcome.transactions;
        if outcome.changed {
            profile.last_auto_update = Some(today);
        }
        self.data.profile = profile;
        self.save()?;
        Ok(outcome.created)
    }

    pub fn add_recurring(&mut self, draft: ScheduleDraft) -> Result<(String, usize), CoreError> {
        let mut profile = self.data.profile.clone();
        let id = ProfileService::add_recurring(&mut profile, draft)?;
        let created = self.update_profile(profile)?;
        Ok((id, created))
    }

    pub fn remove_recurring(&mut self, id: &str) -> Result<RecurringSchedule, CoreError> {
        let mut profile = self.data.profile.clone();
        let removed = ProfileService::remove_recurring(&mut profile, id)?;
        self.update_profile(profile)?;
        Ok(removed)
    }

    pub fn set_salary(&mut self, amount: f64, day_of_month: Option<u32>) -> Result<usize, CoreError> {
        let mut profile = self.data.profile.clone();
        ProfileService::set_salary(&mut profile, amount, day_of_month)?;
        self.update_profile(profile)
    }

    pub fn set_budget(&mut self, category: Category, limit: f64) -> Result<(), CoreError> {
        BudgetService::set(&mut self.data.budgets, category, limit)?;
        self.save()
    }

    pub fn remove_budget(&mut self, category: Category) -> Result<bool, CoreError> {
        let removed = BudgetService::remove(&mut self.data.budgets, category);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn add_goal(&mut self, name: &str, target_amount: f64) -> Result<String, CoreError> {
        let id = GoalService::add(&mut self.data.saving_goals, name, target_amount)?;
        self.save()?;
        Ok(id)
    }

    pub fn update_goal_amount(&mut self, id: &str, amount: f64) -> Result<(), CoreError> {
        GoalService::update_amount(&mut self.data.saving_goals, id, amount)?;
        self.save()
    }

    pub fn remove_goal(&mut self, id: &str) -> Result<SavingGoal, CoreError> {
        let removed = GoalService::remove(&mut self.data.saving_goals, id)?;
        self.save()?;
        Ok(removed)
    }

    /// Deletes the stored document of this user.
    pub fn delete_account(self) -> Result<(), CoreError> {
        delete_user_data(self.storage.as_ref(), &self.user)?;
        info!(user = %self.user, "deleted user data");
        Ok(())
    }

    pub fn save(&self) -> Result<(), CoreError> {
        save_user_data(self.storage.as_ref(), &self.user, &self.data)
    }
}

fn normalize_user(user: &str) -> Result<String, CoreError> {
    let trimmed = user.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("username is required".into()));
    }
    Ok(trimmed.to_string())
}

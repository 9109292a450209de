//! Edits to the recurring definitions held by a profile.
//!
//! These helpers only mutate the profile value. Callers that persist the
//! result are expected to reconcile against the edited profile afterwards so
//! newly due items are materialized.

use uuid::Uuid;

use fintrack_domain::{RecurringSchedule, ScheduleDraft, UserProfile};

use crate::CoreError;

const MAX_DAY_OF_MONTH: u32 = 31;

pub struct ProfileService;

impl ProfileService {
    /// Appends a recurring item, returning its id.
    pub fn add_recurring(
        profile: &mut UserProfile,
        draft: ScheduleDraft,
    ) -> Result<String, CoreError> {
        if draft.description.trim().is_empty() {
            return Err(CoreError::Validation(
                "recurring item needs a description".into(),
            ));
        }
        if !(draft.amount > 0.0) || !draft.amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "recurring amount must be positive, got {}",
                draft.amount
            )));
        }
        Self::validate_day(draft.day_of_month)?;

        let id = Uuid::new_v4().simple().to_string();
        profile.recurring_transactions.push(RecurringSchedule {
            id: id.clone(),
            description: draft.description.trim().to_string(),
            amount: draft.amount,
            kind: draft.kind,
            category: draft.category,
            day_of_month: draft.day_of_month,
        });
        Ok(id)
    }

    /// Removes a recurring item. Transactions it already produced are kept.
    pub fn remove_recurring(
        profile: &mut UserProfile,
        id: &str,
    ) -> Result<RecurringSchedule, CoreError> {
        let index = profile
            .recurring_transactions
            .iter()
            .position(|rec| rec.id == id)
            .ok_or_else(|| CoreError::ScheduleNotFound(id.to_string()))?;
        Ok(profile.recurring_transactions.remove(index))
    }

    /// Sets the monthly salary; an amount of zero disables crediting.
    pub fn set_salary(
        profile: &mut UserProfile,
        amount: f64,
        day_of_month: Option<u32>,
    ) -> Result<(), CoreError> {
        if !(amount >= 0.0) || !amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "salary cannot be negative, got {amount}"
            )));
        }
        if let Some(day) = day_of_month {
            Self::validate_day(day)?;
            profile.salary_day = Some(day);
        }
        profile.monthly_salary = if amount > 0.0 { Some(amount) } else { None };
        Ok(())
    }

    fn validate_day(day: u32) -> Result<(), CoreError> {
        if (1..=MAX_DAY_OF_MONTH).contains(&day) {
            Ok(())
        } else {
            Err(CoreError::Validation(format!(
                "day of month must be between 1 and {MAX_DAY_OF_MONTH}, got {day}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fintrack_domain::{Category, TransactionKind};

    fn draft(description: &str, day: u32) -> ScheduleDraft {
        ScheduleDraft {
            description: description.into(),
            amount: 12.5,
            kind: TransactionKind::Expense,
            category: Category::Utilities,
            day_of_month: day,
        }
    }

    #[test]
    fn add_and_remove_recurring() {
        let mut profile = UserProfile::new("ana");
        let id = ProfileService::add_recurring(&mut profile, draft("Phone", 12)).expect("add");
        assert_eq!(profile.schedule(&id).map(|s| s.day_of_month), Some(12));

        let removed = ProfileService::remove_recurring(&mut profile, &id).expect("remove");
        assert_eq!(removed.description, "Phone");
        assert!(profile.recurring_transactions.is_empty());
        assert!(matches!(
            ProfileService::remove_recurring(&mut profile, &id),
            Err(CoreError::ScheduleNotFound(_))
        ));
    }

    #[test]
    fn add_recurring_validates_day() {
        let mut profile = UserProfile::new("ana");
        assert!(ProfileService::add_recurring(&mut profile, draft("Phone", 0)).is_err());
        assert!(ProfileService::add_recurring(&mut profile, draft("Phone", 32)).is_err());
        assert!(ProfileService::add_recurring(&mut profile, draft("", 3)).is_err());
        assert!(ProfileService::add_recurring(&mut profile, draft("Phone", 31)).is_ok());
    }

    #[test]
    fn zero_salary_disables_crediting() {
        let mut profile = UserProfile::new("ana");
        ProfileService::set_salary(&mut profile, 2800.0, Some(25)).expect("set salary");
        assert_eq!(profile.salary().map(|s| s.day_of_month), Some(25));

        ProfileService::set_salary(&mut profile, 0.0, None).expect("disable");
        assert!(profile.salary().is_none());
        assert_eq!(profile.salary_day, Some(25));
    }
}

use uuid::Uuid;

use fintrack_domain::SavingGoal;

use crate::CoreError;

/// Manages the list of savings goals.
pub struct GoalService;

impl GoalService {
    /// Adds a goal starting at zero saved, returning its id.
    pub fn add(
        goals: &mut Vec<SavingGoal>,
        name: impl Into<String>,
        target_amount: f64,
    ) -> Result<String, CoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::Validation("goal name is required".into()));
        }
        if !(target_amount > 0.0) || !target_amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "goal target must be positive, got {target_amount}"
            )));
        }
        let id = Uuid::new_v4().simple().to_string();
        goals.push(SavingGoal::new(id.clone(), name.trim(), target_amount));
        Ok(id)
    }

    /// Replaces the saved amount of a goal.
    pub fn update_amount(
        goals: &mut [SavingGoal],
        id: &str,
        current_amount: f64,
    ) -> Result<(), CoreError> {
        if !(current_amount >= 0.0) || !current_amount.is_finite() {
            return Err(CoreError::Validation(format!(
                "saved amount cannot be negative, got {current_amount}"
            )));
        }
        let goal = goals
            .iter_mut()
            .find(|goal| goal.id == id)
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;
        goal.current_amount = current_amount;
        Ok(())
    }

    pub fn remove(goals: &mut Vec<SavingGoal>, id: &str) -> Result<SavingGoal, CoreError> {
        let index = goals
            .iter()
            .position(|goal| goal.id == id)
            .ok_or_else(|| CoreError::GoalNotFound(id.to_string()))?;
        Ok(goals.remove(index))
    }

    /// Sum of saved and target amounts across all goals.
    pub fn totals(goals: &[SavingGoal]) -> (f64, f64) {
        goals.iter().fold((0.0, 0.0), |(saved, target), goal| {
            (saved + goal.current_amount, target + goal.target_amount)
        })
    }
}

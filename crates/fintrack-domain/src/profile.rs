//! The per-user profile holding preferences and recurring definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{RecurringSchedule, SalarySchedule};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub currency: String,
    #[serde(default = "UserProfile::default_language")]
    pub language: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub monthly_goal: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tos_accepted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_seed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_salary: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_day: Option<u32>,
    #[serde(default)]
    pub recurring_transactions: Vec<RecurringSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_auto_update: Option<NaiveDate>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            currency: "€".into(),
            language: Self::default_language(),
            country: "Germany".into(),
            monthly_goal: 0.0,
            gender: None,
            age: None,
            tos_accepted: None,
            avatar_seed: None,
            monthly_salary: None,
            salary_day: None,
            recurring_transactions: Vec::new(),
            last_auto_update: None,
        }
    }

    pub fn default_language() -> String {
        "en".into()
    }

    /// Salary settings, or `None` when salary crediting is disabled.
    pub fn salary(&self) -> Option<SalarySchedule> {
        SalarySchedule::from_parts(self.monthly_salary, self.salary_day)
    }

    pub fn schedule(&self, id: &str) -> Option<&RecurringSchedule> {
        self.recurring_transactions.iter().find(|rec| rec.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_default_to_disabled() {
        let raw = r#"{"name":"ana","currency":"€","monthlyGoal":500}"#;
        let profile: UserProfile = serde_json::from_str(raw).expect("valid profile");
        assert!(profile.recurring_transactions.is_empty());
        assert!(profile.salary().is_none());
        assert_eq!(profile.language, "en");
    }

    #[test]
    fn salary_day_defaults_to_first() {
        let mut profile = UserProfile::new("ana");
        profile.monthly_salary = Some(2500.0);
        let salary = profile.salary().expect("salary enabled");
        assert_eq!(salary.day_of_month, 1);
        assert_eq!(salary.amount, 2500.0);
    }
}

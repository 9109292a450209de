use serde::{Deserialize, Serialize};

use crate::common::*;

/// A savings target the user funds manually.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    pub id: String,
    pub name: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SavingGoal {
    pub fn new(id: impl Into<String>, name: impl Into<String>, target_amount: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_amount,
            current_amount: 0.0,
            icon: None,
        }
    }

    pub fn with_current(mut self, current_amount: f64) -> Self {
        self.current_amount = current_amount;
        self
    }

    /// Share of the target already saved, capped at 100.
    pub fn progress_percent(&self) -> f64 {
        capped_percent(self.current_amount, self.target_amount)
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.current_amount).max(0.0)
    }
}

impl Identifiable for SavingGoal {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Displayable for SavingGoal {
    fn display_label(&self) -> String {
        format!("{} ({:.0}%)", self.name, self.progress_percent())
    }
}

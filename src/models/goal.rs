//! Savings goal model
//!
//! A goal tracks progress toward a target amount by a deadline. Completion
//! is derived from the amounts on every read and never persisted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::GoalId;
use super::money::Money;

/// Fields supplied by the caller when creating a goal
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: NaiveDate,
    pub category: String,
}

/// A savings goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_amount: Money,
    #[serde(default)]
    pub current_amount: Money,
    pub deadline: NaiveDate,
    #[serde(default)]
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Partial update of a goal; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_amount: Option<Money>,
    pub current_amount: Option<Money>,
    pub deadline: Option<NaiveDate>,
    pub category: Option<String>,
}

impl GoalPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the patch to a goal in place
    pub fn apply_to(&self, goal: &mut Goal) {
        if let Some(title) = &self.title {
            goal.title = title.clone();
        }
        if let Some(description) = &self.description {
            goal.description = description.clone();
        }
        if let Some(target) = self.target_amount {
            goal.target_amount = target;
        }
        if let Some(current) = self.current_amount {
            goal.current_amount = current;
        }
        if let Some(deadline) = self.deadline {
            goal.deadline = deadline;
        }
        if let Some(category) = &self.category {
            goal.category = category.clone();
        }
    }
}

impl Goal {
    /// Create a goal, assigning a fresh ID and creation timestamp
    pub fn new(new: NewGoal) -> Self {
        Self {
            id: GoalId::new(),
            title: new.title,
            description: new.description,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            deadline: new.deadline,
            category: new.category,
            created_at: Utc::now(),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Amount still missing, never negative
    pub fn remaining(&self) -> Money {
        if self.is_completed() {
            Money::zero()
        } else {
            self.target_amount - self.current_amount
        }
    }

    /// Past the deadline without being completed
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.deadline < today && !self.is_completed()
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} / {})",
            self.title, self.current_amount, self.target_amount
        )
    }
}

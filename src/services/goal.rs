//! Goal service
//!
//! Savings goals with contributions. The saved amount is clamped so it
//! never exceeds the target.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Goal, GoalPatch, Money, NewGoal};
use crate::storage::Storage;

use super::{require_non_negative, require_positive, require_text};

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

/// Input for creating a goal
#[derive(Debug, Clone)]
pub struct CreateGoalInput {
    pub title: String,
    pub description: String,
    pub target_amount: Money,
    pub current_amount: Money,
    pub deadline: NaiveDate,
    pub category: String,
}

impl<'a> GoalService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn create(&self, input: CreateGoalInput) -> LedgerResult<Goal> {
        let title = require_text(&input.title, "Title")?;
        let target_amount = require_positive(input.target_amount, "Target amount")?;
        let current_amount = require_non_negative(input.current_amount, "Current amount")?;

        let goal = self.storage.goals.append(NewGoal {
            title,
            description: input.description.trim().to_string(),
            target_amount,
            current_amount: current_amount.min(target_amount),
            deadline: input.deadline,
            category: input.category.trim().to_string(),
        })?;

        self.storage.log_create(
            EntityType::Goal,
            goal.id.to_string(),
            Some(goal.title.clone()),
            &goal,
        )?;

        info!(id = %goal.id, target = %goal.target_amount, "goal created");
        Ok(goal)
    }

    /// All goals, newest first
    pub fn list(&self) -> Vec<Goal> {
        self.storage.goals.list()
    }

    pub fn find(&self, identifier: &str) -> Option<Goal> {
        self.storage.goals.find(identifier)
    }

    fn resolve(&self, identifier: &str) -> LedgerResult<Goal> {
        self.find(identifier)
            .ok_or_else(|| LedgerError::goal_not_found(identifier))
    }

    /// Add money to a goal, clamping the saved amount at the target
    pub fn contribute(&self, identifier: &str, amount: Money) -> LedgerResult<Goal> {
        let amount = require_positive(amount, "Contribution")?;
        let goal = self.resolve(identifier)?;

        if goal.is_completed() {
            return Err(LedgerError::Validation(format!(
                "Goal '{}' is already completed",
                goal.title
            )));
        }

        let (before, after) = self
            .storage
            .goals
            .update_with(goal.id, |g| {
                g.current_amount = (g.current_amount + amount).min(g.target_amount);
            })?
            .ok_or_else(|| LedgerError::goal_not_found(identifier))?;

        self.storage.log_update(
            EntityType::Goal,
            after.id.to_string(),
            Some(after.title.clone()),
            &before,
            &after,
        )?;

        info!(
            id = %after.id,
            saved = %after.current_amount,
            completed = after.is_completed(),
            "goal contribution recorded"
        );
        Ok(after)
    }

    /// Apply a partial update to a goal
    pub fn update(&self, identifier: &str, patch: GoalPatch) -> LedgerResult<Goal> {
        let goal = self.resolve(identifier)?;
        if patch.is_empty() {
            return Ok(goal);
        }

        let patch = GoalPatch {
            title: patch.title.as_deref().map(|t| require_text(t, "Title")).transpose()?,
            target_amount: patch
                .target_amount
                .map(|a| require_positive(a, "Target amount"))
                .transpose()?,
            current_amount: patch
                .current_amount
                .map(|a| require_non_negative(a, "Current amount"))
                .transpose()?,
            ..patch
        };

        let (before, after) = self
            .storage
            .goals
            .update_with(goal.id, |g| {
                patch.apply_to(g);
                g.current_amount = g.current_amount.min(g.target_amount);
            })?
            .ok_or_else(|| LedgerError::goal_not_found(identifier))?;

        self.storage.log_update(
            EntityType::Goal,
            after.id.to_string(),
            Some(after.title.clone()),
            &before,
            &after,
        )?;

        Ok(after)
    }

    pub fn delete(&self, identifier: &str) -> LedgerResult<Goal> {
        let goal = self.resolve(identifier)?;
        let removed = self
            .storage
            .goals
            .remove(goal.id)?
            .ok_or_else(|| LedgerError::goal_not_found(identifier))?;

        self.storage.log_delete(
            EntityType::Goal,
            removed.id.to_string(),
            Some(removed.title.clone()),
            &removed,
        )?;

        info!(id = %removed.id, "goal deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::LedgerPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn laptop(target: i64) -> CreateGoalInput {
        CreateGoalInput {
            title: "Laptop".into(),
            description: "Work machine".into(),
            target_amount: Money::from_cents(target),
            current_amount: Money::zero(),
            deadline: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            category: "Tech".into(),
        }
    }

    #[test]
    fn test_create_validation() {
        let (_temp, storage) = create_test_storage();
        let service = GoalService::new(&storage);

        assert!(service.create(laptop(0)).unwrap_err().is_validation());

        let mut blank = laptop(1000);
        blank.title = "  ".into();
        assert!(service.create(blank).unwrap_err().is_validation());

        assert!(service.list().is_empty());
    }

    #[test]
    fn test_contribute_clamps_to_target() {
        let (_temp, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let goal = service.create(laptop(100000)).unwrap();

        let goal = service
            .contribute(&goal.id.to_string(), Money::from_cents(60000))
            .unwrap();
        assert_eq!(goal.current_amount.cents(), 60000);
        assert!(!goal.is_completed());

        let goal = service
            .contribute(&goal.id.to_string(), Money::from_cents(70000))
            .unwrap();
        assert_eq!(goal.current_amount, goal.target_amount);
        assert!(goal.is_completed());

        let again = service.contribute(&goal.id.to_string(), Money::from_cents(1));
        assert!(again.unwrap_err().is_validation());
    }

    #[test]
    fn test_contribute_rejects_non_positive() {
        let (_temp, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let goal = service.create(laptop(1000)).unwrap();

        let result = service.contribute(&goal.id.to_string(), Money::zero());
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_update_lowering_target_clamps_current() {
        let (_temp, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let goal = service.create(laptop(1000)).unwrap();
        service
            .contribute(&goal.id.to_string(), Money::from_cents(800))
            .unwrap();

        let updated = service
            .update(
                &goal.id.to_string(),
                GoalPatch {
                    target_amount: Some(Money::from_cents(500)),
                    ..GoalPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.current_amount.cents(), 500);
        assert!(updated.is_completed());
    }

    #[test]
    fn test_delete() {
        let (_temp, storage) = create_test_storage();
        let service = GoalService::new(&storage);
        let goal = service.create(laptop(1000)).unwrap();

        service.delete(&goal.id.to_string()).unwrap();
        assert!(service.list().is_empty());
        assert!(service.delete(&goal.id.to_string()).unwrap_err().is_not_found());
    }
}

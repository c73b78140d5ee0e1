//! Record traits tying the models to their collections

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};

use crate::models::{
    Debt, DebtId, DebtPatch, Goal, GoalId, GoalPatch, NewDebt, NewGoal, NewTransaction,
    Transaction, TransactionId,
};

/// A record stored in a [`Collection`](super::Collection)
pub trait Record: Clone + Serialize + DeserializeOwned {
    type Id: Copy + PartialEq + fmt::Display;

    /// Caller-supplied fields; the collection assigns the rest
    type Draft;

    /// Build a record with a fresh ID and creation timestamp
    fn create(draft: Self::Draft) -> Self;

    fn id(&self) -> Self::Id;

    /// Whether a user-supplied identifier (full or short form) names this record
    fn matches_id(&self, identifier: &str) -> bool;
}

/// A record that supports partial updates
pub trait Patchable: Record {
    type Patch;

    fn apply(&mut self, patch: &Self::Patch);
}

impl Record for Transaction {
    type Id = TransactionId;
    type Draft = NewTransaction;

    fn create(draft: NewTransaction) -> Self {
        Transaction::new(draft)
    }

    fn id(&self) -> TransactionId {
        self.id
    }

    fn matches_id(&self, identifier: &str) -> bool {
        self.id.matches(identifier)
    }
}

impl Record for Goal {
    type Id = GoalId;
    type Draft = NewGoal;

    fn create(draft: NewGoal) -> Self {
        Goal::new(draft)
    }

    fn id(&self) -> GoalId {
        self.id
    }

    fn matches_id(&self, identifier: &str) -> bool {
        self.id.matches(identifier)
    }
}

impl Patchable for Goal {
    type Patch = GoalPatch;

    fn apply(&mut self, patch: &GoalPatch) {
        patch.apply_to(self);
    }
}

impl Record for Debt {
    type Id = DebtId;
    type Draft = NewDebt;

    fn create(draft: NewDebt) -> Self {
        Debt::new(draft)
    }

    fn id(&self) -> DebtId {
        self.id
    }

    fn matches_id(&self, identifier: &str) -> bool {
        self.id.matches(identifier)
    }
}

impl Patchable for Debt {
    type Patch = DebtPatch;

    fn apply(&mut self, patch: &DebtPatch) {
        patch.apply_to(self);
    }
}

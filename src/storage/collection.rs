//! A JSON-array collection file
//!
//! Each collection lives in one file holding a JSON array, newest record
//! first. Every mutation reloads the whole array, changes it and writes it
//! back atomically while holding the collection's mutex.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, warn};

use crate::error::{LedgerError, LedgerResult};

use super::file_io::{read_json, write_json_atomic};
use super::records::{Patchable, Record};

/// Repository for one record collection
pub struct Collection<R> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Collection<R> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> LedgerResult<MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire collection lock: {}", e)))
    }

    /// Load the collection, failing on unreadable or corrupt files
    pub fn load(&self) -> LedgerResult<Vec<R>> {
        read_json(&self.path)
    }

    fn save(&self, records: &[R]) -> LedgerResult<()> {
        write_json_atomic(&self.path, records)
    }

    /// All records, newest first
    ///
    /// Read failures are logged and yield an empty list.
    pub fn list(&self) -> Vec<R> {
        match self.load() {
            Ok(records) => records,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read collection");
                Vec::new()
            }
        }
    }

    /// Find a record by full or short ID
    pub fn find(&self, identifier: &str) -> Option<R> {
        self.list().into_iter().find(|r| r.matches_id(identifier))
    }

    /// Create a record from a draft and store it at the front
    pub fn append(&self, draft: R::Draft) -> LedgerResult<R> {
        let _guard = self.guard()?;
        let mut records = self.load()?;

        let record = R::create(draft);
        records.insert(0, record.clone());
        self.save(&records)?;

        debug!(id = %record.id(), path = %self.path.display(), "record appended");
        Ok(record)
    }

    /// Remove the record with `id`, returning it; no-op when absent
    pub fn remove(&self, id: R::Id) -> LedgerResult<Option<R>> {
        let _guard = self.guard()?;
        let mut records = self.load()?;

        let Some(index) = records.iter().position(|r| r.id() == id) else {
            debug!(%id, "remove skipped, record absent");
            return Ok(None);
        };

        let removed = records.remove(index);
        self.save(&records)?;
        Ok(Some(removed))
    }

    /// Empty the collection, returning how many records were dropped
    ///
    /// A corrupt file is reported and left in place.
    pub fn clear(&self) -> LedgerResult<usize> {
        let _guard = self.guard()?;
        let count = self.load()?.len();
        self.save(&[])?;
        Ok(count)
    }
}

impl<R: Patchable> Collection<R> {
    /// Apply a partial update; no-op when `id` is absent
    ///
    /// Returns the record before and after the change.
    pub fn update(&self, id: R::Id, patch: &R::Patch) -> LedgerResult<Option<(R, R)>> {
        self.update_with(id, |record| record.apply(patch))
    }

    /// Mutate a record in place under the collection lock
    ///
    /// Used when the new value depends on the stored one, such as adding a
    /// contribution to a running total.
    pub fn update_with<F>(&self, id: R::Id, change: F) -> LedgerResult<Option<(R, R)>>
    where
        F: FnOnce(&mut R),
    {
        let _guard = self.guard()?;
        let mut records = self.load()?;

        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            debug!(%id, "update skipped, record absent");
            return Ok(None);
        };

        let before = record.clone();
        change(record);
        let after = record.clone();

        self.save(&records)?;
        Ok(Some((before, after)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Goal, GoalId, GoalPatch, Money, NewGoal, NewTransaction, Transaction, TransactionType,
    };
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn draft(description: &str) -> NewTransaction {
        NewTransaction {
            kind: TransactionType::Expense,
            amount: Money::from_cents(1000),
            description: description.to_string(),
            category: "food".to_string(),
            date: date(1),
        }
    }

    fn goal_draft() -> NewGoal {
        NewGoal {
            title: "Bike".into(),
            description: String::new(),
            target_amount: Money::from_cents(50000),
            current_amount: Money::zero(),
            deadline: date(31),
            category: "Sport".into(),
        }
    }

    fn transactions(dir: &TempDir) -> Collection<Transaction> {
        Collection::new(dir.path().join("transactions.json"))
    }

    #[test]
    fn test_append_lists_newest_first() {
        let dir = TempDir::new().unwrap();
        let collection = transactions(&dir);

        for name in ["first", "second", "third"] {
            collection.append(draft(name)).unwrap();
        }

        let listed: Vec<String> = collection
            .list()
            .into_iter()
            .map(|t| t.description)
            .collect();
        assert_eq!(listed, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_remove_only_matching_record() {
        let dir = TempDir::new().unwrap();
        let collection = transactions(&dir);

        let a = collection.append(draft("a")).unwrap();
        let b = collection.append(draft("b")).unwrap();
        let c = collection.append(draft("c")).unwrap();

        let removed = collection.remove(b.id).unwrap().unwrap();
        assert_eq!(removed.id, b.id);

        let ids: Vec<_> = collection.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![c.id, a.id]);

        assert!(collection.remove(b.id).unwrap().is_none());
        assert_eq!(collection.list().len(), 2);
    }

    #[test]
    fn test_update_absent_id_is_noop() {
        let dir = TempDir::new().unwrap();
        let goals: Collection<Goal> = Collection::new(dir.path().join("goals.json"));
        goals.append(goal_draft()).unwrap();

        let patch = GoalPatch {
            title: Some("Car".into()),
            ..GoalPatch::default()
        };
        assert!(goals.update(GoalId::new(), &patch).unwrap().is_none());
        assert_eq!(goals.list()[0].title, "Bike");
    }

    #[test]
    fn test_update_returns_before_and_after() {
        let dir = TempDir::new().unwrap();
        let goals: Collection<Goal> = Collection::new(dir.path().join("goals.json"));
        let goal = goals.append(goal_draft()).unwrap();

        let patch = GoalPatch {
            current_amount: Some(Money::from_cents(12000)),
            ..GoalPatch::default()
        };
        let (before, after) = goals.update(goal.id, &patch).unwrap().unwrap();

        assert_eq!(before.current_amount, Money::zero());
        assert_eq!(after.current_amount.cents(), 12000);
        assert_eq!(goals.list()[0].current_amount.cents(), 12000);
    }

    #[test]
    fn test_corrupt_file_reads_empty_but_blocks_writes() {
        let dir = TempDir::new().unwrap();
        let collection = transactions(&dir);
        std::fs::write(collection.path(), "not json").unwrap();

        assert!(collection.list().is_empty());
        assert!(collection.append(draft("x")).is_err());
        assert_eq!(std::fs::read_to_string(collection.path()).unwrap(), "not json");
    }

    #[test]
    fn test_find_by_short_id() {
        let dir = TempDir::new().unwrap();
        let collection = transactions(&dir);
        let txn = collection.append(draft("Taxi")).unwrap();

        let found = collection.find(&txn.id.to_string()).unwrap();
        assert_eq!(found.id, txn.id);
        assert!(collection.find("txn-zzzzzzzz").is_none());
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let collection = transactions(&dir);
        collection.append(draft("a")).unwrap();
        collection.append(draft("b")).unwrap();

        assert_eq!(collection.clear().unwrap(), 2);
        assert!(collection.list().is_empty());
        assert!(collection.path().exists());
    }

    #[test]
    fn test_clear_refuses_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let collection = transactions(&dir);
        std::fs::write(collection.path(), "[{\"broken").unwrap();

        assert!(matches!(collection.clear(), Err(LedgerError::Storage(_))));
        assert_eq!(
            std::fs::read_to_string(collection.path()).unwrap(),
            "[{\"broken"
        );
    }

    #[test]
    fn test_concurrent_appends_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let collection = transactions(&dir);

        std::thread::scope(|scope| {
            for i in 0..8 {
                let collection = &collection;
                scope.spawn(move || {
                    collection.append(draft(&format!("t{}", i))).unwrap();
                });
            }
        });

        assert_eq!(collection.list().len(), 8);
    }
}

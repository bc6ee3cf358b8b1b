//! # JSON Ledger Repository
//!
//! File-based record storage using a single JSON document as the
//! persistence slot. The whole ledger is rewritten on every mutation;
//! there are no partial writes, no versioning, and no migration logic.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "records": [
//!     { "id": 1754455900123, "registrant": "Kai", "type": "dishes",
//!       "amount": 300, "date": "2026-08-06T04:11:40.123Z" }
//!   ]
//! }
//! ```
//!
//! Records are kept newest-first; the file order is the display order.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;

use super::connection::JsonConnection;
use crate::domain::models::record::{RewardLedger, RewardRecord};
use crate::storage::traits::RecordStorage;

/// JSON-file-backed record repository.
#[derive(Clone)]
pub struct LedgerRepository {
    connection: JsonConnection,
}

impl LedgerRepository {
    /// Create a new JSON ledger repository.
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Load the ledger from the data file.
    ///
    /// A missing, unreadable, or unparsable file yields an empty ledger;
    /// corrupt data is indistinguishable from "no data yet" to callers.
    pub fn load_ledger(&self) -> RewardLedger {
        let data_path = self.connection.data_file_path();

        if !data_path.exists() {
            debug!("No ledger file at {}, starting empty", data_path.display());
            return RewardLedger::default();
        }

        let contents = match fs::read_to_string(&data_path) {
            Ok(contents) => contents,
            Err(e) => {
                warn!(
                    "Failed to read ledger file {}: {}. Starting empty.",
                    data_path.display(),
                    e
                );
                return RewardLedger::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(ledger) => ledger,
            Err(e) => {
                warn!(
                    "Failed to parse ledger file {}: {}. Starting empty.",
                    data_path.display(),
                    e
                );
                RewardLedger::default()
            }
        }
    }

    /// Persist the full ledger, overwriting any prior contents.
    pub fn save_ledger(&self, ledger: &RewardLedger) -> Result<()> {
        let data_path = self.connection.data_file_path();
        let json = serde_json::to_string_pretty(ledger)?;

        // Atomic write pattern: write to temp file, then rename.
        let temp_path = data_path.with_extension("tmp");
        fs::write(&temp_path, json)
            .with_context(|| format!("failed to write {}", temp_path.display()))?;
        fs::rename(&temp_path, &data_path)
            .with_context(|| format!("failed to replace {}", data_path.display()))?;

        debug!(
            "Saved {} records to {}",
            ledger.records.len(),
            data_path.display()
        );
        Ok(())
    }
}

impl RecordStorage for LedgerRepository {
    fn store_record(&self, record: &RewardRecord) -> Result<()> {
        let mut ledger = self.load_ledger();
        ledger.records.insert(0, record.clone());
        self.save_ledger(&ledger)
    }

    fn get_record(&self, record_id: i64) -> Result<Option<RewardRecord>> {
        Ok(self
            .load_ledger()
            .records
            .into_iter()
            .find(|r| r.id == record_id))
    }

    fn list_records(&self) -> Result<Vec<RewardRecord>> {
        Ok(self.load_ledger().records)
    }

    fn delete_record(&self, record_id: i64) -> Result<bool> {
        let mut ledger = self.load_ledger();
        let original_len = ledger.records.len();
        ledger.records.retain(|r| r.id != record_id);

        if ledger.records.len() < original_len {
            self.save_ledger(&ledger)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    fn clear_records(&self) -> Result<u32> {
        let mut ledger = self.load_ledger();
        let removed = ledger.records.len() as u32;

        if removed > 0 {
            ledger.records.clear();
            self.save_ledger(&ledger)?;
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::json::test_utils::{sample_record, TestEnvironment};
    use std::fs;

    fn setup_test_repo() -> Result<(LedgerRepository, TestEnvironment)> {
        let env = TestEnvironment::new()?;
        let repo = LedgerRepository::new(env.connection.clone());
        Ok((repo, env))
    }

    #[test]
    fn test_store_and_retrieve_record() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        let record = sample_record(1, "Kai", "dishes", 300, "2026-08-01T10:30:00Z");
        repo.store_record(&record)?;

        let retrieved = repo.get_record(1)?;
        assert_eq!(retrieved, Some(record));
        Ok(())
    }

    #[test]
    fn test_store_prepends_newest_first() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        repo.store_record(&sample_record(1, "A", "sweep", 100, "2026-08-01T08:00:00Z"))?;
        repo.store_record(&sample_record(2, "B", "mop", 200, "2026-08-01T09:00:00Z"))?;
        repo.store_record(&sample_record(3, "C", "dust", 300, "2026-08-01T10:00:00Z"))?;

        let ids: Vec<i64> = repo.list_records()?.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        Ok(())
    }

    #[test]
    fn test_round_trip_through_fresh_repository() -> Result<()> {
        let (repo, env) = setup_test_repo()?;

        repo.store_record(&sample_record(1, "Kai", "dishes", 300, "2026-08-01T10:00:00Z"))?;
        repo.store_record(&sample_record(2, "Mio", "laundry", 150, "2026-08-02T11:00:00Z"))?;
        let before = repo.list_records()?;

        // A new repository over the same directory simulates a restart.
        let repo2 = LedgerRepository::new(env.connection.clone());
        let after = repo2.list_records()?;

        assert_eq!(before, after);
        Ok(())
    }

    #[test]
    fn test_delete_is_idempotent() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        repo.store_record(&sample_record(1, "Kai", "dishes", 300, "2026-08-01T10:00:00Z"))?;
        repo.store_record(&sample_record(2, "Mio", "laundry", 150, "2026-08-02T11:00:00Z"))?;

        assert!(repo.delete_record(1)?);
        let after_first = repo.list_records()?;

        assert!(!repo.delete_record(1)?);
        assert_eq!(repo.list_records()?, after_first);
        assert_eq!(after_first.len(), 1);
        Ok(())
    }

    #[test]
    fn test_delete_unknown_id_is_noop() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        repo.store_record(&sample_record(1, "Kai", "dishes", 300, "2026-08-01T10:00:00Z"))?;
        assert!(!repo.delete_record(999)?);
        assert_eq!(repo.list_records()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_corrupt_file_loads_as_empty_ledger() -> Result<()> {
        let (repo, env) = setup_test_repo()?;

        fs::write(env.connection.data_file_path(), "{ not json !!!")?;
        assert!(repo.list_records()?.is_empty());

        // The next mutation overwrites the slot with a valid ledger.
        repo.store_record(&sample_record(1, "Kai", "dishes", 300, "2026-08-01T10:00:00Z"))?;
        let repo2 = LedgerRepository::new(env.connection.clone());
        assert_eq!(repo2.list_records()?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_missing_file_loads_as_empty_ledger() -> Result<()> {
        let (repo, env) = setup_test_repo()?;

        assert!(!env.connection.data_file_path().exists());
        assert!(repo.list_records()?.is_empty());
        Ok(())
    }

    #[test]
    fn test_clear_records_empties_and_counts() -> Result<()> {
        let (repo, _env) = setup_test_repo()?;

        repo.store_record(&sample_record(1, "Kai", "dishes", 300, "2026-08-01T10:00:00Z"))?;
        repo.store_record(&sample_record(2, "Mio", "laundry", 150, "2026-08-02T11:00:00Z"))?;

        assert_eq!(repo.clear_records()?, 2);
        assert!(repo.list_records()?.is_empty());
        assert_eq!(repo.clear_records()?, 0);
        Ok(())
    }

    #[test]
    fn test_task_field_serializes_as_type() -> Result<()> {
        let (repo, env) = setup_test_repo()?;

        repo.store_record(&sample_record(1, "Kai", "dishes", 300, "2026-08-01T10:00:00Z"))?;

        let contents = fs::read_to_string(env.connection.data_file_path())?;
        assert!(contents.contains("\"type\": \"dishes\""));
        assert!(!contents.contains("\"task\""));
        Ok(())
    }
}

//! Record service domain logic for the chore-reward tracker.
//!
//! The service owns the canonical record list through its repository:
//! every mutation is persisted before the call returns, so the stored
//! slot and what callers observe never drift apart.

use anyhow::Result;
use chrono::Utc;
use log::{debug, info};
use thiserror::Error;

use crate::domain::commands::{CreateRecordCommand, DeleteRecordCommand};
use crate::domain::models::record::RewardRecord;
use crate::storage::traits::{Connection, RecordStorage};

/// Why a create request was rejected.
///
/// Rejections never cross the service boundary as errors; the create is
/// a silent no-op and the reason only shows up in the debug log.
#[derive(Debug, Error, PartialEq, Eq)]
enum ValidationError {
    #[error("registrant must not be blank")]
    EmptyRegistrant,
    #[error("task must not be blank")]
    EmptyTask,
    #[error("amount {0:?} does not parse as an integer")]
    UnparsableAmount(String),
}

#[derive(Debug)]
struct ValidatedInput {
    registrant: String,
    task: String,
    amount: i64,
}

fn validate(command: &CreateRecordCommand) -> Result<ValidatedInput, ValidationError> {
    let registrant = command.registrant.trim();
    if registrant.is_empty() {
        return Err(ValidationError::EmptyRegistrant);
    }

    let task = command.task.trim();
    if task.is_empty() {
        return Err(ValidationError::EmptyTask);
    }

    let amount = command
        .amount
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::UnparsableAmount(command.amount.clone()))?;

    Ok(ValidatedInput {
        registrant: registrant.to_string(),
        task: task.to_string(),
        amount,
    })
}

/// Decides whether a pending delete should go ahead.
///
/// The store itself never prompts: deletes are unconditional and
/// idempotent given an id. A UI that wants a confirmation dialog plugs
/// it in through [`RecordService::delete_record_confirmed`]. Any
/// `Fn(&RewardRecord) -> bool` works as a policy.
pub trait ConfirmationPolicy {
    fn confirm_delete(&self, record: &RewardRecord) -> bool;
}

impl<F> ConfirmationPolicy for F
where
    F: Fn(&RewardRecord) -> bool,
{
    fn confirm_delete(&self, record: &RewardRecord) -> bool {
        self(record)
    }
}

/// Service for creating, deleting, and listing reward records.
pub struct RecordService<C: Connection> {
    record_repository: C::RecordRepository,
}

impl<C: Connection> RecordService<C> {
    pub fn new(connection: &C) -> Self {
        Self {
            record_repository: connection.create_record_repository(),
        }
    }

    /// Create a record from raw form input.
    ///
    /// Registrant and task must be non-empty after trimming and the
    /// amount must parse as an integer. On any violation the operation
    /// is a no-op: nothing is created, nothing is persisted, and the
    /// result is `Ok(None)`. On success the new record gets a fresh id
    /// and timestamp, lands at the front of the ledger, and is returned.
    pub fn create_record(&self, command: CreateRecordCommand) -> Result<Option<RewardRecord>> {
        let input = match validate(&command) {
            Ok(input) => input,
            Err(reason) => {
                debug!("Rejected record create: {}", reason);
                return Ok(None);
            }
        };

        let now = Utc::now();
        let newest_id = self
            .record_repository
            .list_records()?
            .iter()
            .map(|r| r.id)
            .max();

        let record = RewardRecord {
            id: RewardRecord::next_id(now, newest_id),
            registrant: input.registrant,
            task: input.task,
            amount: input.amount,
            date: now,
        };

        self.record_repository.store_record(&record)?;
        info!(
            "Created record {} for '{}' ({})",
            record.id, record.registrant, record.amount
        );
        Ok(Some(record))
    }

    /// Delete a record by id.
    ///
    /// Idempotent: returns true when a record was removed, false when
    /// the id was not found (a no-op).
    pub fn delete_record(&self, command: DeleteRecordCommand) -> Result<bool> {
        let deleted = self.record_repository.delete_record(command.record_id)?;
        if deleted {
            info!("Deleted record {}", command.record_id);
        } else {
            debug!("Delete of unknown record {} ignored", command.record_id);
        }
        Ok(deleted)
    }

    /// Delete a record, gated by a caller-supplied confirmation policy.
    ///
    /// The policy sees the record about to be removed; declining leaves
    /// the ledger untouched and returns false.
    pub fn delete_record_confirmed<P: ConfirmationPolicy>(
        &self,
        command: DeleteRecordCommand,
        policy: &P,
    ) -> Result<bool> {
        let record = match self.record_repository.get_record(command.record_id)? {
            Some(record) => record,
            None => return Ok(false),
        };

        if !policy.confirm_delete(&record) {
            debug!("Delete of record {} declined by policy", command.record_id);
            return Ok(false);
        }

        self.delete_record(command)
    }

    /// Remove every record. Returns the number of records dropped.
    pub fn clear_records(&self) -> Result<u32> {
        let removed = self.record_repository.clear_records()?;
        if removed > 0 {
            info!("Cleared {} records", removed);
        }
        Ok(removed)
    }

    /// All records in stored order (newest insertion first).
    pub fn list_records(&self) -> Result<Vec<RewardRecord>> {
        self.record_repository.list_records()
    }
}

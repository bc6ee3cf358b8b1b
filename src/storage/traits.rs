//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use anyhow::Result;
use crate::domain::models::record::RewardRecord;

/// Trait defining the interface for reward record storage operations.
///
/// The domain layer works against this trait so the persistence format
/// (a JSON file here, anything else elsewhere) stays an implementation
/// detail. All operations are synchronous; the tracker is single-process
/// and event-driven on user actions only.
pub trait RecordStorage: Send + Sync {
    /// Store a new record at the front of the ledger.
    fn store_record(&self, record: &RewardRecord) -> Result<()>;

    /// Retrieve a specific record by id.
    fn get_record(&self, record_id: i64) -> Result<Option<RewardRecord>>;

    /// List all records in stored order (newest insertion first).
    fn list_records(&self) -> Result<Vec<RewardRecord>>;

    /// Delete a single record.
    /// Returns true if the record was found and deleted, false otherwise.
    fn delete_record(&self, record_id: i64) -> Result<bool>;

    /// Delete every record.
    /// Returns the number of records removed.
    fn clear_records(&self) -> Result<u32>;
}

/// Trait defining the interface for storage connections.
///
/// A connection owns the location of the persisted data and acts as a
/// factory for repositories, so domain services can be generic over the
/// backend without naming a concrete repository type.
pub trait Connection: Send + Sync + Clone {
    /// The type of RecordStorage this connection creates.
    type RecordRepository: RecordStorage;

    /// Create a new record repository for this connection.
    fn create_record_repository(&self) -> Self::RecordRepository;
}

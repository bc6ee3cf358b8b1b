//! Domain model for a reward record.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One completed chore-reward event.
///
/// Records are immutable once created: they are only ever added to the
/// front of the ledger or removed by id, never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardRecord {
    /// Unique id, monotonically increasing in creation order.
    pub id: i64,
    /// Display name of the person credited.
    pub registrant: String,
    /// Free-text description of the task performed.
    #[serde(rename = "type")]
    pub task: String,
    /// Integer reward value.
    pub amount: i64,
    /// Creation timestamp, assigned once.
    pub date: DateTime<Utc>,
}

impl RewardRecord {
    /// Pick the id for a record created at `now`.
    ///
    /// Ids are millisecond timestamps, bumped past the newest existing id
    /// when two creates land in the same millisecond so that ids stay
    /// unique and strictly increasing.
    pub fn next_id(now: DateTime<Utc>, newest_existing: Option<i64>) -> i64 {
        let candidate = now.timestamp_millis();
        match newest_existing {
            Some(newest) if candidate <= newest => newest + 1,
            _ => candidate,
        }
    }
}

/// The persisted aggregate: every record, newest insertion first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RewardLedger {
    pub records: Vec<RewardRecord>,
}

/// Test utilities for automatic cleanup and consistent test infrastructure.
///
/// The temporary data directory lives as long as the environment value
/// and is removed when it drops, even if the test panics.
use anyhow::Result;
use chrono::{DateTime, Utc};
use tempfile::TempDir;

use super::connection::JsonConnection;
use crate::domain::models::record::RewardRecord;

/// Test environment providing a connection over a temporary directory.
pub struct TestEnvironment {
    pub connection: JsonConnection,
    /// Base directory path for manual inspection if needed.
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // keep alive to defer cleanup
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = JsonConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Build a record with an explicit id and RFC 3339 date.
pub fn sample_record(
    id: i64,
    registrant: &str,
    task: &str,
    amount: i64,
    date: &str,
) -> RewardRecord {
    RewardRecord {
        id,
        registrant: registrant.to_string(),
        task: task.to_string(),
        amount,
        date: date
            .parse::<DateTime<Utc>>()
            .expect("test date must be valid RFC 3339"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;
        {
            let env = TestEnvironment::new()?;
            base_path = env.base_path.clone();
            assert!(base_path.exists());
            // Environment dropped here
        }
        assert!(!base_path.exists());
        Ok(())
    }
}

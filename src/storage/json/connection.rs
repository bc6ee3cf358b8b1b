use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::traits::Connection;

/// File name of the single persisted ledger slot.
pub const DATA_FILE_NAME: &str = "reward_data.json";

/// JsonConnection manages the data directory holding the ledger file.
#[derive(Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new connection with a base directory, creating the
    /// directory if it does not exist yet.
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new connection in the default data directory,
    /// `~/Documents/Chore Rewards`.
    pub fn new_default() -> Result<Self> {
        let home_dir = dirs::home_dir()
            .or_else(|| std::env::var("HOME").ok().map(PathBuf::from))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = home_dir.join("Documents").join("Chore Rewards");
        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    /// Get the base directory path.
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the path of the persisted ledger file.
    pub fn data_file_path(&self) -> PathBuf {
        self.base_directory.join(DATA_FILE_NAME)
    }
}

impl Connection for JsonConnection {
    type RecordRepository = super::ledger_repository::LedgerRepository;

    fn create_record_repository(&self) -> Self::RecordRepository {
        super::ledger_repository::LedgerRepository::new(self.clone())
    }
}

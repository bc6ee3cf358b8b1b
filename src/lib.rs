//! # Chore Reward Tracker Backend
//!
//! Backend library for a household chore-reward tracker: who did a task,
//! what the task was, and what it earned. Records persist in a single
//! local JSON slot; the dashboard view is a per-person total for the
//! current calendar month.
//!
//! This backend:
//! - Uses synchronous operations (no async/await)
//! - Provides direct access to domain services
//! - Has no IO/REST layer; presentation is the consumer's concern
//! - Is optimized for single-process desktop operation

use anyhow::Result;

pub mod domain;
pub mod storage;

pub use domain::color_hint::hue_for_name;
pub use domain::commands::{CreateRecordCommand, DeleteRecordCommand};
pub use domain::models::record::{RewardLedger, RewardRecord};
pub use domain::record_service::{ConfirmationPolicy, RecordService};
pub use domain::summary_service::{MonthlySummary, RegistrantTotal, SummaryService};
pub use storage::json::JsonConnection;

/// Main backend struct that wires the services to a data directory.
///
/// One instance per process; the caller owns it and passes it wherever
/// record access is needed. There is no ambient singleton.
pub struct Backend {
    pub record_service: RecordService<JsonConnection>,
    pub summary_service: SummaryService,
}

impl Backend {
    /// Create a backend over an explicit data directory.
    pub fn new<P: AsRef<std::path::Path>>(data_dir: P) -> Result<Self> {
        let connection = JsonConnection::new(data_dir)?;
        Ok(Self::with_connection(connection))
    }

    /// Create a backend in the default data directory
    /// (`~/Documents/Chore Rewards`).
    pub fn new_default() -> Result<Self> {
        Ok(Self::with_connection(JsonConnection::new_default()?))
    }

    fn with_connection(connection: JsonConnection) -> Self {
        let record_service = RecordService::new(&connection);
        let summary_service = SummaryService::new();
        Self {
            record_service,
            summary_service,
        }
    }

    /// Dashboard summary for the calendar month containing the current
    /// wall-clock time. The only place the clock binds; pass your own
    /// reference date to [`SummaryService::monthly_summary`] for
    /// anything else.
    pub fn summary_for_now(&self) -> Result<MonthlySummary> {
        let records = self.record_service.list_records()?;
        Ok(self
            .summary_service
            .monthly_summary(&records, chrono::Utc::now()))
    }
}

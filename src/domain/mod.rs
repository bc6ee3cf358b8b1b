//! # Domain Module
//!
//! Business logic for the chore-reward tracker. This layer owns the core
//! rules — what makes a record valid, how the ledger is ordered, how the
//! monthly dashboard is computed — independently of any UI framework or
//! storage mechanism.
//!
//! ## Module Organization
//!
//! - **record_service**: record CRUD with validate-or-ignore create
//!   semantics and idempotent deletes
//! - **summary_service**: pure monthly total / per-registrant breakdown
//! - **color_hint**: deterministic per-registrant display hues
//! - **commands**: input structs carrying raw form values into services
//! - **models**: the record and ledger types shared with storage
//!
//! ## Business Rules
//!
//! - Registrant and task must be non-empty after trimming; amounts must
//!   parse as integers. Invalid input is silently ignored, not an error.
//! - New records are prepended: insertion order is display order.
//! - Ids are unique and strictly increasing in creation order.
//! - The dashboard covers one calendar month, fixed by an explicit
//!   reference date.

pub mod color_hint;
pub mod commands;
pub mod models;
pub mod record_service;
pub mod summary_service;

pub use record_service::{ConfirmationPolicy, RecordService};
pub use summary_service::{MonthlySummary, RegistrantTotal, SummaryService};

//! Domain-level command types.
//!
//! These structs carry caller input into the services. They hold form
//! values exactly as a UI would submit them; validation and type
//! conversion happen inside the service layer.

/// Input for creating a new reward record.
///
/// `amount` is the raw form text; it must parse as an integer for the
/// create to go through.
#[derive(Debug, Clone)]
pub struct CreateRecordCommand {
    pub registrant: String,
    pub task: String,
    pub amount: String,
}

/// Command for deleting a single record by id.
#[derive(Debug, Clone)]
pub struct DeleteRecordCommand {
    pub record_id: i64,
}

//! # JSON Storage Module
//!
//! File-based storage keeping the whole ledger in a single JSON document
//! (`reward_data.json`) inside the data directory. One logical process
//! owns the slot at a time; every mutation rewrites the file atomically.

pub mod connection;
pub mod ledger_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use ledger_repository::LedgerRepository;

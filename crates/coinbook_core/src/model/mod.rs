//! Domain model for coin records.
//!
//! # Responsibility
//! - Define the record shape shared by store and console layers.
//! - Own text normalization so every write path stores the same form.
//!
//! # Invariants
//! - Every stored coin is identified by a store-assigned `CoinId`.
//! - Deletion is a hard delete; removed IDs are never handed out again.

pub mod coin;

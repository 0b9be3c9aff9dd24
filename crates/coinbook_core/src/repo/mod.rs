//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract used by the coin service.
//! - Keep ID assignment and ordering rules inside the store.
//!
//! # Invariants
//! - Repositories only accept normalized `NewCoin` drafts.
//! - Listing order is insertion order.

pub mod coin_repo;

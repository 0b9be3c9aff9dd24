//! Core record store for coinbook.
//! Owns coin normalization, ID assignment, and storage ordering rules.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, LogConfig};
pub use model::coin::{normalize_label, Coin, CoinField, CoinId, CoinValidationError, NewCoin};
pub use repo::coin_repo::{CoinRepository, InMemoryCoinRepository};
pub use service::coin_service::CoinService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

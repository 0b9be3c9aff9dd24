//! Coin use-case service.
//!
//! # Responsibility
//! - Provide the add/list/remove entry points used by the console loop.
//! - Normalize raw text before it reaches the repository.
//!
//! # Invariants
//! - Invalid input never reaches the repository, so the ID counter only
//!   advances for coins that were actually stored.
//! - Service layer remains storage-agnostic.

use crate::model::coin::{Coin, CoinId, CoinValidationError, NewCoin};
use crate::repo::coin_repo::{CoinRepository, InMemoryCoinRepository};
use log::{info, warn};

/// Use-case service wrapper for coin operations.
pub struct CoinService<R: CoinRepository> {
    repo: R,
}

impl CoinService<InMemoryCoinRepository> {
    /// Creates a service over a fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCoinRepository::new())
    }
}

impl<R: CoinRepository> CoinService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Normalizes and stores a new coin.
    ///
    /// # Errors
    /// - Returns `CoinValidationError::EmptyField` when `country` or
    ///   `denomination` is empty after trimming. The store is unchanged.
    pub fn add_coin(
        &mut self,
        country: &str,
        denomination: &str,
        issue_year: i32,
    ) -> Result<Coin, CoinValidationError> {
        let draft = match NewCoin::new(country, denomination, issue_year) {
            Ok(draft) => draft,
            Err(err) => {
                warn!("event=coin_add module=service status=error error={err}");
                return Err(err);
            }
        };

        let coin = self.repo.insert_coin(draft);
        info!("event=coin_add module=service status=ok id={}", coin.id);
        Ok(coin)
    }

    /// Lists all coins in insertion order.
    pub fn list_coins(&self) -> Vec<Coin> {
        self.repo.list_coins()
    }

    /// Removes the coin with `id`.
    ///
    /// Returns `None` when no coin matches; nothing is mutated in that case.
    pub fn remove_coin(&mut self, id: CoinId) -> Option<Coin> {
        let removed = self.repo.remove_coin(id);
        match &removed {
            Some(_) => info!("event=coin_remove module=service status=ok id={id}"),
            None => info!("event=coin_remove module=service status=not_found id={id}"),
        }
        removed
    }

    pub fn coin_count(&self) -> usize {
        self.repo.len()
    }
}

//! Coin repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold coins in insertion order for one process lifetime.
//! - Assign monotonically increasing IDs from a per-instance counter.
//!
//! # Invariants
//! - IDs start at 1 and are never reused, even after removal.
//! - Removal deletes at most one coin and keeps the order of the rest.

use crate::model::coin::{Coin, CoinId, NewCoin};
use log::debug;

const FIRST_COIN_ID: CoinId = 1;

/// Repository interface for coin storage.
pub trait CoinRepository {
    /// Stores `draft` under the next ID and returns the stored coin.
    fn insert_coin(&mut self, draft: NewCoin) -> Coin;
    /// Returns all coins in insertion order.
    fn list_coins(&self) -> Vec<Coin>;
    /// Removes the first coin with `id`, returning it when present.
    fn remove_coin(&mut self, id: CoinId) -> Option<Coin>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vec-backed coin repository.
#[derive(Debug)]
pub struct InMemoryCoinRepository {
    coins: Vec<Coin>,
    next_id: CoinId,
}

impl InMemoryCoinRepository {
    pub fn new() -> Self {
        Self {
            coins: Vec::new(),
            next_id: FIRST_COIN_ID,
        }
    }

    #[cfg(test)]
    fn peek_next_id(&self) -> CoinId {
        self.next_id
    }
}

impl Default for InMemoryCoinRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinRepository for InMemoryCoinRepository {
    fn insert_coin(&mut self, draft: NewCoin) -> Coin {
        let coin = Coin::from_draft(self.next_id, draft);
        self.next_id += 1;
        self.coins.push(coin.clone());
        debug!(
            "event=coin_insert module=repo status=ok id={} size={}",
            coin.id,
            self.coins.len()
        );
        coin
    }

    fn list_coins(&self) -> Vec<Coin> {
        self.coins.clone()
    }

    fn remove_coin(&mut self, id: CoinId) -> Option<Coin> {
        let index = self.coins.iter().position(|coin| coin.id == id)?;
        let removed = self.coins.remove(index);
        debug!(
            "event=coin_remove module=repo status=ok id={} size={}",
            id,
            self.coins.len()
        );
        Some(removed)
    }

    fn len(&self) -> usize {
        self.coins.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{CoinRepository, InMemoryCoinRepository, FIRST_COIN_ID};
    use crate::model::coin::NewCoin;

    #[test]
    fn counter_advances_only_on_insert() {
        let mut repo = InMemoryCoinRepository::new();
        assert_eq!(repo.peek_next_id(), FIRST_COIN_ID);

        assert!(repo.remove_coin(FIRST_COIN_ID).is_none());
        assert_eq!(repo.peek_next_id(), FIRST_COIN_ID);

        repo.insert_coin(NewCoin::new("chile", "peso", 1990).unwrap());
        assert_eq!(repo.peek_next_id(), FIRST_COIN_ID + 1);
        assert_eq!(repo.len(), 1);
    }
}

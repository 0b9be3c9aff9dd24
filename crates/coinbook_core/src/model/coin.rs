//! Coin domain model.
//!
//! # Responsibility
//! - Define the canonical coin record held by the store.
//! - Normalize free-text labels (country, denomination) before storage.
//!
//! # Invariants
//! - `id` is assigned by the repository and never reused for another coin.
//! - `country` and `denomination` are non-empty, trimmed, and capitalized
//!   (first character uppercase, remainder lowercase).
//! - `issue_year` is not validated.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Store-assigned identifier of a coin. Starts at 1.
pub type CoinId = u64;

/// Text fields subject to label normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinField {
    Country,
    Denomination,
}

impl CoinField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::Denomination => "denomination",
        }
    }
}

impl Display for CoinField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation errors for coin input and persisted coin shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoinValidationError {
    #[error("{field} cannot be empty")]
    EmptyField { field: CoinField },
}

/// Canonical coin record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Coin {
    pub id: CoinId,
    pub country: String,
    pub denomination: String,
    pub issue_year: i32,
}

impl Coin {
    /// Builds a stored coin from an already-normalized draft.
    pub fn from_draft(id: CoinId, draft: NewCoin) -> Self {
        Self {
            id,
            country: draft.country,
            denomination: draft.denomination,
            issue_year: draft.issue_year,
        }
    }

    /// Checks label invariants.
    ///
    /// # Errors
    /// - Returns `EmptyField` when `country` or `denomination` is blank.
    pub fn validate(&self) -> Result<(), CoinValidationError> {
        ensure_not_blank(CoinField::Country, &self.country)?;
        ensure_not_blank(CoinField::Denomination, &self.denomination)
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ID: {}, Country: {}, Denomination: {}, Issue year: {}",
            self.id, self.country, self.denomination, self.issue_year
        )
    }
}

#[derive(Deserialize)]
struct CoinWire {
    id: CoinId,
    country: String,
    denomination: String,
    issue_year: i32,
}

impl<'de> Deserialize<'de> for Coin {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CoinWire::deserialize(deserializer)?;
        let coin = Coin {
            id: wire.id,
            country: wire.country,
            denomination: wire.denomination,
            issue_year: wire.issue_year,
        };
        coin.validate().map_err(serde::de::Error::custom)?;
        Ok(coin)
    }
}

/// Normalized input for a coin that has not been assigned an ID yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCoin {
    country: String,
    denomination: String,
    issue_year: i32,
}

impl NewCoin {
    /// Normalizes raw user text into a draft coin.
    ///
    /// # Errors
    /// - Returns `EmptyField` when a label is empty after trimming.
    pub fn new(
        country: &str,
        denomination: &str,
        issue_year: i32,
    ) -> Result<Self, CoinValidationError> {
        Ok(Self {
            country: normalize_label(CoinField::Country, country)?,
            denomination: normalize_label(CoinField::Denomination, denomination)?,
            issue_year,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn denomination(&self) -> &str {
        &self.denomination
    }

    pub fn issue_year(&self) -> i32 {
        self.issue_year
    }
}

/// Trims `raw`, uppercases its first character and lowercases the rest.
///
/// # Errors
/// - Returns `EmptyField { field }` when nothing is left after trimming.
pub fn normalize_label(field: CoinField, raw: &str) -> Result<String, CoinValidationError> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return Err(CoinValidationError::EmptyField { field });
    };

    let mut normalized = String::with_capacity(trimmed.len());
    normalized.extend(first.to_uppercase());
    normalized.push_str(&chars.as_str().to_lowercase());
    Ok(normalized)
}

fn ensure_not_blank(field: CoinField, value: &str) -> Result<(), CoinValidationError> {
    if value.trim().is_empty() {
        return Err(CoinValidationError::EmptyField { field });
    }
    Ok(())
}

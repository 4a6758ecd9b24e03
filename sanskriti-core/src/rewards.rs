//! Culture Coin ledger and reward-item ownership.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Why a purchase was refused. The ledger itself is never mutated on failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PurchaseError {
    #[error("not enough Culture Coins: need {cost}, have {balance}")]
    InsufficientFunds { cost: u32, balance: u32 },
}

/// Tracks the spendable Culture Coin balance and the set of unlocked reward items.
///
/// The balance is unsigned, so it cannot go negative; `purchase` refuses to
/// overdraw instead. Items are never removed from the owned set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardLedger {
    balance: u32,
    owned: BTreeSet<String>,
}

impl RewardLedger {
    /// Create a ledger with a starting balance and nothing owned.
    #[must_use]
    pub fn new(starting_balance: u32) -> Self {
        Self {
            balance: starting_balance,
            owned: BTreeSet::new(),
        }
    }

    /// Create a ledger with a starting balance and an initial owned set.
    #[must_use]
    pub fn with_owned<I, S>(starting_balance: u32, owned: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            balance: starting_balance,
            owned: owned.into_iter().map(Into::into).collect(),
        }
    }

    /// Current spendable balance.
    #[must_use]
    pub const fn balance(&self) -> u32 {
        self.balance
    }

    /// Whether the item has already been unlocked.
    #[must_use]
    pub fn owns(&self, item_id: &str) -> bool {
        self.owned.contains(item_id)
    }

    /// Identifiers of all unlocked items, in sorted order.
    pub fn owned(&self) -> impl Iterator<Item = &str> {
        self.owned.iter().map(String::as_str)
    }

    /// Add coins to the balance. Callers only pass positive amounts.
    pub fn credit(&mut self, amount: u32) {
        self.balance = self.balance.saturating_add(amount);
    }

    /// Spend `cost` coins to unlock `item_id`.
    ///
    /// Re-purchasing an owned item is a no-op success; the purchase button is
    /// disabled once owned, so this path only guards the invariant.
    ///
    /// # Errors
    ///
    /// Returns [`PurchaseError::InsufficientFunds`] when the balance cannot
    /// cover the cost. No state changes on failure.
    pub fn purchase(&mut self, item_id: &str, cost: u32) -> Result<(), PurchaseError> {
        if self.owned.contains(item_id) {
            return Ok(());
        }
        if self.balance < cost {
            return Err(PurchaseError::InsufficientFunds {
                cost,
                balance: self.balance,
            });
        }
        self.balance -= cost;
        self.owned.insert(item_id.to_string());
        Ok(())
    }
}

//! Currency held by the character for one page session.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::Amount;

/// Coin denominations tracked on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Denomination {
    Gold,
    Silver,
    Copper,
}

impl Denomination {
    pub const ALL: [Denomination; 3] = [Self::Gold, Self::Silver, Self::Copper];

    pub fn label(self) -> &'static str {
        match self {
            Self::Gold => "Gold",
            Self::Silver => "Silver",
            Self::Copper => "Copper",
        }
    }

    /// Display line for a running total, e.g. "75 Gold pieces."
    pub fn format_total(self, total: u64) -> String {
        format!("{} {} pieces.", total, self.label())
    }
}

impl fmt::Display for Denomination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error when a wallet change is refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Not enough {denomination}: have {available}, tried to spend {requested}")]
    Insufficient {
        denomination: Denomination,
        available: u64,
        requested: u64,
    },
    #[error("{0} total overflow")]
    Overflow(Denomination),
}

/// Three independent, never-negative running totals.
///
/// Totals only change through [`Wallet::add`]; a refused change leaves the
/// wallet untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    gold: u64,
    silver: u64,
    copper: u64,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self, denomination: Denomination) -> u64 {
        match denomination {
            Denomination::Gold => self.gold,
            Denomination::Silver => self.silver,
            Denomination::Copper => self.copper,
        }
    }

    /// Apply a delta and return the new total for that denomination
    pub fn add(&mut self, denomination: Denomination, amount: Amount) -> Result<u64, WalletError> {
        let current = self.total(denomination);
        let delta = amount.value();

        let updated = if delta >= 0 {
            current
                .checked_add(delta.unsigned_abs())
                .ok_or(WalletError::Overflow(denomination))?
        } else {
            let requested = delta.unsigned_abs();
            current
                .checked_sub(requested)
                .ok_or(WalletError::Insufficient {
                    denomination,
                    available: current,
                    requested,
                })?
        };

        *self.slot_mut(denomination) = updated;
        Ok(updated)
    }

    fn slot_mut(&mut self, denomination: Denomination) -> &mut u64 {
        match denomination {
            Denomination::Gold => &mut self.gold,
            Denomination::Silver => &mut self.silver,
            Denomination::Copper => &mut self.copper,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(raw: &str) -> Amount {
        Amount::parse(raw).unwrap()
    }

    #[test]
    fn starts_empty() {
        let wallet = Wallet::new();
        for denomination in Denomination::ALL {
            assert_eq!(wallet.total(denomination), 0);
        }
    }

    #[test]
    fn deposits_accumulate() {
        let mut wallet = Wallet::new();
        assert_eq!(wallet.add(Denomination::Gold, amount("50")), Ok(50));
        assert_eq!(wallet.add(Denomination::Gold, amount("25")), Ok(75));
        assert_eq!(
            Denomination::Gold.format_total(wallet.total(Denomination::Gold)),
            "75 Gold pieces."
        );
    }

    #[test]
    fn denominations_are_independent() {
        let mut wallet = Wallet::new();
        wallet.add(Denomination::Silver, amount("4")).unwrap();
        wallet.add(Denomination::Copper, amount("9")).unwrap();
        assert_eq!(wallet.total(Denomination::Gold), 0);
        assert_eq!(wallet.total(Denomination::Silver), 4);
        assert_eq!(wallet.total(Denomination::Copper), 9);
    }

    #[test]
    fn spending_within_balance() {
        let mut wallet = Wallet::new();
        wallet.add(Denomination::Copper, amount("10")).unwrap();
        assert_eq!(wallet.add(Denomination::Copper, amount("-4")), Ok(6));
    }

    #[test]
    fn overspending_is_refused_and_leaves_total() {
        let mut wallet = Wallet::new();
        wallet.add(Denomination::Gold, amount("3")).unwrap();
        let err = wallet.add(Denomination::Gold, amount("-5")).unwrap_err();
        assert_eq!(
            err,
            WalletError::Insufficient {
                denomination: Denomination::Gold,
                available: 3,
                requested: 5,
            }
        );
        assert_eq!(wallet.total(Denomination::Gold), 3);
    }

    #[test]
    fn format_total_per_denomination() {
        assert_eq!(Denomination::Silver.format_total(2), "2 Silver pieces.");
        assert_eq!(Denomination::Copper.format_total(0), "0 Copper pieces.");
    }
}

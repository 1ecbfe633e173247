//! Value objects - Immutable objects defined by their attributes

mod aligned_row;
mod dice;
mod field;
mod wallet;

pub use aligned_row::{AlignedRow, PLACEHOLDER};
pub use dice::{DiceFormula, DiceParseError, DiceRollResult, DieSize};
pub use field::{parse_dice_count, Amount, FieldInput};
pub use wallet::{Denomination, Wallet, WalletError};

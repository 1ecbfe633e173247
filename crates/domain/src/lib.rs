//! Character sheet domain.
//!
//! Pure value objects and entities for the character sheet client: field input
//! validation, the currency wallet, dice formulas, aligned list rows, and the
//! records shown in the inventory, spell, encounter and roster lists.

pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{Attack, CharacterCard, InventoryCategory, SpellSummary};
pub use error::ValidationError;
pub use value_objects::{
    AlignedRow, Amount, Denomination, DiceFormula, DiceParseError, DiceRollResult, DieSize,
    FieldInput, Wallet, WalletError, PLACEHOLDER, parse_dice_count,
};

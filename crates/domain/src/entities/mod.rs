//! Entities - records shown on the character sheet pages

mod attack;
mod character;
mod inventory;
mod spell;

pub use attack::Attack;
pub use character::CharacterCard;
pub use inventory::InventoryCategory;
pub use spell::SpellSummary;

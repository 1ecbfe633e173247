//! Inventory categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The lists on the inventory page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryCategory {
    Armor,
    Weapon,
    Consumable,
    Gear,
    MagicItem,
    /// Items not backed by any lookup table
    Misc,
}

impl InventoryCategory {
    pub const ALL: [InventoryCategory; 6] = [
        Self::Armor,
        Self::Weapon,
        Self::Consumable,
        Self::Gear,
        Self::MagicItem,
        Self::Misc,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Armor => "armor",
            Self::Weapon => "weapon",
            Self::Consumable => "consumable",
            Self::Gear => "gear",
            Self::MagicItem => "magic item",
            Self::Misc => "misc",
        }
    }

    /// Whether adding to this category consults the backend first
    pub fn has_lookup(self) -> bool {
        !matches!(self, Self::Misc)
    }
}

impl fmt::Display for InventoryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InventoryCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "armor" | "armour" => Ok(Self::Armor),
            "weapon" | "weapons" => Ok(Self::Weapon),
            "consumable" | "consumables" => Ok(Self::Consumable),
            "gear" | "equipment" => Ok(Self::Gear),
            "magic" | "magic-item" | "magic_item" | "tools" => Ok(Self::MagicItem),
            "misc" => Ok(Self::Misc),
            _ => Err(ValidationError::UnknownCategory(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_misc_skips_lookup() {
        let without_lookup: Vec<_> = InventoryCategory::ALL
            .into_iter()
            .filter(|c| !c.has_lookup())
            .collect();
        assert_eq!(without_lookup, vec![InventoryCategory::Misc]);
    }

    #[test]
    fn parses_aliases() {
        assert_eq!("Equipment".parse(), Ok(InventoryCategory::Gear));
        assert_eq!("magic".parse(), Ok(InventoryCategory::MagicItem));
        assert_eq!(
            "food".parse::<InventoryCategory>(),
            Err(ValidationError::UnknownCategory("food".to_string()))
        );
    }
}

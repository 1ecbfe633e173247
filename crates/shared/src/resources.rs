//! Backend resources and the keys lookups are tracked under.

use std::fmt;

use charsheet_domain::InventoryCategory;
use serde::{Deserialize, Serialize};

/// One backend lookup endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    DiceRoll,
    ArmorData,
    WeaponData,
    ConsumableData,
    EquipmentData,
    MagicData,
    SpellData,
}

impl Resource {
    /// Endpoint path relative to the backend base URL
    pub fn path(self) -> &'static str {
        match self {
            Self::DiceRoll => "/api/rollingdice",
            Self::ArmorData => "/api/armordata",
            Self::WeaponData => "/api/weapondata",
            Self::ConsumableData => "/api/consumabledata",
            Self::EquipmentData => "/api/equipmentdata",
            Self::MagicData => "/api/magicdata",
            Self::SpellData => "/api/spelldata",
        }
    }

    /// Query parameter carrying the user's input
    pub fn input_param(self) -> &'static str {
        match self {
            Self::DiceRoll => "diceInput",
            Self::ArmorData => "armorInput",
            Self::WeaponData => "weaponInput",
            Self::ConsumableData => "consumableInput",
            Self::EquipmentData => "equipmentInput",
            Self::MagicData => "magicInput",
            Self::SpellData => "spellInput",
        }
    }

    /// Stable identifier used in logs and resource keys
    pub fn key_name(self) -> &'static str {
        match self {
            Self::DiceRoll => "dice-roll",
            Self::ArmorData => "armor-data",
            Self::WeaponData => "weapon-data",
            Self::ConsumableData => "consumable-data",
            Self::EquipmentData => "equipment-data",
            Self::MagicData => "magic-data",
            Self::SpellData => "spell-data",
        }
    }

    /// Index of the `name` column in this resource's positional rows.
    ///
    /// Armor rows lead with `id, type, name`; every other table with `id, name`.
    pub fn name_column(self) -> Option<usize> {
        match self {
            Self::DiceRoll => None,
            Self::ArmorData => Some(2),
            Self::WeaponData
            | Self::ConsumableData
            | Self::EquipmentData
            | Self::MagicData
            | Self::SpellData => Some(1),
        }
    }

    /// Lookup resource behind an inventory list, if it has one
    pub fn for_inventory(category: InventoryCategory) -> Option<Self> {
        match category {
            InventoryCategory::Armor => Some(Self::ArmorData),
            InventoryCategory::Weapon => Some(Self::WeaponData),
            InventoryCategory::Consumable => Some(Self::ConsumableData),
            InventoryCategory::Gear => Some(Self::EquipmentData),
            InventoryCategory::MagicItem => Some(Self::MagicData),
            InventoryCategory::Misc => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key_name())
    }
}

/// Identifier that at most one pending lookup may hold at a time.
///
/// Usually one key per resource. A lane splits a resource into independent
/// keys, e.g. the advantage roll runs beside the primary roll instead of
/// coalescing onto it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    resource: Resource,
    lane: Option<String>,
}

impl ResourceKey {
    pub fn of(resource: Resource) -> Self {
        Self {
            resource,
            lane: None,
        }
    }

    pub fn lane(resource: Resource, lane: impl Into<String>) -> Self {
        Self {
            resource,
            lane: Some(lane.into()),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lane {
            Some(lane) => write!(f, "{}#{}", self.resource, lane),
            None => write!(f, "{}", self.resource),
        }
    }
}

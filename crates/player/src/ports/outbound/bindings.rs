//! Page element bindings
//!
//! The page markup supplies these identifiers; they are kept in one place so
//! services can refer to logical names only.

use charsheet_domain::{Denomination, InventoryCategory};

use super::page_port::{FieldId, ListGroup, ListId, TextId, ToggleId};

// -----------------------------------------------------------------------------
// Inventory page
// -----------------------------------------------------------------------------

/// Input and list behind one inventory category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryBinding {
    pub input: FieldId,
    pub list: ListId,
}

pub fn inventory(category: InventoryCategory) -> InventoryBinding {
    let (input, list) = match category {
        InventoryCategory::Armor => ("newArmor", "armorList"),
        InventoryCategory::Weapon => ("newWeapon", "weaponList"),
        InventoryCategory::Consumable => ("newConsumable", "consumableList"),
        InventoryCategory::Gear => ("newGear", "gearList"),
        // The markup calls the magic item widgets "tools"
        InventoryCategory::MagicItem => ("newTools", "toolsList"),
        InventoryCategory::Misc => ("newMisc", "miscList"),
    };
    InventoryBinding {
        input: FieldId(input),
        list: ListId(list),
    }
}

/// Input and running-total display behind one denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyBinding {
    pub input: FieldId,
    pub display: TextId,
}

pub fn currency(denomination: Denomination) -> CurrencyBinding {
    let (input, display) = match denomination {
        Denomination::Gold => ("newGold", "gold"),
        Denomination::Silver => ("newSilver", "silver"),
        Denomination::Copper => ("newCopper", "copper"),
    };
    CurrencyBinding {
        input: FieldId(input),
        display: TextId(display),
    }
}

// -----------------------------------------------------------------------------
// Spells page
// -----------------------------------------------------------------------------

pub const SPELL_INPUT: FieldId = FieldId("spellInput");

/// name, level, cast, duration, range, save, affect
pub const SPELL_LISTS: ListGroup = ListGroup(&[
    ListId("spells"),
    ListId("levels"),
    ListId("casts"),
    ListId("durations"),
    ListId("ranges"),
    ListId("saves"),
    ListId("affects"),
]);

// -----------------------------------------------------------------------------
// Encounters page
// -----------------------------------------------------------------------------

pub const ATTACK_INPUT: FieldId = FieldId("newAttack");

/// attack, bonus, damage
pub const ATTACK_LISTS: ListGroup =
    ListGroup(&[ListId("attack"), ListId("bonus"), ListId("damage")]);

// -----------------------------------------------------------------------------
// Characters page
// -----------------------------------------------------------------------------

pub const CHARACTER_NAME_INPUT: FieldId = FieldId("newName");
pub const CHARACTER_CARDS: ListId = ListId("container");

// -----------------------------------------------------------------------------
// Dice roller page
// -----------------------------------------------------------------------------

pub const NUM_DICE_INPUT: FieldId = FieldId("numDice");
pub const ADVANTAGE_TOGGLE: ToggleId = ToggleId("check");
pub const DICE_RESULT: TextId = TextId("diceNum");
pub const ADVANTAGE_RESULT: TextId = TextId("advantageDice");
pub const SPELL_DAMAGE_INPUT: FieldId = FieldId("spellDamageInput");
pub const SPELL_DAMAGE_RESULT: TextId = TextId("damageResult");

/// Every text input on the sheet, in page order
pub fn all_fields() -> Vec<FieldId> {
    let mut fields: Vec<FieldId> = InventoryCategory::ALL
        .into_iter()
        .map(|c| inventory(c).input)
        .collect();
    fields.extend(Denomination::ALL.into_iter().map(|d| currency(d).input));
    fields.extend([
        SPELL_INPUT,
        ATTACK_INPUT,
        CHARACTER_NAME_INPUT,
        NUM_DICE_INPUT,
        SPELL_DAMAGE_INPUT,
    ]);
    fields
}

/// Resolve a markup identifier to its field
pub fn field_by_id(id: &str) -> Option<FieldId> {
    all_fields().into_iter().find(|f| f.element_id() == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn inventory_bindings_are_unique() {
        let inputs: HashSet<_> = InventoryCategory::ALL
            .into_iter()
            .map(|c| inventory(c).input)
            .collect();
        let lists: HashSet<_> = InventoryCategory::ALL
            .into_iter()
            .map(|c| inventory(c).list)
            .collect();
        assert_eq!(inputs.len(), InventoryCategory::ALL.len());
        assert_eq!(lists.len(), InventoryCategory::ALL.len());
    }

    #[test]
    fn group_widths_match_row_types() {
        assert_eq!(
            SPELL_LISTS.width(),
            charsheet_domain::SpellSummary::COLUMNS.len()
        );
        assert_eq!(ATTACK_LISTS.width(), charsheet_domain::Attack::COLUMNS.len());
    }

    #[test]
    fn fields_resolve_by_element_id() {
        assert_eq!(field_by_id("spellInput"), Some(SPELL_INPUT));
        assert_eq!(field_by_id("newTools"), Some(inventory(InventoryCategory::MagicItem).input));
        assert_eq!(field_by_id("nope"), None);
        let unique: HashSet<_> = all_fields().into_iter().collect();
        assert_eq!(unique.len(), all_fields().len());
    }
}

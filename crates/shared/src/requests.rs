//! Lookup requests sent to the backend.

use charsheet_domain::DieSize;
use serde::{Deserialize, Serialize};

use crate::resources::Resource;

/// Query parameter carrying the number of dice for a roll
pub const NUM_DICE_PARAM: &str = "numDice";

/// A GET against one resource with its query parameters.
///
/// Two requests are equal when they would hit the backend identically; the
/// lookup layer relies on that to decide whether a trigger can join a pending
/// request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupRequest {
    pub resource: Resource,
    pub params: Vec<(String, String)>,
}

impl LookupRequest {
    /// Look up a record by the name the user typed
    pub fn by_name(resource: Resource, name: &str) -> Self {
        Self {
            resource,
            params: vec![(resource.input_param().to_string(), name.to_string())],
        }
    }

    /// Roll `count` dice of one size
    pub fn dice_roll(die: DieSize, count: u8) -> Self {
        Self {
            resource: Resource::DiceRoll,
            params: vec![
                (Resource::DiceRoll.input_param().to_string(), die.to_string()),
                (NUM_DICE_PARAM.to_string(), count.to_string()),
            ],
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_name_uses_resource_parameter() {
        let request = LookupRequest::by_name(Resource::SpellData, "Fireball");
        assert_eq!(request.param("spellInput"), Some("Fireball"));
        assert_eq!(request.param("weaponInput"), None);
    }

    #[test]
    fn dice_roll_parameters() {
        let request = LookupRequest::dice_roll(DieSize::D20, 2);
        assert_eq!(request.resource, Resource::DiceRoll);
        assert_eq!(request.param("diceInput"), Some("d20"));
        assert_eq!(request.param(NUM_DICE_PARAM), Some("2"));
    }

    #[test]
    fn equal_requests_compare_equal() {
        assert_eq!(
            LookupRequest::by_name(Resource::WeaponData, "Dagger"),
            LookupRequest::by_name(Resource::WeaponData, "Dagger")
        );
        assert_ne!(
            LookupRequest::by_name(Resource::WeaponData, "Dagger"),
            LookupRequest::by_name(Resource::WeaponData, "Club")
        );
    }
}

//! Encounter attacks.

use serde::{Deserialize, Serialize};

use crate::value_objects::AlignedRow;

/// One row of the encounter page's attack / bonus / damage lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    pub name: String,
    pub bonus: Option<String>,
    pub damage: Option<String>,
}

impl Attack {
    pub const COLUMNS: [&'static str; 3] = ["attack", "bonus", "damage"];

    /// An attack whose bonus and damage are filled in later
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bonus: None,
            damage: None,
        }
    }

    pub fn to_row(&self) -> AlignedRow {
        AlignedRow::from_cells(
            Self::COLUMNS.len(),
            [
                Some(self.name.clone()),
                self.bonus.clone(),
                self.damage.clone(),
            ],
        )
    }
}

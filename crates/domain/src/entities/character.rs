//! Character roster cards.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterCard {
    pub name: String,
}

impl CharacterCard {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

//! Spell summaries shown on the spells page.

use serde::{Deserialize, Serialize};

use crate::value_objects::{AlignedRow, DiceFormula, DiceParseError};

/// The seven columns of the spells page, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellSummary {
    pub name: Option<String>,
    pub level: Option<String>,
    pub casting_time: Option<String>,
    pub duration: Option<String>,
    pub range: Option<String>,
    pub save: Option<String>,
    /// Damage/effect text, usually a dice formula such as "8d6"
    pub affect: Option<String>,
}

impl SpellSummary {
    /// Column order of the spells page list group
    pub const COLUMNS: [&'static str; 7] = [
        "name", "level", "cast", "duration", "range", "save", "affect",
    ];

    /// Row in [`Self::COLUMNS`] order; unknown values become placeholders
    pub fn to_row(&self) -> AlignedRow {
        AlignedRow::from_cells(
            Self::COLUMNS.len(),
            [
                self.name.clone(),
                self.level.clone(),
                self.casting_time.clone(),
                self.duration.clone(),
                self.range.clone(),
                self.save.clone(),
                self.affect.clone(),
            ],
        )
    }

    /// Parse the affect column as a dice formula
    pub fn damage_formula(&self) -> Result<DiceFormula, DiceParseError> {
        DiceFormula::parse(self.affect.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball() -> SpellSummary {
        SpellSummary {
            name: Some("Fireball".into()),
            level: Some("3".into()),
            casting_time: Some("1 action".into()),
            duration: Some("Instantaneous".into()),
            range: Some("150 feet".into()),
            save: Some("DEX".into()),
            affect: Some("8d6".into()),
        }
    }

    #[test]
    fn row_follows_column_order() {
        assert_eq!(
            fireball().to_row().cells(),
            [
                "Fireball",
                "3",
                "1 action",
                "Instantaneous",
                "150 feet",
                "DEX",
                "8d6"
            ]
        );
    }

    #[test]
    fn missing_columns_are_placeholders() {
        let spell = SpellSummary {
            name: Some("Light".into()),
            ..Default::default()
        };
        let row = spell.to_row();
        assert_eq!(row.width(), SpellSummary::COLUMNS.len());
        assert_eq!(row.cells()[0], "Light");
        assert!(row.cells()[1..].iter().all(|c| c == "--"));
    }

    #[test]
    fn damage_formula_from_affect() {
        let formula = fireball().damage_formula().unwrap();
        assert_eq!(formula.dice_count, 8);
        assert_eq!(formula.die_size, 6);
        assert_eq!(
            SpellSummary::default().damage_formula(),
            Err(DiceParseError::Empty)
        );
    }
}

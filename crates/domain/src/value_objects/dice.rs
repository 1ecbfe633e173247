//! Dice selection, formulas and local rolling
//!
//! The roller page offers a fixed set of dice (d4 through d100). Spell damage
//! columns carry formulas like "8d6", "1d10+4" or "d8", which are parsed and
//! rolled locally.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error when parsing a dice formula or die name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiceParseError {
    #[error("Empty dice formula")]
    Empty,
    /// Expected XdY, XdY+Z or XdY-Z
    #[error("Invalid dice format: {0}")]
    InvalidFormat(String),
    #[error("Dice count must be at least 1")]
    InvalidDiceCount,
    #[error("Die size must be at least 2")]
    InvalidDieSize,
    #[error("Unsupported die: {0}")]
    UnsupportedDie(String),
}

/// The dice offered by the roller page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieSize {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

impl DieSize {
    pub const ALL: [DieSize; 7] = [
        Self::D4,
        Self::D6,
        Self::D8,
        Self::D10,
        Self::D12,
        Self::D20,
        Self::D100,
    ];

    pub fn sides(self) -> u8 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
        }
    }

    pub fn from_sides(sides: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|die| die.sides() == sides)
    }

    /// Convert to u8 for atomic storage (0 = no die selected).
    pub fn to_u8(selection: Option<Self>) -> u8 {
        selection.map_or(0, Self::sides)
    }

    /// Convert from u8 (atomic storage).
    pub fn from_u8(v: u8) -> Option<Self> {
        Self::from_sides(v)
    }
}

impl fmt::Display for DieSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

impl FromStr for DieSize {
    type Err = DiceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        normalized
            .strip_prefix('d')
            .and_then(|sides| sides.parse::<u8>().ok())
            .and_then(Self::from_sides)
            .ok_or(DiceParseError::UnsupportedDie(normalized))
    }
}

/// A parsed dice formula like "2d6+3"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceFormula {
    /// Number of dice to roll (X in XdY)
    pub dice_count: u8,
    /// Size of each die (Y in XdY)
    pub die_size: u8,
    /// Modifier to add/subtract after rolling (+Z or -Z)
    pub modifier: i32,
}

impl DiceFormula {
    pub fn new(dice_count: u8, die_size: u8, modifier: i32) -> Result<Self, DiceParseError> {
        if dice_count == 0 {
            return Err(DiceParseError::InvalidDiceCount);
        }
        if die_size < 2 {
            return Err(DiceParseError::InvalidDieSize);
        }
        Ok(Self {
            dice_count,
            die_size,
            modifier,
        })
    }

    /// `count` dice of one of the roller page's sizes, no modifier
    pub fn of_die(count: u8, die: DieSize) -> Result<Self, DiceParseError> {
        Self::new(count, die.sides(), 0)
    }

    /// Parse a dice formula string like "1d20+5", "2d6-1", "d8".
    ///
    /// Whitespace anywhere in the formula is ignored, so "1d10 + 4" parses too.
    pub fn parse(input: &str) -> Result<Self, DiceParseError> {
        let input: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if input.is_empty() {
            return Err(DiceParseError::Empty);
        }

        let (count_str, after_d) = input.split_once('d').ok_or_else(|| {
            DiceParseError::InvalidFormat(format!("Missing 'd' separator in '{}'", input))
        })?;

        let dice_count: u8 = if count_str.is_empty() {
            1
        } else {
            count_str.parse().map_err(|_| {
                DiceParseError::InvalidFormat(format!("Invalid dice count: '{}'", count_str))
            })?
        };

        let (size_str, modifier) = match after_d.find(['+', '-']) {
            Some(0) => {
                return Err(DiceParseError::InvalidFormat(format!(
                    "Invalid die size: '{}'",
                    after_d
                )))
            }
            Some(pos) => {
                let (size, signed) = after_d.split_at(pos);
                let modifier: i32 = signed.parse().map_err(|_| {
                    DiceParseError::InvalidFormat(format!("Invalid modifier: '{}'", signed))
                })?;
                (size, modifier)
            }
            None => (after_d, 0),
        };

        let die_size: u8 = size_str.parse().map_err(|_| {
            DiceParseError::InvalidFormat(format!("Invalid die size: '{}'", size_str))
        })?;

        Self::new(dice_count, die_size, modifier)
    }

    /// Roll with the thread-local RNG
    pub fn roll(&self) -> DiceRollResult {
        self.roll_with(&mut rand::thread_rng())
    }

    pub fn roll_with<R: Rng + ?Sized>(&self, rng: &mut R) -> DiceRollResult {
        let individual_rolls: Vec<i32> = (0..self.dice_count)
            .map(|_| rng.gen_range(1..=i32::from(self.die_size)))
            .collect();
        let dice_total: i32 = individual_rolls.iter().sum();

        DiceRollResult {
            formula: self.clone(),
            individual_rolls,
            dice_total,
            total: dice_total + self.modifier,
        }
    }

    pub fn min_roll(&self) -> i32 {
        i32::from(self.dice_count) + self.modifier
    }

    pub fn max_roll(&self) -> i32 {
        i32::from(self.dice_count) * i32::from(self.die_size) + self.modifier
    }
}

impl fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.die_size)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{}", m),
            m => write!(f, "{}", m),
        }
    }
}

/// Result of rolling a formula
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiceRollResult {
    pub formula: DiceFormula,
    pub individual_rolls: Vec<i32>,
    /// Sum of dice before modifier
    pub dice_total: i32,
    /// dice_total + modifier
    pub total: i32,
}

impl DiceRollResult {
    /// Format as a breakdown string, e.g. "2d6[4, 5] + 3 = 12"
    pub fn breakdown(&self) -> String {
        let rolls = self
            .individual_rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        let base = format!(
            "{}d{}[{}]",
            self.formula.dice_count, self.formula.die_size, rolls
        );
        match self.formula.modifier {
            0 => format!("{} = {}", base, self.total),
            m if m > 0 => format!("{} + {} = {}", base, m, self.total),
            m => format!("{} - {} = {}", base, -m, self.total),
        }
    }
}

//! Values typed into page fields.
//!
//! Every text field on the sheet shares one rule: surrounding whitespace is
//! ignored and an empty value is not a submission. Currency and dice-count
//! fields additionally have to parse as numbers.

use std::fmt;

use crate::error::ValidationError;

/// A trimmed field value together with its validity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    value: String,
}

impl FieldInput {
    /// Trim a raw field value
    pub fn new(raw: &str) -> Self {
        Self {
            value: raw.trim().to_string(),
        }
    }

    /// The trimmed value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// True iff the trimmed value is non-empty
    pub fn is_valid(&self) -> bool {
        !self.value.is_empty()
    }

    /// Consume the input, returning the value only if it is valid
    pub fn into_valid(self) -> Result<String, ValidationError> {
        if self.is_valid() {
            Ok(self.value)
        } else {
            Err(ValidationError::EmptyField)
        }
    }
}

impl fmt::Display for FieldInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// A non-zero whole-number delta entered into a currency field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(i64);

impl Amount {
    /// Parse a currency field.
    ///
    /// Empty, non-numeric and zero inputs are all rejected the same way.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        match trimmed.parse::<i64>() {
            Ok(0) | Err(_) => Err(ValidationError::InvalidAmount(trimmed.to_string())),
            Ok(value) => Ok(Self(value)),
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// Parse the optional number-of-dice field. An empty field means one die.
pub fn parse_dice_count(raw: &str) -> Result<u8, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(1);
    }
    match trimmed.parse::<u8>() {
        Ok(0) | Err(_) => Err(ValidationError::InvalidDiceCount(trimmed.to_string())),
        Ok(count) => Ok(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_accepts_non_empty() {
        let input = FieldInput::new("  Longsword \t");
        assert!(input.is_valid());
        assert_eq!(input.value(), "Longsword");
    }

    #[test]
    fn whitespace_only_is_invalid() {
        for raw in ["", " ", "\t\n", "    "] {
            let input = FieldInput::new(raw);
            assert!(!input.is_valid(), "{raw:?} should be invalid");
            assert_eq!(input.into_valid(), Err(ValidationError::EmptyField));
        }
    }

    #[test]
    fn amount_accepts_signed_whole_numbers() {
        assert_eq!(Amount::parse("50").unwrap().value(), 50);
        assert_eq!(Amount::parse(" -7 ").unwrap().value(), -7);
        assert_eq!(Amount::parse("+3").unwrap().value(), 3);
    }

    #[test]
    fn amount_rejects_empty_zero_and_garbage() {
        for raw in ["", "0", "abc", "1.5", "12gp"] {
            assert!(
                matches!(Amount::parse(raw), Err(ValidationError::InvalidAmount(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn dice_count_defaults_to_one() {
        assert_eq!(parse_dice_count(""), Ok(1));
        assert_eq!(parse_dice_count("  "), Ok(1));
        assert_eq!(parse_dice_count("3"), Ok(3));
    }

    #[test]
    fn dice_count_rejects_zero_and_garbage() {
        assert!(parse_dice_count("0").is_err());
        assert!(parse_dice_count("two").is_err());
        assert!(parse_dice_count("-1").is_err());
        assert!(parse_dice_count("300").is_err());
    }
}

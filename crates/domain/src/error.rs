//! Validation errors for user-entered values.

use thiserror::Error;

/// Why a value typed into a page field was rejected
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace was entered
    #[error("Field is empty")]
    EmptyField,

    /// The amount was not a non-zero whole number
    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    /// The number of dice was not a positive count
    #[error("Invalid dice count: '{0}'")]
    InvalidDiceCount(String),

    #[error("Unknown inventory category: '{0}'")]
    UnknownCategory(String),
}

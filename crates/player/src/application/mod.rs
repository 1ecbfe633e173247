//! Application layer - page use cases built on the outbound ports

pub mod outcome;
pub mod services;

pub use outcome::{RollOutcome, SubmitOutcome};

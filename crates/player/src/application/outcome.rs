//! What a page action did.
//!
//! Failures never escape a page action; they end up as alerts and
//! placeholder rows. These outcomes let callers (and tests) see which path
//! was taken.

use crate::ports::outbound::LookupError;

/// Result of an add-to-list action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was requested or changed
    Rejected,
    /// A row was appended; one cell per list in the group
    Appended(Vec<String>),
    /// The lookup failed and a placeholder row was appended instead
    Placeholder(LookupError),
}

impl SubmitOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }
}

/// Result of a dice roll action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RollOutcome {
    /// No die selected or an invalid dice count
    Rejected,
    Rolled {
        primary: Result<i64, LookupError>,
        /// Present only when advantage was checked
        advantage: Option<Result<i64, LookupError>>,
    },
}

//! Lookup Port - the backend boundary
//!
//! One GET per call, answering the raw JSON body. Decoding the body belongs to
//! the services, which know which shape each resource answers with.

use async_trait::async_trait;
use charsheet_shared::{LookupRequest, ResponseError};
use serde_json::Value;
use thiserror::Error;

/// Why a lookup did not produce a usable body.
///
/// `Clone` because every caller coalesced onto one pending lookup receives
/// the same outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Backend returned status {0}")]
    Status(u16),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },
    #[error("Request was cancelled")]
    Cancelled,
    /// A different request already holds this resource key
    #[error("A {key} lookup is already in progress")]
    Busy { key: String },
    #[error("Lookup unavailable: {0}")]
    Unavailable(String),
}

impl From<ResponseError> for LookupError {
    fn from(e: ResponseError) -> Self {
        LookupError::InvalidResponse(e.to_string())
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LookupPort: Send + Sync {
    async fn fetch(&self, request: &LookupRequest) -> Result<Value, LookupError>;
}

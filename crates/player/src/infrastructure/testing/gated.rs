//! Lookup double whose responses are held until the test releases them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use charsheet_shared::LookupRequest;
use serde_json::Value;
use tokio::sync::watch;

use crate::ports::outbound::{LookupError, LookupPort};

/// Counts backend calls and blocks every `fetch` until `release` is called.
///
/// Releasing is sticky: later fetches pass straight through.
pub struct GatedLookupPort {
    calls: AtomicUsize,
    requests: Mutex<Vec<LookupRequest>>,
    response: Mutex<Result<Value, LookupError>>,
    gate: watch::Sender<bool>,
}

impl GatedLookupPort {
    /// Fetches wait for `release`
    pub fn held(response: Result<Value, LookupError>) -> Self {
        Self::with_gate(response, false)
    }

    /// Fetches answer immediately
    pub fn open(response: Result<Value, LookupError>) -> Self {
        Self::with_gate(response, true)
    }

    fn with_gate(response: Result<Value, LookupError>, open: bool) -> Self {
        let (gate, _) = watch::channel(open);
        Self {
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            response: Mutex::new(response),
            gate,
        }
    }

    pub fn release(&self) {
        self.gate.send_replace(true);
    }

    pub fn set_response(&self, response: Result<Value, LookupError>) {
        *self.response.lock().unwrap_or_else(PoisonError::into_inner) = response;
    }

    /// Number of fetches that reached the backend
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<LookupRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl LookupPort for GatedLookupPort {
    async fn fetch(&self, request: &LookupRequest) -> Result<Value, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        let mut gate = self.gate.subscribe();
        let opened = gate.wait_for(|open| *open).await.is_ok();
        if !opened {
            return Err(LookupError::Cancelled);
        }

        self.response
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

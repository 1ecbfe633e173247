//! Remote lookup with at most one pending request per resource key.
//!
//! A trigger for an idle key starts a request and records it as pending. A
//! trigger for the same key carrying the same request joins the pending
//! future, so both callers observe one outcome. A trigger carrying a different
//! request is rejected with [`LookupError::Busy`].
//!
//! Claiming a key is synchronous, so an action knows whether it was accepted
//! before it touches the page. Every request runs on its own task, so a caller
//! that goes away never strands the key in the pending state. The entry is
//! released before any caller sees the outcome.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use charsheet_shared::{LookupRequest, ResourceKey};
use futures_util::future::{AbortHandle, Abortable, BoxFuture, FutureExt, Shared};
use serde_json::Value;
use uuid::Uuid;

use crate::ports::outbound::{LookupError, LookupPort};

/// Outcome of an accepted lookup, shared by every caller that joined it
pub type LookupFuture = Shared<BoxFuture<'static, Result<Value, LookupError>>>;

type InFlightMap = Arc<Mutex<HashMap<ResourceKey, InFlight>>>;

/// Observable state of one resource key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Pending,
}

struct InFlight {
    request: LookupRequest,
    outcome: LookupFuture,
    abort: AbortHandle,
    invocation: Uuid,
}

#[derive(Clone)]
pub struct RemoteLookup {
    port: Arc<dyn LookupPort>,
    in_flight: InFlightMap,
    timeout: Duration,
}

fn lock(in_flight: &InFlightMap) -> MutexGuard<'_, HashMap<ResourceKey, InFlight>> {
    in_flight.lock().unwrap_or_else(PoisonError::into_inner)
}

impl RemoteLookup {
    pub fn new(port: Arc<dyn LookupPort>, timeout: Duration) -> Self {
        Self {
            port,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            timeout,
        }
    }

    /// Fetch `request` under `key`, joining an identical pending request.
    pub async fn fetch(
        &self,
        key: ResourceKey,
        request: LookupRequest,
    ) -> Result<Value, LookupError> {
        self.claim(key, request)?.await
    }

    /// Start or join the lookup for `key` without waiting for it.
    ///
    /// Fails only with [`LookupError::Busy`]. Must be called inside a Tokio
    /// runtime.
    pub fn claim(
        &self,
        key: ResourceKey,
        request: LookupRequest,
    ) -> Result<LookupFuture, LookupError> {
        let mut in_flight = lock(&self.in_flight);
        match in_flight.get(&key) {
            Some(pending) if pending.request == request => {
                tracing::debug!(
                    key = %key,
                    invocation = %pending.invocation,
                    "Joining pending lookup"
                );
                Ok(pending.outcome.clone())
            }
            Some(pending) => {
                tracing::debug!(
                    key = %key,
                    invocation = %pending.invocation,
                    "Rejecting lookup, key is busy with a different request"
                );
                Err(LookupError::Busy {
                    key: key.to_string(),
                })
            }
            None => {
                let entry = self.start(key.clone(), request);
                let outcome = entry.outcome.clone();
                in_flight.insert(key, entry);
                Ok(outcome)
            }
        }
    }

    fn start(&self, key: ResourceKey, request: LookupRequest) -> InFlight {
        let invocation = Uuid::new_v4();
        let (abort, registration) = AbortHandle::new_pair();
        let port = Arc::clone(&self.port);
        let in_flight = Arc::clone(&self.in_flight);
        let timeout = self.timeout;
        let sent = request.clone();

        tracing::debug!(key = %key, invocation = %invocation, "Starting lookup");

        let outcome = async move {
            let call = Abortable::new(port.fetch(&sent), registration);
            let result = match tokio::time::timeout(timeout, call).await {
                Ok(Ok(result)) => result,
                Ok(Err(_aborted)) => Err(LookupError::Cancelled),
                Err(_elapsed) => Err(LookupError::Timeout {
                    timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
                }),
            };

            {
                let mut in_flight = lock(&in_flight);
                if in_flight
                    .get(&key)
                    .is_some_and(|entry| entry.invocation == invocation)
                {
                    in_flight.remove(&key);
                }
            }
            tracing::debug!(
                key = %key,
                invocation = %invocation,
                ok = result.is_ok(),
                "Lookup settled, key released"
            );
            result
        }
        .boxed()
        .shared();

        tokio::spawn(outcome.clone());

        InFlight {
            request,
            outcome,
            abort,
            invocation,
        }
    }

    /// Cancel the pending lookup under `key`; its callers receive `Cancelled`.
    ///
    /// Returns false when the key was idle.
    pub fn cancel(&self, key: &ResourceKey) -> bool {
        match lock(&self.in_flight).remove(key) {
            Some(entry) => {
                tracing::debug!(key = %key, invocation = %entry.invocation, "Cancelling lookup");
                entry.abort.abort();
                true
            }
            None => false,
        }
    }

    pub fn state(&self, key: &ResourceKey) -> LookupState {
        if lock(&self.in_flight).contains_key(key) {
            LookupState::Pending
        } else {
            LookupState::Idle
        }
    }
}

//! Outbound ports - Interfaces for external collaborators
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to talk to the backend and the page without
//! depending on concrete implementations.

pub mod bindings;
pub mod lookup_port;
pub mod page_port;

pub use lookup_port::{LookupError, LookupPort};
pub use page_port::{FieldId, ListGroup, ListId, PagePort, TextId, ToggleId};

#[cfg(any(test, feature = "testing"))]
pub use lookup_port::MockLookupPort;

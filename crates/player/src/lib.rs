//! Character sheet player client.
//!
//! This crate contains the page services (field reading, aligned list
//! appends, coalesced backend lookups and the per-page updaters), the
//! infrastructure adapters behind them, and a terminal shell that drives a
//! page session.

pub mod application;
pub mod infrastructure;
pub mod ports;
pub mod runner;
pub mod state;

// Re-export commonly used entrypoints
pub use state::PageSession;

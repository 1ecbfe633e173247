//! State containers for player-side dependency injection
//!
//! Aggregates the page services over one page and one lookup backend.

mod session;

pub use session::PageSession;

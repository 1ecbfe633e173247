//! Test doubles shared by unit and integration tests

pub mod fixtures;
mod gated;

pub use gated::GatedLookupPort;

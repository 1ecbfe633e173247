//! Character sheet wire contract
//!
//! Types shared with the character sheet backend:
//! - Resources (endpoint paths, query parameters, resource keys)
//! - Lookup requests
//! - Response envelopes and positional-row decoding
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and decoding
//! 2. **Positional rows are the contract** - column indices live in one place

pub mod requests;
pub mod resources;
pub mod responses;

pub use requests::LookupRequest;
pub use resources::{Resource, ResourceKey};
pub use responses::{decode_item_name, decode_roll, decode_row, decode_spell, ResponseError};

//! Page implementations of the binding layer

mod memory;

pub use memory::MemoryPage;

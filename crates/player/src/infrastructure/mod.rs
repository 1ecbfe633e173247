pub mod config;
pub mod http_client;
pub mod offline;
pub mod page;

pub mod testing;

pub use config::ClientConfig;
pub use http_client::HttpLookupClient;
pub use offline::OfflineLookup;
pub use page::MemoryPage;

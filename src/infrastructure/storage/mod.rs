// Key-value backends
pub mod json_file;
pub mod memory;
// Bounded saved-quote history on top of a backend
pub mod quote_store;

// Re-export storage components
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use quote_store::QuoteStore;

//! In-memory storage implementation

pub mod memory;

pub use memory::MemoryStorage;

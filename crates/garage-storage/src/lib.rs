//! Garage Storage - Entity store for the vehicle catalog
//!
//! This crate defines the store contract used by the query layer and
//! the in-memory backend the service runs on.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStorage;
pub use traits::CatalogStore;

//! Storage Adapters
//!
//! Implementations of the LocalStorage port for the persisted session.
//!
//! ## Available Adapters
//!
//! - **FileLocalStorage** - JSON object file on disk, mode 0600 on unix
//! - **InMemoryLocalStorage** - HashMap in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileLocalStorage, InMemoryLocalStorage};
//!
//! // Production: file-based storage
//! let storage = FileLocalStorage::in_dir(".evently");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryLocalStorage::new();
//! ```

mod file_local_storage;
mod in_memory_local_storage;

pub use file_local_storage::FileLocalStorage;
pub use in_memory_local_storage::InMemoryLocalStorage;

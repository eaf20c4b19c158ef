//! Dataset and progress cursor storage
//!
//! This module provides the store traits and their file-backed and in-memory
//! implementations.

pub mod file;
pub mod memory;
pub mod traits;

pub use file::{JsonFileDatasetStore, TextFileCursorStore};
pub use memory::{InMemoryCursorStore, InMemoryDatasetStore};
pub use traits::{CursorStore, DatasetStore};

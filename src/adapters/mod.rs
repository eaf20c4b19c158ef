//! External integrations
//!
//! - [`baserow`] - Page fetcher for the Baserow list-rows API
//! - [`storage`] - Persistence for the accumulated dataset and the progress cursor

pub mod baserow;
pub mod storage;

pub use baserow::{BaserowClient, PageResponse, PageSource};
pub use storage::{CursorStore, DatasetStore};

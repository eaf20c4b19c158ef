//! Export state: progress cursor and dataset accumulation

pub mod cursor;
pub mod manager;

pub use cursor::PageCursor;
pub use manager::StateManager;

//! Baserow adapter
//!
//! This module provides the page fetcher for the Baserow list-rows API.

pub mod client;
pub mod models;
pub mod source;

pub use client::BaserowClient;
pub use models::PageResponse;
pub use source::PageSource;

//! Export orchestration
//!
//! This module provides the driver loop, including:
//! - The lazy page sequence and pacing between requests
//! - Export coordination (accumulate, then checkpoint)
//! - Summary and reporting

pub mod coordinator;
pub mod pacing;
pub mod pager;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;

pub use coordinator::{ExportCoordinator, ExportSettings};
pub use pacing::{FixedDelay, NoPacing, PacingStrategy};
pub use pager::Pager;
pub use summary::ExportSummary;

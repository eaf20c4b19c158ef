//! Pacing between page requests
//!
//! A [`PacingStrategy`] decides how long to wait before each request after
//! the first. The default does not wait at all.

use std::sync::Arc;
use std::time::Duration;

/// Delay policy between consecutive page requests
pub trait PacingStrategy: Send + Sync {
    /// Delay before the next request, given how many requests were already made
    fn delay_before(&self, requests_made: u64) -> Duration;
}

/// Requests are issued back to back
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl PacingStrategy for NoPacing {
    fn delay_before(&self, _requests_made: u64) -> Duration {
        Duration::ZERO
    }
}

/// Same pause before every request after the first
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    /// Pause `delay` between requests
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl PacingStrategy for FixedDelay {
    fn delay_before(&self, requests_made: u64) -> Duration {
        if requests_made == 0 {
            Duration::ZERO
        } else {
            self.delay
        }
    }
}

/// Strategy for a configured delay; zero means no pacing
pub fn pacing_for(delay: Duration) -> Arc<dyn PacingStrategy> {
    if delay.is_zero() {
        Arc::new(NoPacing)
    } else {
        Arc::new(FixedDelay::new(delay))
    }
}

//! Scripted page source for driver tests

use crate::adapters::baserow::{PageResponse, PageSource};
use crate::core::export::pacing::PacingStrategy;
use crate::domain::{DumpError, FetchError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// Replies with pre-recorded `(status, body)` pairs, one per request
pub(crate) struct ScriptedSource {
    replies: Mutex<VecDeque<(u16, Value)>>,
    requests: Mutex<Vec<(u64, u64)>>,
}

impl ScriptedSource {
    pub(crate) fn new(replies: Vec<(u16, Value)>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// One 200 reply per batch of record ids
    pub(crate) fn pages(batches: &[&[u64]]) -> Self {
        Self::new(
            batches
                .iter()
                .map(|ids| {
                    let records: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
                    (200, json!({ "count": 0, "results": records }))
                })
                .collect(),
        )
    }

    /// `(page, size)` of every request made
    pub(crate) fn requests(&self) -> Vec<(u64, u64)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for ScriptedSource {
    async fn fetch_page(&self, page: u64, size: u64) -> Result<PageResponse> {
        self.requests.lock().unwrap().push((page, size));
        let (status, body) = self.replies.lock().unwrap().pop_front().ok_or_else(|| {
            DumpError::Fetch(FetchError::ConnectionFailed(format!(
                "no scripted reply for page {page}"
            )))
        })?;
        Ok(PageResponse::new(page, status, body))
    }

    fn describe(&self) -> String {
        "scripted".to_string()
    }
}

/// Records every delay it is asked for and never actually waits
#[derive(Default)]
pub(crate) struct RecordingPacing {
    asked: Mutex<Vec<u64>>,
}

impl RecordingPacing {
    pub(crate) fn asked(&self) -> Vec<u64> {
        self.asked.lock().unwrap().clone()
    }
}

impl PacingStrategy for RecordingPacing {
    fn delay_before(&self, requests_made: u64) -> Duration {
        self.asked.lock().unwrap().push(requests_made);
        Duration::ZERO
    }
}

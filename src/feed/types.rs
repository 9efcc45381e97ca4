use serde::Serialize;

use crate::extraction::types::{EventRecord, ItemError};

/// Batch-level failures. Any of these aborts the run; no partial list is returned.
#[derive(Debug)]
pub enum FeedError {
    Status { status: u16 },
    Request(String),
    Io(std::io::Error),
    Parse(rss::Error),
}

impl std::fmt::Display for FeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FeedError::Status { status, .. } => write!(f, "HTTP error! status: {}", status),
            FeedError::Request(msg) => write!(f, "request failed: {}", msg),
            FeedError::Io(err) => write!(f, "read failed: {}", err),
            FeedError::Parse(err) => write!(f, "feed is not valid RSS: {}", err),
        }
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeedError::Io(err) => Some(err),
            FeedError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { FeedError::Request(format!("timed out: {}", err)) } else { FeedError::Request(err.to_string()) }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkippedItem {
    pub index: usize,
    pub title: Option<String>,
    pub reason: &'static str,
    pub detail: String,
}

impl SkippedItem {
    pub fn new(index: usize, title: Option<String>, err: &ItemError) -> Self {
        Self { index, title, reason: err.reason(), detail: err.to_string() }
    }
}

/// Extracted events in feed order, plus the items that had to be left out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventList {
    pub events: Vec<EventRecord>,
    pub skipped: Vec<SkippedItem>,
}

impl EventList {
    pub fn is_empty(&self) -> bool { self.events.is_empty() }
    pub fn len(&self) -> usize { self.events.len() }
}

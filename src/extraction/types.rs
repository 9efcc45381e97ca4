use serde::{Deserialize, Serialize};

/// One `<item>` as it comes out of the channel, before any field is trusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFeedItem {
    pub guid: Option<String>,
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub link: String,
    pub title: String,
    pub start_date: String,
    pub start_time_display: String,
    pub duration_minutes: u32,
    pub location: String,
}

/// Why a single item could not become an [`EventRecord`]. Never fatal for the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    MissingField(&'static str),
    MalformedDays(String),
    MalformedTime(String),
    UnresolvedDate(String),
    NonexistentLocalTime(String),
}

impl ItemError {
    /// Short machine-friendly reason, used in logs and `check` output.
    pub fn reason(&self) -> &'static str {
        match self {
            ItemError::MissingField(_) => "missing-field",
            ItemError::MalformedDays(_) => "malformed-days",
            ItemError::MalformedTime(_) => "malformed-time",
            ItemError::UnresolvedDate(_) => "unresolved-date",
            ItemError::NonexistentLocalTime(_) => "nonexistent-local-time",
        }
    }
}

impl std::fmt::Display for ItemError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemError::MissingField(name) => write!(f, "missing field: {}", name),
            ItemError::MalformedDays(s) => write!(f, "days text does not match '<date> at <start> - <end>': {:?}", s),
            ItemError::MalformedTime(s) => write!(f, "not a 12-hour time: {:?}", s),
            ItemError::UnresolvedDate(s) => write!(f, "cannot resolve start date: {:?}", s),
            ItemError::NonexistentLocalTime(s) => write!(f, "local time does not exist in zone: {}", s),
        }
    }
}

impl std::error::Error for ItemError {}

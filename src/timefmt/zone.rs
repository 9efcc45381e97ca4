use chrono::{DateTime, Datelike, NaiveDateTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::extraction::types::ItemError;

/// Substitutions applied to the zone label of a rendered start time.
///
/// chrono-tz already labels Sydney `AEST`/`AEDT`, so these entries only take
/// effect for labels that arrive as full names.
pub fn default_abbreviations() -> Vec<(String, String)> {
    vec![
        ("Australian Eastern Standard Time".to_string(), "AEST".to_string()),
        ("Australian Eastern Daylight Time".to_string(), "AEDT".to_string()),
    ]
}

#[derive(Clone, Debug)]
pub struct ZonedTimeFormatter {
    zone: Tz,
    abbreviations: Vec<(String, String)>,
}

impl ZonedTimeFormatter {
    pub fn new(zone: Tz, abbreviations: Vec<(String, String)>) -> Self {
        Self { zone, abbreviations }
    }

    /// Render a naive wall-clock time in the configured zone as `"hh:mm AM (LABEL)"`.
    ///
    /// The label reflects the offset in force at that instant, so it follows
    /// daylight saving. Ambiguous local times take the earlier instant; local
    /// times skipped by a DST transition are rejected.
    pub fn format(&self, local: NaiveDateTime) -> Result<String, ItemError> {
        let local = local.with_second(0).unwrap_or(local).with_nanosecond(0).unwrap_or(local);
        let zoned = self
            .zone
            .from_local_datetime(&local)
            .earliest()
            .ok_or_else(|| ItemError::NonexistentLocalTime(local.format("%Y-%m-%d %H:%M").to_string()))?;
        let label = zoned.format("%Z").to_string();
        Ok(format!("{} ({})", zoned.format("%I:%M %p"), self.abbreviate(&label)))
    }

    pub fn abbreviate(&self, label: &str) -> String {
        self.abbreviations
            .iter()
            .find(|(full, _)| full == label)
            .map(|(_, short)| short.clone())
            .unwrap_or_else(|| label.to_string())
    }
}

/// "Last updated" stamp, e.g. `Oct 16th, 2026 02:30 PM`, in whatever zone `dt` carries.
pub fn format_stamp<T: TimeZone>(dt: &DateTime<T>) -> String
where
    T::Offset: std::fmt::Display,
{
    let day = dt.day();
    format!("{} {}{}, {} {}", dt.format("%b"), day, ordinal_suffix(day), dt.year(), dt.format("%I:%M %p"))
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

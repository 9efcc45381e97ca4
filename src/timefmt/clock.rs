use crate::extraction::types::ItemError;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time on a 24-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hours: u8,
    pub minutes: u8,
}

impl TimeOfDay {
    pub fn total_minutes(&self) -> u32 {
        self.hours as u32 * 60 + self.minutes as u32
    }
}

/// Convert `"H:MM AM"` / `"H:MM PM"` into a 24-hour [`TimeOfDay`].
///
/// The meridiem marker is case-sensitive and separated by exactly one space.
pub fn convert(time_str: &str) -> Result<TimeOfDay, ItemError> {
    let malformed = || ItemError::MalformedTime(time_str.to_string());

    let parts: Vec<&str> = time_str.split(' ').collect();
    let [time, modifier] = parts.as_slice() else { return Err(malformed()) };

    let hm: Vec<&str> = time.split(':').collect();
    let [h, m] = hm.as_slice() else { return Err(malformed()) };
    if m.len() != 2 { return Err(malformed()); }
    let hours: u8 = h.parse().map_err(|_| malformed())?;
    let minutes: u8 = m.parse().map_err(|_| malformed())?;
    if !(1..=12).contains(&hours) || minutes > 59 { return Err(malformed()); }

    let hours = match (*modifier, hours) {
        ("AM", 12) => 0,
        ("AM", h) => h,
        ("PM", 12) => 12,
        ("PM", h) => h + 12,
        _ => return Err(malformed()),
    };
    Ok(TimeOfDay { hours, minutes })
}

/// Minutes from `start` to `end`, wrapping forward across midnight.
///
/// Spans longer than a day cannot be expressed by two times of day and
/// collapse to their remainder; the result is always in `0..=1439`.
pub fn duration_minutes(start: TimeOfDay, end: TimeOfDay) -> u32 {
    let (s, e) = (start.total_minutes(), end.total_minutes());
    if e >= s { e - s } else { e + MINUTES_PER_DAY - s }
}

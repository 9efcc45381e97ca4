use std::sync::OnceLock;

use regex::Regex;

use super::types::ItemError;

/// The three parts of a "days" value such as `Tue-14-May-2024 at 2:00 PM - 3:30 PM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaysText {
    pub date_range: String,
    pub start: String,
    pub end: String,
}

impl DaysText {
    /// First two `-`-delimited tokens of the date range, joined by a space.
    pub fn start_date(&self) -> String {
        self.date_range
            .split('-')
            .take(2)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The opening date of the range with month and year intact, e.g.
    /// `Tue-14-May` out of `Tue-14-May - Wed-15-May`.
    pub fn first_date(&self) -> &str {
        self.date_range.split(" - ").next().unwrap_or(&self.date_range).trim()
    }
}

fn days_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(?P<date>.+?)(?: at | - )(?P<start>\d{1,2}:\d{2} [AP]M)(?: at | - )(?P<end>\d{1,2}:\d{2} [AP]M)$",
        )
        .expect("days pattern compiles")
    })
}

pub fn parse_days(text: &str) -> Result<DaysText, ItemError> {
    let text = text.trim();
    let caps = days_re()
        .captures(text)
        .ok_or_else(|| ItemError::MalformedDays(text.to_string()))?;
    Ok(DaysText {
        date_range: caps["date"].trim().to_string(),
        start: caps["start"].to_string(),
        end: caps["end"].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_at_then_dash() {
        let d = parse_days("Tue-14-May-2024 at 2:00 PM - 3:30 PM").unwrap();
        assert_eq!(d.date_range, "Tue-14-May-2024");
        assert_eq!(d.start, "2:00 PM");
        assert_eq!(d.end, "3:30 PM");
        assert_eq!(d.start_date(), "Tue 14");
        assert_eq!(d.first_date(), "Tue-14-May-2024");
    }

    #[test]
    fn accepts_either_separator_in_either_slot() {
        let d = parse_days("Monday 14 - 2:00 PM at 3:30 PM").unwrap();
        assert_eq!(d.date_range, "Monday 14");
        assert_eq!(d.start_date(), "Monday 14");
        assert_eq!((d.start.as_str(), d.end.as_str()), ("2:00 PM", "3:30 PM"));
    }

    #[test]
    fn date_range_may_itself_contain_a_dash_separator() {
        let d = parse_days("Tue-14-May - Wed-15-May at 10:00 AM - 12:00 PM").unwrap();
        assert_eq!(d.date_range, "Tue-14-May - Wed-15-May");
        assert_eq!(d.start, "10:00 AM");
        assert_eq!(d.start_date(), "Tue 14");
        assert_eq!(d.first_date(), "Tue-14-May");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let d = parse_days("\n   Fri-3-Jan at 9:00 AM - 11:00 AM  \n").unwrap();
        assert_eq!(d.end, "11:00 AM");
    }

    #[test]
    fn shape_mismatch_is_malformed() {
        for bad in ["Tue-14-May at 2:00 PM", "2:00 PM - 3:30 PM", "Tue 14 at 2pm - 3pm", ""] {
            assert!(matches!(parse_days(bad), Err(ItemError::MalformedDays(_))), "{bad:?}");
        }
    }
}

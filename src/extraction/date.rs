use chrono::{Datelike, Days, Month, NaiveDate, Weekday};

// long enough for any weekday/day-of-month pairing to come round again
const SEARCH_DAYS: u64 = 800;

#[derive(Debug, Default, PartialEq, Eq)]
struct DateHints {
    day: Option<u32>,
    weekday: Option<Weekday>,
    month: Option<u32>,
    year: Option<i32>,
}

impl DateHints {
    fn matches(&self, d: &NaiveDate) -> bool {
        Some(d.day()) == self.day
            && self.weekday.is_none_or(|w| d.weekday() == w)
            && self.month.is_none_or(|m| d.month() == m)
            && self.year.is_none_or(|y| d.year() == y)
    }
}

fn parse_day(tok: &str) -> Option<u32> {
    let digits = tok.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    let suffix = &tok[digits.len()..];
    if !suffix.is_empty() && !matches!(suffix.to_ascii_lowercase().as_str(), "st" | "nd" | "rd" | "th") {
        return None;
    }
    digits.parse::<u32>().ok().filter(|d| (1..=31).contains(d))
}

fn parse_year(tok: &str) -> Option<i32> {
    if tok.len() != 4 || !tok.bytes().all(|b| b.is_ascii_digit()) { return None; }
    tok.parse().ok()
}

fn hints(label: &str) -> Option<DateHints> {
    let mut h = DateHints::default();
    for tok in label.split(|c: char| c.is_whitespace() || c == ',' || c == '-').filter(|t| !t.is_empty()) {
        if let Some(y) = parse_year(tok) {
            if h.year.replace(y).is_some() { return None; }
        } else if let Some(d) = parse_day(tok) {
            if h.day.replace(d).is_some() { return None; }
        } else if let Ok(w) = tok.parse::<Weekday>() {
            if h.weekday.replace(w).is_some() { return None; }
        } else if let Ok(m) = tok.parse::<Month>() {
            if h.month.replace(m.number_from_month()).is_some() { return None; }
        } else {
            return None;
        }
    }
    h.day.is_some().then_some(h)
}

/// Resolve a date label such as `Tue 14`, `14 May`, `May 14th` or
/// `Wed-14-Jan-2026` to a calendar date.
///
/// Every hint present in the label must hold. Without a year the first match
/// on or after `reference` wins; with a year the search covers that year only.
pub fn resolve_start_date(label: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let h = hints(label)?;
    let from = match h.year {
        Some(y) => NaiveDate::from_ymd_opt(y, h.month.unwrap_or(1), 1)?,
        None => reference,
    };
    (0..SEARCH_DAYS)
        .filter_map(|n| from.checked_add_days(Days::new(n)))
        .find(|d| h.matches(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate { NaiveDate::from_ymd_opt(y, m, d).unwrap() }

    #[test]
    fn weekday_and_day_pick_next_matching_month() {
        // 2024-05-14 is a Tuesday; the next Monday the 14th is October 2024
        assert_eq!(resolve_start_date("Tue 14", ymd(2024, 5, 1)), Some(ymd(2024, 5, 14)));
        assert_eq!(resolve_start_date("Monday 14", ymd(2024, 5, 1)), Some(ymd(2024, 10, 14)));
    }

    #[test]
    fn reference_day_itself_counts() {
        assert_eq!(resolve_start_date("Tue 14", ymd(2024, 5, 14)), Some(ymd(2024, 5, 14)));
    }

    #[test]
    fn month_forms_roll_into_next_year() {
        assert_eq!(resolve_start_date("14 May", ymd(2024, 6, 1)), Some(ymd(2025, 5, 14)));
        assert_eq!(resolve_start_date("May 14th", ymd(2024, 5, 1)), Some(ymd(2024, 5, 14)));
    }

    #[test]
    fn search_horizon_is_bounded() {
        // next Feb 29 after 2025 is past the horizon
        assert_eq!(resolve_start_date("Feb 29", ymd(2025, 1, 1)), None);
        assert_eq!(resolve_start_date("Feb 29", ymd(2027, 1, 1)), Some(ymd(2028, 2, 29)));
    }

    #[test]
    fn month_and_year_pin_the_date() {
        // 2025-05-14 is also a Wednesday, but the label names January 2026
        assert_eq!(resolve_start_date("Wed-14-Jan-2026", ymd(2025, 5, 1)), Some(ymd(2026, 1, 14)));
        assert_eq!(resolve_start_date("Wed 14 Jan", ymd(2025, 5, 1)), Some(ymd(2026, 1, 14)));
    }

    #[test]
    fn explicit_year_may_precede_reference() {
        assert_eq!(resolve_start_date("Tue-14-May-2024", ymd(2025, 1, 1)), Some(ymd(2024, 5, 14)));
        assert_eq!(resolve_start_date("14 2026", ymd(2025, 5, 1)), Some(ymd(2026, 1, 14)));
    }

    #[test]
    fn contradictory_hints_do_not_resolve() {
        // 2026-01-14 is a Wednesday
        assert_eq!(resolve_start_date("Mon-14-Jan-2026", ymd(2025, 5, 1)), None);
        assert_eq!(resolve_start_date("Feb-29-2025", ymd(2025, 1, 1)), None);
    }

    #[test]
    fn bare_day_is_enough() {
        assert_eq!(resolve_start_date("3", ymd(2024, 5, 20)), Some(ymd(2024, 6, 3)));
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(resolve_start_date("Someday soon", ymd(2024, 5, 1)), None);
        assert_eq!(resolve_start_date("Tue", ymd(2024, 5, 1)), None);
        assert_eq!(resolve_start_date("14 15", ymd(2024, 5, 1)), None);
        assert_eq!(resolve_start_date("14 May 2024 2025", ymd(2024, 5, 1)), None);
        assert_eq!(resolve_start_date("14xx", ymd(2024, 5, 1)), None);
    }
}

use chrono::NaiveDate;

use crate::timefmt::{self, ZonedTimeFormatter};

pub mod date;
pub mod days;
pub mod markup;
pub mod types;

use markup::{Description, FieldSelectors};
use types::{EventRecord, ItemError, RawFeedItem};

/// Turns raw feed items into [`EventRecord`]s.
///
/// `reference` anchors short start dates (`Tue 14`) to a calendar date; it is
/// normally today in the formatter's zone.
#[derive(Clone, Debug)]
pub struct Extractor {
    selectors: FieldSelectors,
    formatter: ZonedTimeFormatter,
    reference: NaiveDate,
}

impl Extractor {
    pub fn new(selectors: FieldSelectors, formatter: ZonedTimeFormatter, reference: NaiveDate) -> Self {
        Self { selectors, formatter, reference }
    }

    pub fn extract(&self, item: &RawFeedItem) -> Result<EventRecord, ItemError> {
        let link = item.guid.as_deref().or(item.link.as_deref()).ok_or(ItemError::MissingField("guid"))?;
        let title = item.title.as_deref().ok_or(ItemError::MissingField("title"))?;
        let html = item.description.as_deref().ok_or(ItemError::MissingField("description"))?;

        let desc = Description::parse(html);
        let days_text = desc.days(&self.selectors).ok_or(ItemError::MissingField("days"))?;
        let location = desc.location(&self.selectors).ok_or(ItemError::MissingField("location"))?;

        let days = days::parse_days(&days_text)?;
        let start = timefmt::convert(&days.start)?;
        let end = timefmt::convert(&days.end)?;

        let on = date::resolve_start_date(days.first_date(), self.reference)
            .ok_or_else(|| ItemError::UnresolvedDate(days.first_date().to_string()))?;
        let local = on
            .and_hms_opt(start.hours as u32, start.minutes as u32, 0)
            .ok_or_else(|| ItemError::MalformedTime(days.start.clone()))?;

        Ok(EventRecord {
            link: link.to_string(),
            title: title.to_string(),
            start_date: days.start_date(),
            start_time_display: self.formatter.format(local)?,
            duration_minutes: timefmt::duration_minutes(start, end),
            location,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::timefmt::zone::default_abbreviations;
    use chrono_tz::Australia::Sydney;

    pub(crate) fn sample_extractor() -> Extractor {
        Extractor::new(
            FieldSelectors::default(),
            ZonedTimeFormatter::new(Sydney, default_abbreviations()),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        )
    }

    pub(crate) fn description(days: Option<&str>, location: Option<&str>) -> String {
        let mut html = String::new();
        if let Some(d) = days {
            html.push_str(&format!(
                r#"<div class="entry-dynamicstrings_days"><span class="feed-entry-value">{d}</span></div>"#
            ));
        }
        if let Some(l) = location {
            html.push_str(&format!(
                r#"<div class="entry-dynamicstrings_location"><span class="feed-entry-value">{l}</span></div>"#
            ));
        }
        html
    }

    fn item(days: Option<&str>, location: Option<&str>) -> RawFeedItem {
        RawFeedItem {
            guid: Some("https://events.example.edu/e/42".into()),
            link: None,
            title: Some("LinkedIn Essentials".into()),
            description: Some(description(days, location)),
        }
    }

    #[test]
    fn well_formed_item() {
        let rec = sample_extractor()
            .extract(&item(Some("Monday 14 - 2:00 PM at 3:30 PM"), Some("Burwood Campus")))
            .unwrap();
        assert_eq!(rec.link, "https://events.example.edu/e/42");
        assert_eq!(rec.title, "LinkedIn Essentials");
        assert_eq!(rec.start_date, "Monday 14");
        // resolves to Monday 2024-10-14, after the October DST switch
        assert_eq!(rec.start_time_display, "02:00 PM (AEDT)");
        assert_eq!(rec.duration_minutes, 90);
        assert_eq!(rec.location, "Burwood Campus");
    }

    #[test]
    fn hyphenated_date_range_in_winter() {
        let rec = sample_extractor()
            .extract(&item(Some("Tue-14-May-2024 at 11:00 AM - 12:15 PM"), Some("Online")))
            .unwrap();
        assert_eq!(rec.start_date, "Tue 14");
        assert_eq!(rec.start_time_display, "11:00 AM (AEST)");
        assert_eq!(rec.duration_minutes, 75);
    }

    #[test]
    fn month_and_year_in_days_text_decide_the_zone_label() {
        // Wed 2025-05-14 would match "Wed 14" first and read as AEST
        let ex = Extractor::new(
            FieldSelectors::default(),
            ZonedTimeFormatter::new(Sydney, default_abbreviations()),
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
        );
        let rec = ex.extract(&item(Some("Wed-14-Jan-2026 at 2:00 PM - 3:00 PM"), Some("Online"))).unwrap();
        assert_eq!(rec.start_date, "Wed 14");
        assert_eq!(rec.start_time_display, "02:00 PM (AEDT)");
        assert_eq!(rec.duration_minutes, 60);
    }

    #[test]
    fn overnight_event_wraps() {
        let rec = sample_extractor()
            .extract(&item(Some("Fri-31-May at 11:00 PM - 1:00 AM"), Some("Library")))
            .unwrap();
        assert_eq!(rec.duration_minutes, 120);
    }

    #[test]
    fn link_falls_back_to_item_link() {
        let mut it = item(Some("Tue-14-May at 2:00 PM - 3:00 PM"), Some("Online"));
        it.guid = None;
        it.link = Some("https://events.example.edu/e/7".into());
        assert_eq!(sample_extractor().extract(&it).unwrap().link, "https://events.example.edu/e/7");
    }

    #[test]
    fn missing_fields_are_reported_by_name() {
        let ex = sample_extractor();
        assert_eq!(ex.extract(&item(Some("Tue-14-May at 2:00 PM - 3:00 PM"), None)), Err(ItemError::MissingField("location")));
        assert_eq!(ex.extract(&item(None, Some("Online"))), Err(ItemError::MissingField("days")));
        let mut it = item(None, None);
        it.description = None;
        assert_eq!(ex.extract(&it), Err(ItemError::MissingField("description")));
        let mut it = item(None, None);
        it.title = None;
        assert_eq!(ex.extract(&it), Err(ItemError::MissingField("title")));
    }

    #[test]
    fn bad_days_and_dates() {
        let ex = sample_extractor();
        assert!(matches!(ex.extract(&item(Some("TBA"), Some("Online"))), Err(ItemError::MalformedDays(_))));
        assert!(matches!(
            ex.extract(&item(Some("Someday at 2:00 PM - 3:00 PM"), Some("Online"))),
            Err(ItemError::UnresolvedDate(_))
        ));
    }
}

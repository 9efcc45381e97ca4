use std::time::Duration;

use anyhow::{anyhow, bail, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use url::Url;

use crate::extraction::markup::{FieldSelectors, DEFAULT_DAYS_SELECTOR, DEFAULT_LOCATION_SELECTOR};
use crate::extraction::Extractor;
use crate::timefmt::zone::default_abbreviations;
use crate::timefmt::ZonedTimeFormatter;

const DEFAULT_ZONE: Tz = chrono_tz::Australia::Sydney;
const DEFAULT_CARD_LIMIT: usize = 6;
const DEFAULT_TIMEOUT_SECS: u64 = 20;
const DEFAULT_MORE_URL: &str = "https://talent.deakin.edu.au/leap/events.html";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub feed_url: Option<String>,
    pub zone: Tz,
    pub abbreviations: Vec<(String, String)>,
    pub days_selector: String,
    pub location_selector: String,
    pub card_limit: usize,
    pub http_timeout: Duration,
    pub more_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            feed_url: None,
            zone: DEFAULT_ZONE,
            abbreviations: default_abbreviations(),
            days_selector: DEFAULT_DAYS_SELECTOR.to_string(),
            location_selector: DEFAULT_LOCATION_SELECTOR.to_string(),
            card_limit: DEFAULT_CARD_LIMIT,
            http_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            more_url: DEFAULT_MORE_URL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(url) = get("EVENTS_FEED_URL") {
            cfg.feed_url = Some(validate_url(&url)?);
        }
        if let Some(zone) = get("EVENTS_TIME_ZONE") {
            cfg.zone = parse_zone(&zone)?;
        }
        if let Some(map) = get("EVENTS_ZONE_ABBREVIATIONS") {
            cfg.abbreviations = parse_abbreviations(&map)?;
        }
        if let Some(sel) = get("EVENTS_DAYS_SELECTOR") {
            cfg.days_selector = sel;
        }
        if let Some(sel) = get("EVENTS_LOCATION_SELECTOR") {
            cfg.location_selector = sel;
        }
        if let Some(limit) = get("EVENTS_CARD_LIMIT") {
            cfg.card_limit = limit.parse().map_err(|_| anyhow!("EVENTS_CARD_LIMIT must be a positive integer, got {:?}", limit))?;
        }
        if let Some(secs) = get("EVENTS_HTTP_TIMEOUT_SECS") {
            let parsed: u64 = secs.parse().map_err(|_| anyhow!("EVENTS_HTTP_TIMEOUT_SECS must be a positive integer, got {:?}", secs))?;
            if parsed == 0 { bail!("EVENTS_HTTP_TIMEOUT_SECS must be at least 1"); }
            cfg.http_timeout = Duration::from_secs(parsed);
        }
        if let Some(url) = get("EVENTS_MORE_URL") {
            cfg.more_url = url;
        }
        if cfg.card_limit == 0 { bail!("EVENTS_CARD_LIMIT must be at least 1"); }
        Ok(cfg)
    }

    pub fn formatter(&self) -> ZonedTimeFormatter {
        ZonedTimeFormatter::new(self.zone, self.abbreviations.clone())
    }

    /// Extractor anchored to today's date in the configured zone.
    pub fn extractor(&self) -> Result<Extractor> {
        let today = Utc::now().with_timezone(&self.zone).date_naive();
        self.extractor_at(today)
    }

    pub fn extractor_at(&self, reference: NaiveDate) -> Result<Extractor> {
        let selectors = FieldSelectors::new(&self.days_selector, &self.location_selector)?;
        Ok(Extractor::new(selectors, self.formatter(), reference))
    }
}

pub fn validate_url(url: &str) -> Result<String> {
    match Url::parse(url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => Ok(url.to_string()),
        _ => bail!("Invalid URL: {}", url),
    }
}

pub fn parse_zone(s: &str) -> Result<Tz> {
    s.trim().parse::<Tz>().map_err(|e| anyhow!("unknown time zone {:?}: {}", s, e))
}

/// `Full Name=ABBR;Other Name=OTH` into substitution pairs.
pub fn parse_abbreviations(s: &str) -> Result<Vec<(String, String)>> {
    s.split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|pair| {
            let (full, short) = pair.split_once('=').ok_or_else(|| anyhow!("expected 'Full Name=ABBR', got {:?}", pair))?;
            let (full, short) = (full.trim(), short.trim());
            if full.is_empty() || short.is_empty() { bail!("empty side in {:?}", pair); }
            Ok((full.to_string(), short.to_string()))
        })
        .collect()
}

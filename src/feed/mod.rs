use crate::extraction::Extractor;
use crate::telemetry::{self};
use crate::telemetry::ops::assemble::Phase as AssemblePhase;

pub mod fetch;
pub mod parse;
pub mod types;

use fetch::FeedFetcher;
use types::{EventList, FeedError, SkippedItem};

/// Fetch `url`, parse the channel and extract every item in document order.
///
/// A non-success status, a transport failure or an unparseable document fails
/// the whole call. Items that cannot be extracted are skipped and listed in
/// [`EventList::skipped`]; a channel with no items yields an empty list.
pub async fn assemble<F>(fetcher: &F, url: &str, extractor: &Extractor) -> Result<EventList, FeedError>
where
    F: FeedFetcher + ?Sized,
{
    let log = telemetry::assemble();
    let _g = log.root_span_kv([("url", url.to_string())]).entered();

    let resp = {
        let _s = log.span_kv(&AssemblePhase::FetchFeed, [("url", url.to_string())]).entered();
        fetcher.fetch(url).await?
    };
    if !resp.is_success() {
        return Err(FeedError::Status { status: resp.status });
    }
    log.debug_kv("fetched", [("status", resp.status.to_string()), ("bytes", resp.body.len().to_string())]);

    let items = {
        let _s = log.span(&AssemblePhase::ParseFeed).entered();
        parse::raw_items(&parse::parse_channel(&resp.body)?)
    };
    if items.is_empty() {
        log.info("ℹ️  Feed has no items");
        return Ok(EventList::default());
    }

    let _s = log.span_kv(&AssemblePhase::Extract, [("items", items.len().to_string())]).entered();
    let mut list = EventList::default();
    for (index, item) in items.iter().enumerate() {
        match extractor.extract(item) {
            Ok(rec) => list.events.push(rec),
            Err(err) => {
                let skipped = SkippedItem::new(index, item.title.clone(), &err);
                log.item_skipped(index, item.title.as_deref(), skipped.reason, &skipped.detail);
                list.skipped.push(skipped);
            }
        }
    }
    log.totals(items.len(), list.events.len(), list.skipped.len());
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use std::sync::Mutex;

    use crate::extraction::tests::{description, sample_extractor};
    use fetch::FetchResponse;

    struct StubFetcher {
        status: u16,
        body: String,
        calls: Mutex<Vec<String>>,
    }

    impl StubFetcher {
        fn new(status: u16, body: impl Into<String>) -> Self {
            Self { status, body: body.into(), calls: Mutex::new(Vec::new()) }
        }
    }

    #[async_trait]
    impl FeedFetcher for StubFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchResponse, FeedError> {
            self.calls.lock().unwrap().push(url.to_string());
            Ok(FetchResponse { status: self.status, body: Bytes::from(self.body.clone()) })
        }
    }

    fn item_xml(guid: &str, title: &str, desc: &str) -> String {
        format!("<item><title>{title}</title><guid>{guid}</guid><description><![CDATA[{desc}]]></description></item>")
    }

    fn rss(items: &[String]) -> String {
        format!(
            r#"<?xml version="1.0"?><rss version="2.0"><channel><title>Events</title><link>https://x</link><description>d</description>{}</channel></rss>"#,
            items.concat()
        )
    }

    #[tokio::test]
    async fn empty_channel_is_an_empty_list() {
        let fetcher = StubFetcher::new(200, rss(&[]));
        let list = assemble(&fetcher, "https://x/feed", &sample_extractor()).await.unwrap();
        assert!(list.is_empty());
        assert!(list.skipped.is_empty());
        assert_eq!(fetcher.calls.lock().unwrap().as_slice(), ["https://x/feed"]);
    }

    #[tokio::test]
    async fn non_success_status_is_surfaced() {
        let fetcher = StubFetcher::new(503, "busy");
        let err = assemble(&fetcher, "https://x/feed", &sample_extractor()).await.unwrap_err();
        match &err {
            FeedError::Status { status, .. } => assert_eq!(*status, 503),
            other => panic!("expected status error, got {other:?}"),
        }
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[tokio::test]
    async fn malformed_item_is_skipped_and_order_kept() {
        let items = [
            item_xml("https://x/e/1", "Coffee Meetup", &description(Some("Tue-14-May at 10:00 AM - 11:00 AM"), Some("Cafe"))),
            item_xml("https://x/e/2", "No Location", &description(Some("Tue-14-May at 1:00 PM - 2:00 PM"), None)),
            item_xml("https://x/e/3", "Job Search", &description(Some("Wed-15-May at 9:00 AM - 10:30 AM"), Some("Online"))),
        ];
        let fetcher = StubFetcher::new(200, rss(&items));
        let list = assemble(&fetcher, "https://x/feed", &sample_extractor()).await.unwrap();

        let titles: Vec<&str> = list.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["Coffee Meetup", "Job Search"]);
        assert_eq!(list.events[1].duration_minutes, 90);
        assert_eq!(list.skipped.len(), 1);
        assert_eq!(list.skipped[0].index, 1);
        assert_eq!(list.skipped[0].reason, "missing-field");
        assert_eq!(list.skipped[0].title.as_deref(), Some("No Location"));
    }

    #[tokio::test]
    async fn garbage_body_is_parse_error() {
        let fetcher = StubFetcher::new(200, "<html>oops</html>");
        let err = assemble(&fetcher, "https://x/feed", &sample_extractor()).await.unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }
}

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::extraction::types::EventRecord;
use crate::feed::types::EventList;

pub mod images;
pub mod pagination;

use pagination::{PageState, Paginator};

pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub link: String,
    pub image: String,
    pub title: String,
    pub date: String,
    pub start_time: String,
    pub duration: String,
    pub location: String,
}

impl From<&EventRecord> for Card {
    fn from(ev: &EventRecord) -> Self {
        Card {
            link: ev.link.clone(),
            image: images::image_for(&ev.title).to_string(),
            title: ev.title.clone(),
            date: ev.start_date.clone(),
            start_time: ev.start_time_display.clone(),
            duration: format!("Duration: {} minutes", ev.duration_minutes),
            location: ev.location.clone(),
        }
    }
}

/// What the page shows: a page of cards, the no-events notice, or an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EventsView {
    Events {
        page: usize,
        total_pages: usize,
        summary: String,
        pages: Vec<String>,
        cards: Vec<Card>,
        skipped: usize,
        last_updated: String,
    },
    NoEvents {
        message: String,
        skipped: usize,
        last_updated: String,
    },
    Error {
        message: String,
        last_updated: String,
    },
}

impl EventsView {
    /// Build the view for `state`. An out-of-range page is reported as an error view.
    pub fn from_list(list: &EventList, paginator: &Paginator, state: PageState, more_url: &str, stamp: String) -> Self {
        if list.is_empty() {
            return EventsView::NoEvents {
                message: no_events_message(more_url),
                skipped: list.skipped.len(),
                last_updated: NOT_AVAILABLE.to_string(),
            };
        }
        let total = list.len();
        let (Some(events), Some(summary)) = (paginator.page(&list.events, state), paginator.summary(total, state)) else {
            return EventsView::error(format!(
                "Page {} does not exist (1 to {})",
                state.current,
                paginator.total_pages(total)
            ));
        };
        EventsView::Events {
            page: state.current,
            total_pages: paginator.total_pages(total),
            summary,
            pages: paginator.labels(total, state),
            cards: events.iter().map(Card::from).collect(),
            skipped: list.skipped.len(),
            last_updated: stamp,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        EventsView::Error { message: message.into(), last_updated: NOT_AVAILABLE.to_string() }
    }
}

pub fn no_events_message(more_url: &str) -> String {
    format!("No events available. Visit our events page ({}) to explore what else is on.", more_url)
}

/// Plain-text rendering of a view, one card per block.
pub fn render_text(view: &EventsView, w: &mut dyn Write) -> io::Result<()> {
    match view {
        EventsView::Events { page, total_pages, summary, cards, skipped, last_updated, .. } => {
            writeln!(w, "{}", summary)?;
            writeln!(w)?;
            for card in cards {
                writeln!(w, "● {}", card.title)?;
                writeln!(w, "  {}  {}", card.date, card.start_time)?;
                writeln!(w, "  {}", card.duration)?;
                writeln!(w, "  {}", card.location)?;
                writeln!(w, "  {}", card.link)?;
                writeln!(w, "  [{}]", card.image)?;
                writeln!(w)?;
            }
            writeln!(w, "Page {} of {}", page, total_pages)?;
            if *skipped > 0 { writeln!(w, "({} item(s) could not be read)", skipped)?; }
            writeln!(w, "Last updated: {}", last_updated)
        }
        EventsView::NoEvents { message, last_updated, .. } => {
            writeln!(w, "{}", message)?;
            writeln!(w, "Last updated: {}", last_updated)
        }
        EventsView::Error { message, last_updated } => {
            writeln!(w, "{}", message)?;
            writeln!(w, "Last updated: {}", last_updated)
        }
    }
}

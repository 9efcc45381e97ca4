use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

pub const DEFAULT_DAYS_SELECTOR: &str = ".entry-dynamicstrings_days .feed-entry-value";
pub const DEFAULT_LOCATION_SELECTOR: &str = ".entry-dynamicstrings_location .feed-entry-value";

/// Where the labelled values live inside an item's description markup.
#[derive(Clone, Debug)]
pub struct FieldSelectors {
    days: Selector,
    location: Selector,
}

impl FieldSelectors {
    pub fn new(days: &str, location: &str) -> Result<Self> {
        Ok(Self { days: compile(days)?, location: compile(location)? })
    }
}

#[cfg(test)]
impl Default for FieldSelectors {
    fn default() -> Self {
        Self::new(DEFAULT_DAYS_SELECTOR, DEFAULT_LOCATION_SELECTOR).expect("default selectors are valid")
    }
}

fn compile(sel: &str) -> Result<Selector> {
    Selector::parse(sel).map_err(|e| anyhow!("invalid selector {:?}: {:?}", sel, e))
}

/// Parsed description fragment of one item.
pub struct Description {
    doc: Html,
}

impl Description {
    pub fn parse(html: &str) -> Self {
        Self { doc: Html::parse_fragment(html) }
    }

    pub fn days(&self, sel: &FieldSelectors) -> Option<String> { self.text_of(&sel.days) }

    pub fn location(&self, sel: &FieldSelectors) -> Option<String> { self.text_of(&sel.location) }

    fn text_of(&self, sel: &Selector) -> Option<String> {
        let node = self.doc.select(sel).next()?;
        let text = collapse_whitespace(&node.text().collect::<String>());
        if text.is_empty() { None } else { Some(text) }
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

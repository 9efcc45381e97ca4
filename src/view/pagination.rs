use std::ops::Range;

/// Which page is showing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current: usize,
}

impl Default for PageState {
    fn default() -> Self { Self { current: 1 } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    card_limit: usize,
}

impl Paginator {
    pub fn new(card_limit: usize) -> Self { Self { card_limit: card_limit.max(1) } }

    pub fn total_pages(&self, total: usize) -> usize { total.div_ceil(self.card_limit) }

    /// Index range of `state.current` within `total` items, or `None` when the page does not exist.
    pub fn range(&self, total: usize, state: PageState) -> Option<Range<usize>> {
        if state.current == 0 || state.current > self.total_pages(total) { return None; }
        let start = (state.current - 1) * self.card_limit;
        Some(start..(start + self.card_limit).min(total))
    }

    pub fn page<'a, T>(&self, items: &'a [T], state: PageState) -> Option<&'a [T]> {
        self.range(items.len(), state).map(|r| &items[r])
    }

    pub fn summary(&self, total: usize, state: PageState) -> Option<String> {
        let r = self.range(total, state)?;
        Some(format!("Displaying {} to {} of {} results", r.start + 1, r.end, total))
    }

    /// Accessible labels for every page button, the current one marked active.
    pub fn labels(&self, total: usize, state: PageState) -> Vec<String> {
        let pages = self.total_pages(total);
        (1..=pages)
            .map(|i| {
                if i == state.current { format!("Page {} of {}, active page.", i, pages) }
                else { format!("Page {} of {}", i, pages) }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_rounds_up() {
        let p = Paginator::new(6);
        assert_eq!(p.total_pages(0), 0);
        assert_eq!(p.total_pages(6), 1);
        assert_eq!(p.total_pages(14), 3);
    }

    #[test]
    fn last_page_is_short() {
        let p = Paginator::new(6);
        let items: Vec<u32> = (0..14).collect();
        assert_eq!(p.page(&items, PageState { current: 3 }), Some(&items[12..14]));
        assert_eq!(p.summary(14, PageState { current: 3 }).unwrap(), "Displaying 13 to 14 of 14 results");
        assert_eq!(p.summary(14, PageState::default()).unwrap(), "Displaying 1 to 6 of 14 results");
    }

    #[test]
    fn out_of_range_pages() {
        let p = Paginator::new(6);
        assert_eq!(p.range(14, PageState { current: 0 }), None);
        assert_eq!(p.range(14, PageState { current: 4 }), None);
        assert_eq!(p.range(0, PageState::default()), None);
    }

    #[test]
    fn zero_limit_is_treated_as_one() {
        assert_eq!(Paginator::new(0).total_pages(3), 3);
    }

    #[test]
    fn labels_mark_active_page() {
        let labels = Paginator::new(5).labels(12, PageState { current: 2 });
        assert_eq!(labels, ["Page 1 of 3", "Page 2 of 3, active page.", "Page 3 of 3"]);
    }
}

//! Filter state for the note board.
//!
//! The fetch key is a pure function of this state: two states produce
//! the same `ListKey` exactly when query, tag, and page all match.

use crate::note::Tag;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Search text, tag filter, and 1-based page owned by the board view.
///
/// `query` holds the effective (post-debounce) text. The page is kept
/// `>= 1` by every mutator; `clamp_page` keeps it within the total once
/// a fetch reports one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub query: String,
    pub tag: Option<Tag>,
    pub page: u32,
}

impl FilterState {
    pub fn new(tag: Option<Tag>) -> Self {
        Self {
            query: String::new(),
            tag,
            page: 1,
        }
    }

    /// Replace the effective query. Always snaps back to page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.page = 1;
    }

    pub fn next_page(&mut self, total_pages: u32) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Keep the page in range once the total is known.
    pub fn clamp_page(&mut self, total_pages: u32) {
        self.page = self.page.min(total_pages.max(1)).max(1);
    }

    /// The fetch key this state resolves to.
    pub fn key(&self) -> ListKey {
        ListKey {
            query: self.query.clone(),
            tag: self.tag,
            page: self.page,
        }
    }
}

/// Cache and fetch key for one page of list results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListKey {
    pub query: String,
    pub tag: Option<Tag>,
    pub page: u32,
}

/// Map a filter slug to a tag filter. The literal `"all"` (any case)
/// means no filter; anything else must name a tag.
pub fn parse_slug(slug: &str) -> Result<Option<Tag>, String> {
    if slug.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    Tag::from_str(slug).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_query_resets_page() {
        let mut filter = FilterState::new(Some(Tag::Work));
        filter.next_page(5);
        filter.next_page(5);
        assert_eq!(filter.page, 3);
        filter.set_query("meeting");
        assert_eq!(filter.page, 1);
        assert_eq!(filter.query, "meeting");
    }

    #[test]
    fn test_page_never_drops_below_one() {
        let mut filter = FilterState::new(None);
        filter.prev_page();
        filter.prev_page();
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn test_next_page_clamps_to_total() {
        let mut filter = FilterState::new(None);
        filter.next_page(2);
        filter.next_page(2);
        filter.next_page(2);
        assert_eq!(filter.page, 2);
    }

    #[test]
    fn test_clamp_page_after_total_shrinks() {
        let mut filter = FilterState::new(None);
        filter.page = 7;
        filter.clamp_page(3);
        assert_eq!(filter.page, 3);
        filter.clamp_page(0);
        assert_eq!(filter.page, 1);
    }

    #[test]
    fn test_key_tracks_query_tag_and_page() {
        let mut a = FilterState::new(Some(Tag::Todo));
        let b = a.clone();
        assert_eq!(a.key(), b.key());
        a.set_query("x");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_parse_slug_all_means_no_filter() {
        assert_eq!(parse_slug("all").unwrap(), None);
        assert_eq!(parse_slug("All").unwrap(), None);
        assert_eq!(parse_slug("Work").unwrap(), Some(Tag::Work));
        assert!(parse_slug("chores").is_err());
    }
}

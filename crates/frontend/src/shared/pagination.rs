//! Paginated collection controller: list query state, request shaping,
//! page-count derivation and the page-number strip.
//!
//! Pages are 1-based. A page beyond the known total is never auto-corrected
//! when data arrives; only a new search resets the page.

use contracts::shared::api::PaginatedResponse;
use serde::{Deserialize, Serialize};

use super::query_cache::QueryKey;

/// Page count of the numeric strip below which no ellipsis is used.
pub const MAX_PAGES_WITHOUT_ELLIPSIS: usize = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionQuery {
    pub page: usize,
    pub page_size: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// The part of a list query that round-trips through the address bar.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RouteParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    keyword: Option<String>,
}

fn normalize_keyword(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl CollectionQuery {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            keyword: None,
        }
    }

    /// Restores `page`/`keyword` from a location query string. Anything
    /// unparsable falls back to the first page without a keyword.
    pub fn from_route(query: &str, page_size: usize) -> Self {
        let params: RouteParams =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
        Self {
            page: params.page.unwrap_or(1).max(1),
            page_size: page_size.max(1),
            keyword: params.keyword.as_deref().and_then(normalize_keyword),
        }
    }

    /// `page=..&keyword=..` for the address bar.
    pub fn route_query(&self) -> String {
        let params = RouteParams {
            page: Some(self.page),
            keyword: self.keyword.clone(),
        };
        serde_qs::to_string(&params).unwrap_or_else(|_| format!("page={}", self.page))
    }

    /// Query string for the list endpoint. An absent keyword is omitted,
    /// never sent as an empty value.
    pub fn request_query(&self) -> Result<String, serde_qs::Error> {
        serde_qs::to_string(self)
    }

    pub fn query_key(&self, collection: &str) -> QueryKey {
        QueryKey::new(collection)
            .with("list")
            .with(self.page)
            .with(self.page_size)
            .with(self.keyword.as_deref().unwrap_or_default())
    }

    /// Commits a search keyword. A changed keyword resets to page 1;
    /// an unchanged one is a no-op.
    pub fn with_keyword(&self, raw: &str) -> Option<Self> {
        let keyword = normalize_keyword(raw);
        if keyword == self.keyword {
            return None;
        }
        Some(Self {
            page: 1,
            page_size: self.page_size,
            keyword,
        })
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// A list page as the screens consume it.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub total_pages: usize,
}

impl<T> Default for CollectionResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            total_pages: 0,
        }
    }
}

pub fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_count.div_ceil(page_size)
}

impl<T> CollectionResult<T> {
    /// Uses the server's `total_pages` when given, otherwise derives it.
    pub fn from_response(response: PaginatedResponse<T>, page_size: usize) -> Self {
        let page_size = if response.meta.page_size > 0 {
            response.meta.page_size
        } else {
            page_size
        };
        let total_count = response.meta.total;
        Self {
            items: response.data,
            total_count,
            total_pages: response
                .meta
                .total_pages
                .unwrap_or_else(|| total_pages(total_count, page_size)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

/// Page-number strip: everything up to seven pages, otherwise first, last
/// and a window of one around `current`, with ellipses for the gaps.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= MAX_PAGES_WITHOUT_ELLIPSIS {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total - 1);
    items.extend((start..=end).map(PageItem::Page));
    if current + 2 < total {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total));
    items
}

/// Navigation guard for the pager controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub current: usize,
    pub total_pages: usize,
    pub loading: bool,
}

impl PaginationState {
    pub fn can_prev(&self) -> bool {
        !self.loading && self.current > 1 && self.total_pages > 0
    }

    pub fn can_next(&self) -> bool {
        !self.loading && self.current < self.total_pages
    }

    /// The page to load, or `None` when the request must be ignored.
    pub fn target(&self, page: usize) -> Option<usize> {
        if self.loading || page < 1 || page > self.total_pages || page == self.current {
            None
        } else {
            Some(page)
        }
    }

    /// From beyond the last page (the list shrank) this lands on the last page.
    pub fn prev(&self) -> Option<usize> {
        if self.can_prev() {
            self.target((self.current - 1).min(self.total_pages))
        } else {
            None
        }
    }

    pub fn next(&self) -> Option<usize> {
        if self.can_next() {
            self.target(self.current + 1)
        } else {
            None
        }
    }
}

/// Uncommitted search text. Typing never touches the list query; only
/// [`SearchDraft::commit`] (Enter or blur) does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchDraft {
    text: String,
}

impl SearchDraft {
    pub fn from_query(query: &CollectionQuery) -> Self {
        Self {
            text: query.keyword.clone().unwrap_or_default(),
        }
    }

    pub fn input(&mut self, text: &str) {
        self.text = text.to_string();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn commit(&self, query: &CollectionQuery) -> Option<CollectionQuery> {
        query.with_keyword(&self.text)
    }
}

/// Sequence numbers for list requests; only the latest response is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LatestRequest {
    seq: u64,
}

impl LatestRequest {
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.seq == seq
    }
}

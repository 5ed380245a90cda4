//! Per-view controller state.

use shopfront_core::{SortKey, StatusFilter, ViewMode};
use shopfront_views::Pagination;

/// The mutable record behind one list view.
///
/// Owned exclusively by its controller; UI event handlers and the
/// post-mutation refresh are the only writers. `items` always holds the
/// raw sequence of the most recent successful fetch for the current
/// `(page, search_text, category_id)`; `total` is the server's count and
/// is never derived from `items.len()`.
#[derive(Debug, Clone)]
pub struct ControllerState<E> {
    pub page: u32,
    pub page_size: u32,
    pub search_text: String,
    pub status_filter: StatusFilter,
    pub category_id: Option<i64>,
    pub sort_key: SortKey,
    pub total: u64,
    pub items: Vec<E>,
    pub view_mode: ViewMode,
}

impl<E> ControllerState<E> {
    pub fn new(page_size: u32, sort_key: SortKey, view_mode: ViewMode) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search_text: String::new(),
            status_filter: StatusFilter::All,
            category_id: None,
            sort_key,
            total: 0,
            items: Vec::new(),
            view_mode,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.page, self.page_size, self.total)
    }
}

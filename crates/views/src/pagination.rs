//! Pagination windowing and range summary.

use serde::Serialize;

/// How many pages to show on each side of the current one.
pub const PAGE_WINDOW: u32 = 2;

/// Pagination metadata carried next to a projected page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    /// Current page, 1-based.
    pub page: u32,
    pub page_size: u32,
    /// Authoritative record count across all pages.
    pub total: u64,
}

/// One element of the rendered page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageItem {
    Page { number: u32, current: bool },
    Ellipsis,
}

impl Pagination {
    pub fn new(page: u32, page_size: u32, total: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
            total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size as u64) as u32
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// The clickable page strip: page 1, the window around the current
    /// page, and the last page, with ellipses over any gaps.
    pub fn window(&self) -> Vec<PageItem> {
        let last = self.total_pages();
        let low = self.page.saturating_sub(PAGE_WINDOW).max(1);
        let high = self.page.saturating_add(PAGE_WINDOW).min(last);

        let mut items = Vec::new();
        if low > 1 {
            items.push(self.page_item(1));
            if low > 2 {
                items.push(PageItem::Ellipsis);
            }
        }
        for number in low..=high {
            items.push(self.page_item(number));
        }
        if high < last {
            if high + 1 < last {
                items.push(PageItem::Ellipsis);
            }
            items.push(self.page_item(last));
        }
        items
    }

    /// Displayed range, e.g. `"21 to 40 of 45"`. An empty result set
    /// reads `"0 to 0 of 0"`.
    pub fn summary(&self) -> String {
        let start = if self.total == 0 {
            0
        } else {
            (self.page as u64 - 1) * self.page_size as u64 + 1
        };
        let end = (self.page as u64 * self.page_size as u64).min(self.total);
        format!("{start} to {end} of {}", self.total)
    }

    fn page_item(&self, number: u32) -> PageItem {
        PageItem::Page {
            number,
            current: number == self.page,
        }
    }
}

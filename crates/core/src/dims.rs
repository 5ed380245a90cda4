//! List dimensions shared by controller state, projection, and rendering.

use serde::{Deserialize, Serialize};

use crate::listable::Listable;

/// Stock at or below this (and above zero) counts as low.
///
/// The activity axis distinguishes out-of-stock from low-stock; a row with
/// zero stock is not "low", it is gone.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Client-side status refinement of the current page.
///
/// The exact meaning of the activity flag is view-specific (product
/// activity, cart product availability, verified purchase for reviews).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    ActiveOnly,
    InactiveOnly,
    LowStock,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::ActiveOnly => "active_only",
            StatusFilter::InactiveOnly => "inactive_only",
            StatusFilter::LowStock => "low_stock",
        }
    }

    /// Predicate applied before sorting.
    pub fn matches(&self, item: &impl Listable) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::ActiveOnly => item.is_active(),
            StatusFilter::InactiveOnly => !item.is_active(),
            StatusFilter::LowStock => {
                item.stock() > 0 && item.stock() <= LOW_STOCK_THRESHOLD
            }
        }
    }
}

/// Sort axis for the projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Case-insensitive ascending on the display name.
    #[default]
    Name,
    /// Ascending on the minor-unit amount.
    Price,
    /// Descending on the creation timestamp; records without one sort last.
    Date,
    /// Ascending on the stock quantity.
    StockLevel,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Date => "date",
            SortKey::StockLevel => "stock_level",
        }
    }
}

/// The two interchangeable render targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Grid,
}

impl ViewMode {
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
        }
    }
}

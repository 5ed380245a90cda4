//! The trait every listed entity implements for projection.

use chrono::{DateTime, Utc};

/// Sortable and filterable fields of a listed entity.
///
/// Missing values fall back to the neutral element of their comparator:
/// empty string for names, zero for amounts and stock, the epoch for
/// timestamps (which makes undated records sort last under the descending
/// date comparator).
pub trait Listable {
    /// Display name used by the name comparator.
    fn sort_name(&self) -> &str;

    /// Amount in minor units used by the price comparator.
    fn price_cents(&self) -> i64;

    /// Creation timestamp used by the date comparator.
    fn created_at(&self) -> Option<DateTime<Utc>>;

    /// Quantity used by the stock-level comparator.
    fn stock(&self) -> i64;

    /// Activity flag used by the status filter. View-specific meaning.
    fn is_active(&self) -> bool;
}

//! `shopfront-core` — shared building blocks for the list controllers.
//!
//! This crate contains the pieces every layer agrees on: the client error
//! taxonomy, the minor-unit money value object, the list dimensions
//! (status filter, sort key, view mode), and the [`Listable`] trait that
//! exposes an entity's sortable and filterable fields.

pub mod dims;
pub mod error;
pub mod listable;
pub mod money;

pub use dims::{LOW_STOCK_THRESHOLD, SortKey, StatusFilter, ViewMode};
pub use error::{ClientError, ClientResult};
pub use listable::Listable;
pub use money::{DEFAULT_CURRENCY, Money};

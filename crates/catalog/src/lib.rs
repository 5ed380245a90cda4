//! `shopfront-catalog` — entity records and wire shapes.
//!
//! The records here are immutable snapshots of what the backend returned:
//! they are replaced wholesale on every fetch and never patched in place.

pub mod cart;
pub mod image;
pub mod payload;
pub mod product;
pub mod review;

pub use cart::{
    CartLine, CartProduct, CartTotals, FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS,
    TAX_RATE_PERCENT,
};
pub use image::resolve_image_url;
pub use payload::{ListPayload, MutationResponse};
pub use product::{CategoryRef, ProductImage, ProductRecord};
pub use review::{
    MAX_RATING, MIN_COMMENT_CHARS, MIN_RATING, ReviewRecord, ReviewStats, validate_review,
};

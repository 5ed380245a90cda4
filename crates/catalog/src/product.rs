//! Product records as listed by the catalog API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{DEFAULT_CURRENCY, Listable, Money};

/// One image attached to a product. At most one carries the cover flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub is_cover: bool,
}

/// Category reference embedded in a product record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: i64,
    pub name: String,
}

/// A product row as returned by the list endpoint.
///
/// Prices are minor units; conversion to a decimal happens at render time
/// only. Fields the backend may omit carry serde defaults so a sparse
/// payload still decodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "price_minor_units")]
    pub price_cents: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub stock: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Single image reference, used when the backend sends no gallery.
    #[serde(default, rename = "image_reference")]
    pub image: Option<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub categories: Vec<CategoryRef>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl ProductRecord {
    pub fn price(&self) -> Money {
        Money::new(self.price_cents, self.currency.clone())
    }

    /// Primary image: the cover image when flagged, else the first gallery
    /// image, else the bare image reference. Not yet URL-normalized.
    pub fn primary_image(&self) -> Option<&str> {
        self.images
            .iter()
            .find(|img| img.is_cover)
            .or_else(|| self.images.first())
            .map(|img| img.url.as_str())
            .or(self.image.as_deref())
    }
}

impl Listable for ProductRecord {
    fn sort_name(&self) -> &str {
        &self.name
    }

    fn price_cents(&self) -> i64 {
        self.price_cents
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn stock(&self) -> i64 {
        self.stock
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

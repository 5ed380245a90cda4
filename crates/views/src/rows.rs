//! Mapping from entity records to row view-models.

use shopfront_catalog::{CartLine, ProductRecord, ReviewRecord};
use shopfront_core::{LOW_STOCK_THRESHOLD, Money};

use crate::model::{Badge, Tone};

/// What a listed entity contributes to its row.
///
/// Implementations return raw values; URL normalization and affordance
/// wiring happen in [`crate::model::build_view_model`].
pub trait RowSource {
    /// Stable identifier rendered as the row's `data-id`.
    fn row_id(&self) -> String;

    fn title(&self) -> String;

    /// Monetary amount shown on the row, when the entity has one.
    fn price(&self) -> Option<Money>;

    fn badge(&self) -> Badge;

    /// Raw image reference, before URL normalization.
    fn raw_image(&self) -> Option<&str>;

    fn subtitle(&self) -> Option<String>;

    /// Navigation target of the view affordance.
    fn detail_href(&self) -> Option<String>;
}

impl RowSource for ProductRecord {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn price(&self) -> Option<Money> {
        Some(self.price())
    }

    fn badge(&self) -> Badge {
        if !self.active {
            Badge::new("inactive", Tone::Negative)
        } else if self.stock == 0 {
            Badge::new("out of stock", Tone::Negative)
        } else if self.stock <= LOW_STOCK_THRESHOLD {
            Badge::new("low stock", Tone::Warning)
        } else {
            Badge::new("active", Tone::Positive)
        }
    }

    fn raw_image(&self) -> Option<&str> {
        self.primary_image()
    }

    fn subtitle(&self) -> Option<String> {
        if self.categories.is_empty() {
            None
        } else {
            let names: Vec<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
            Some(names.join(", "))
        }
    }

    fn detail_href(&self) -> Option<String> {
        Some(format!("/producto/{}", self.slug))
    }
}

impl RowSource for CartLine {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn title(&self) -> String {
        self.product
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| format!("Product {}", self.product_id))
    }

    fn price(&self) -> Option<Money> {
        Some(self.unit_price())
    }

    fn badge(&self) -> Badge {
        match self.product.as_ref() {
            Some(p) if !p.active => Badge::new("unavailable", Tone::Negative),
            Some(p) if p.stock < self.quantity as i64 => {
                Badge::new("insufficient stock", Tone::Warning)
            }
            _ => Badge::new("in cart", Tone::Neutral),
        }
    }

    fn raw_image(&self) -> Option<&str> {
        self.product.as_ref().and_then(|p| p.image.as_deref())
    }

    fn subtitle(&self) -> Option<String> {
        let unit = self.unit_price();
        let line_total = Money::new(self.subtotal_cents(), unit.currency.clone());
        Some(format!("{} x {} = {}", self.quantity, unit, line_total))
    }

    fn detail_href(&self) -> Option<String> {
        self.product
            .as_ref()
            .filter(|p| !p.slug.is_empty())
            .map(|p| format!("/producto/{}", p.slug))
    }
}

impl RowSource for ReviewRecord {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn title(&self) -> String {
        if self.user_name.is_empty() {
            "Anonymous".to_string()
        } else {
            self.user_name.clone()
        }
    }

    fn price(&self) -> Option<Money> {
        None
    }

    fn badge(&self) -> Badge {
        if self.verified_purchase {
            Badge::new("verified purchase", Tone::Positive)
        } else {
            Badge::new("unverified", Tone::Neutral)
        }
    }

    fn raw_image(&self) -> Option<&str> {
        None
    }

    fn subtitle(&self) -> Option<String> {
        Some(format!("{} out of 5: {}", self.rating, self.comment))
    }

    fn detail_href(&self) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_catalog::CartProduct;

    #[test]
    fn product_badge_reflects_stock_bands() {
        let mut product: ProductRecord = serde_json::from_str(
            r#"{"id": 1, "name": "Ball", "slug": "ball", "active": true, "stock": 50}"#,
        )
        .unwrap();
        assert_eq!(RowSource::badge(&product).label, "active");

        product.stock = LOW_STOCK_THRESHOLD;
        assert_eq!(RowSource::badge(&product).label, "low stock");

        product.stock = 0;
        assert_eq!(RowSource::badge(&product).label, "out of stock");

        product.active = false;
        assert_eq!(RowSource::badge(&product).label, "inactive");
    }

    #[test]
    fn cart_line_flags_quantities_beyond_stock() {
        let line = CartLine {
            id: 9,
            product_id: 3,
            quantity: 4,
            unit_price_cents: 12_000,
            created_at: None,
            product: Some(CartProduct {
                id: 3,
                name: "Gloves".into(),
                slug: "gloves".into(),
                active: true,
                stock: 2,
                currency: "COP".into(),
                image: None,
            }),
        };
        assert_eq!(RowSource::badge(&line).label, "insufficient stock");
        assert_eq!(
            line.subtitle().as_deref(),
            Some("4 x 120.00 COP = 480.00 COP")
        );
    }
}

//! Cart lines and totals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use shopfront_core::{DEFAULT_CURRENCY, Listable, Money};

/// Tax applied on the subtotal, in percent.
pub const TAX_RATE_PERCENT: i64 = 10;

/// Subtotal (minor units) at which shipping becomes free.
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 100_000;

/// Flat shipping charge (minor units) below the free threshold.
pub const FLAT_SHIPPING_CENTS: i64 = 1_500;

/// Product summary embedded in a cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartProduct {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub stock: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub image: Option<String>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

/// One line of the cart.
///
/// `unit_price_cents` is the price frozen at the moment the product was
/// added; the embedded product summary carries the live price and stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: i64,
    pub product_id: i64,
    pub quantity: u32,
    pub unit_price_cents: i64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub product: Option<CartProduct>,
}

impl CartLine {
    pub fn subtotal_cents(&self) -> i64 {
        self.quantity as i64 * self.unit_price_cents
    }

    pub fn unit_price(&self) -> Money {
        let currency = self
            .product
            .as_ref()
            .map(|p| p.currency.clone())
            .unwrap_or_else(default_currency);
        Money::new(self.unit_price_cents, currency)
    }
}

impl Listable for CartLine {
    fn sort_name(&self) -> &str {
        self.product.as_ref().map(|p| p.name.as_str()).unwrap_or("")
    }

    fn price_cents(&self) -> i64 {
        self.unit_price_cents
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn stock(&self) -> i64 {
        self.product.as_ref().map(|p| p.stock).unwrap_or(0)
    }

    // A line whose product summary is missing stays visible under the
    // active filter; the cart still holds it.
    fn is_active(&self) -> bool {
        self.product.as_ref().map(|p| p.active).unwrap_or(true)
    }
}

/// Cart totals as reported by the backend, or recomputed locally for
/// optimistic display between mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal_cents: i64,
    pub tax_cents: i64,
    pub shipping_cents: i64,
    pub total_cents: i64,
    pub total_items: u32,
    pub free_shipping: bool,
}

impl CartTotals {
    /// Recompute totals from the lines currently held.
    ///
    /// An empty cart is all zeros; otherwise tax is
    /// [`TAX_RATE_PERCENT`] of the subtotal and shipping is flat below
    /// [`FREE_SHIPPING_THRESHOLD_CENTS`].
    pub fn compute(lines: &[CartLine]) -> Self {
        if lines.is_empty() {
            return Self::default();
        }

        let subtotal_cents: i64 = lines.iter().map(CartLine::subtotal_cents).sum();
        let total_items: u32 = lines.iter().map(|line| line.quantity).sum();
        let tax_cents = subtotal_cents * TAX_RATE_PERCENT / 100;
        let free_shipping = subtotal_cents >= FREE_SHIPPING_THRESHOLD_CENTS;
        let shipping_cents = if free_shipping { 0 } else { FLAT_SHIPPING_CENTS };

        Self {
            subtotal_cents,
            tax_cents,
            shipping_cents,
            total_cents: subtotal_cents + tax_cents + shipping_cents,
            total_items,
            free_shipping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: i64, quantity: u32, unit_price_cents: i64) -> CartLine {
        CartLine {
            id,
            product_id: id * 10,
            quantity,
            unit_price_cents,
            created_at: None,
            product: None,
        }
    }

    #[test]
    fn totals_apply_tax_and_flat_shipping() {
        let totals = CartTotals::compute(&[line(1, 2, 10_000), line(2, 1, 5_000)]);
        assert_eq!(totals.subtotal_cents, 25_000);
        assert_eq!(totals.tax_cents, 2_500);
        assert_eq!(totals.shipping_cents, FLAT_SHIPPING_CENTS);
        assert_eq!(totals.total_cents, 29_000);
        assert_eq!(totals.total_items, 3);
        assert!(!totals.free_shipping);
    }

    #[test]
    fn shipping_is_free_at_the_threshold() {
        let totals = CartTotals::compute(&[line(1, 1, FREE_SHIPPING_THRESHOLD_CENTS)]);
        assert!(totals.free_shipping);
        assert_eq!(totals.shipping_cents, 0);
        assert_eq!(
            totals.total_cents,
            FREE_SHIPPING_THRESHOLD_CENTS + totals.tax_cents
        );
    }

    #[test]
    fn empty_cart_is_all_zeros() {
        assert_eq!(CartTotals::compute(&[]), CartTotals::default());
    }
}

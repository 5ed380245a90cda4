//! Monetary amounts in integer minor units.
//!
//! Amounts are stored as minor units (cents) end to end and converted to a
//! decimal representation only at render time, so no floating point ever
//! touches a price.

use serde::{Deserialize, Serialize};

/// Currency used when the backend omits one.
pub const DEFAULT_CURRENCY: &str = "COP";

/// An amount of money in a single currency.
///
/// Compared by value; two amounts are equal when both the minor units and
/// the currency code match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in minor units (cents).
    pub cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
}

impl Money {
    pub fn new(cents: i64, currency: impl Into<String>) -> Self {
        Self {
            cents,
            currency: currency.into(),
        }
    }

    /// Decimal rendering with two fractional digits and the currency code,
    /// e.g. `"1234.50 COP"`.
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        format!("{sign}{}.{:02} {}", abs / 100, abs % 100, self.currency)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display())
    }
}

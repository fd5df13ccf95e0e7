//! Numeric types for prices, quantities, and fixed-point outcome fields
//!
//! Prices and quantities are `rust_decimal` newtypes whose constructors
//! enforce strict positivity, so the book invariant `quantity > 0 &&
//! limit_price > 0` holds by construction. Outcome fields that cross the
//! presentation boundary are encoded as 10^18-scaled integers to avoid
//! floating-point rounding loss.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scale factor for fixed-point outcome encoding (10^18).
pub const WAD_SCALE: i128 = 1_000_000_000_000_000_000;

/// A strictly positive limit price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal value.
    ///
    /// # Panics
    /// Panics if the value is not strictly positive.
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "Price must be strictly positive");
        Self(value)
    }

    /// Try to create a price, returning None unless strictly positive.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Convenience constructor for whole-number prices.
    pub fn from_u64(value: u64) -> Self {
        Self::new(Decimal::from(value))
    }

    /// Parse from a decimal string; None if unparsable or non-positive.
    pub fn from_str(s: &str) -> Option<Self> {
        Decimal::from_str_exact(s).ok().and_then(Self::try_new)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A strictly positive order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Create a quantity from a decimal value.
    ///
    /// # Panics
    /// Panics if the value is not strictly positive.
    pub fn new(value: Decimal) -> Self {
        assert!(value > Decimal::ZERO, "Quantity must be strictly positive");
        Self(value)
    }

    /// Try to create a quantity, returning None unless strictly positive.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Parse from a decimal string; None if unparsable or non-positive.
    pub fn from_str(s: &str) -> Option<Self> {
        Decimal::from_str_exact(s).ok().and_then(Self::try_new)
    }

    /// Get the inner decimal value
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-point integer scaled by 10^18.
///
/// Used for `execution_price` and `filled_amount` in outcomes; the scaled
/// representation survives JSON round-trips without decimal drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wad(i128);

impl Wad {
    /// Encode a decimal as a 10^18-scaled integer.
    ///
    /// Values outside i128 range saturate to zero; reference prices and
    /// demo quantities never come near that bound.
    pub fn from_decimal(value: Decimal) -> Self {
        let scale_factor = Decimal::from_i128_with_scale(WAD_SCALE, 0);
        let scaled = value * scale_factor;
        Self(scaled.to_i128().unwrap_or(0))
    }

    /// Decode back to a decimal value.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::from_i128_with_scale(self.0, 18).normalize()
    }

    /// Get the raw scaled integer
    pub fn as_i128(&self) -> i128 {
        self.0
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_positive_only() {
        assert!(Price::try_new(Decimal::from(2000)).is_some());
        assert!(Price::try_new(Decimal::ZERO).is_none());
        assert!(Price::try_new(Decimal::from(-5)).is_none());
    }

    #[test]
    #[should_panic(expected = "Price must be strictly positive")]
    fn test_price_new_rejects_zero() {
        Price::new(Decimal::ZERO);
    }

    #[test]
    fn test_price_from_str() {
        let price = Price::from_str("2000.50").unwrap();
        assert_eq!(price.as_decimal(), Decimal::from_str_exact("2000.50").unwrap());

        assert!(Price::from_str("not-a-number").is_none());
        assert!(Price::from_str("-3").is_none());
        assert!(Price::from_str("0").is_none());
    }

    #[test]
    fn test_quantity_ordering() {
        let small = Quantity::from_str("0.5").unwrap();
        let large = Quantity::from_str("1.0").unwrap();
        assert!(small < large);
        assert_eq!(small.min(large), small);
    }

    #[test]
    fn test_wad_scaling() {
        let one = Wad::from_decimal(Decimal::ONE);
        assert_eq!(one.as_i128(), WAD_SCALE);

        let half = Wad::from_decimal(Decimal::from_str_exact("0.5").unwrap());
        assert_eq!(half.as_i128(), WAD_SCALE / 2);
    }

    #[test]
    fn test_wad_decode() {
        let price = Decimal::from(2000);
        let wad = Wad::from_decimal(price);
        assert_eq!(wad.to_decimal(), price);
    }

    #[test]
    fn test_wad_serialization() {
        let wad = Wad::from_decimal(Decimal::from(3));
        let json = serde_json::to_string(&wad).unwrap();
        assert_eq!(json, "3000000000000000000");

        let deserialized: Wad = serde_json::from_str(&json).unwrap();
        assert_eq!(wad, deserialized);
    }
}

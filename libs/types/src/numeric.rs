//! Tick-denominated numeric types for prices and quantities
//!
//! The book is unit-agnostic: a price is a signed 32-bit count of ticks
//! and a quantity a signed 32-bit count of lots. Integer ticks make
//! arithmetic exact and give `Ord` for free, so price levels can key a
//! `BTreeMap` directly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Price in ticks.
///
/// Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(i32);

impl Price {
    /// Sentinel carried by a market order before admission rewrites it
    /// into a marketable limit. Never present on a resting order.
    pub const INVALID: Price = Price(i32::MIN);

    /// Create a price from a tick count.
    pub const fn new(ticks: i32) -> Self {
        Self(ticks)
    }

    /// The raw tick count.
    pub const fn ticks(&self) -> i32 {
        self.0
    }

    /// False only for the un-priced market-order sentinel.
    pub const fn is_valid(&self) -> bool {
        self.0 != i32::MIN
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Price {
    fn from(ticks: i32) -> Self {
        Self(ticks)
    }
}

/// Quantity in lots.
///
/// Strictly positive at admission; fills only ever decrease it.
/// Serialized as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    /// Create a quantity from a lot count.
    pub const fn new(lots: i32) -> Self {
        Self(lots)
    }

    /// The zero quantity.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// The raw lot count.
    pub const fn lots(&self) -> i32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Admission requires a strictly positive quantity.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        assert!(self.0 >= rhs.0, "quantity subtraction would go negative");
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Quantity {
    fn sub_assign(&mut self, rhs: Self) {
        assert!(self.0 >= rhs.0, "quantity subtraction would go negative");
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for Quantity {
    fn from(lots: i32) -> Self {
        Self(lots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_ordering() {
        assert!(Price::new(100) < Price::new(101));
        assert!(Price::new(-5) < Price::new(0));
    }

    #[test]
    fn test_price_invalid_sentinel() {
        assert!(!Price::INVALID.is_valid());
        assert!(Price::new(0).is_valid());
        assert!(Price::new(-100).is_valid());
    }

    #[test]
    fn test_price_serialization() {
        let price = Price::new(100);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "100");

        let deserialized: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(price, deserialized);
    }

    #[test]
    fn test_quantity_arithmetic() {
        let q1 = Quantity::new(10);
        let q2 = Quantity::new(4);

        assert_eq!(q1 + q2, Quantity::new(14));
        assert_eq!(q1 - q2, Quantity::new(6));
        assert_eq!(q1.min(q2), q2);
    }

    #[test]
    fn test_quantity_positivity() {
        assert!(Quantity::new(1).is_positive());
        assert!(!Quantity::zero().is_positive());
        assert!(!Quantity::new(-3).is_positive());
        assert!(Quantity::zero().is_zero());
    }

    #[test]
    #[should_panic(expected = "quantity subtraction would go negative")]
    fn test_quantity_underflow_panics() {
        let _ = Quantity::new(1) - Quantity::new(2);
    }

    #[test]
    fn test_quantity_serialization() {
        let qty = Quantity::new(25);
        let json = serde_json::to_string(&qty).unwrap();
        assert_eq!(json, "25");

        let deserialized: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(qty, deserialized);
    }
}

//! # Money Module
//!
//! Provides the `Money` type for prices and totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price in the stock data is an integer in the smallest unit.     │
//! │                                                                         │
//! │    UnitPrice: 10          "2 for 15"                                    │
//! │        │                       │                                        │
//! │        ▼                       ▼                                        │
//! │    Money(10) × count     Money(15) × (count / 2)                        │
//! │        │                       │                                        │
//! │        └──────────┬────────────┘                                        │
//! │                   ▼                                                     │
//! │              Money total  ──► i64 returned from get_total()             │
//! │                                                                         │
//! │  No rounding, no fractions, no floats anywhere on the path.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use checkout_core::money::Money;
//!
//! let unit = Money::new(10);
//! let line = unit * 3;
//! assert_eq!((line + Money::new(15)).amount(), 45);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest price unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: stock data may carry negative prices, which scan
///   validation must be able to see and reject
/// - **Transparent serde**: stock records store plain integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from an amount in the smallest unit.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Zero money.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is below zero.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a unit count.
    ///
    /// Saturates instead of wrapping so an absurd basket can never turn a
    /// total negative.
    #[inline]
    pub fn times(&self, count: u64) -> Money {
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        Money(self.0.saturating_mul(count))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the bare amount. Currency formatting is left to presentation.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<i64> for Money {
    fn from(amount: i64) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Money::new(10);
        let b = Money::new(15);

        assert_eq!((a + b).amount(), 25);
        assert_eq!((a * 3).amount(), 30);
        assert_eq!(a.times(4).amount(), 40);

        let mut running = Money::zero();
        running += b;
        running += b;
        assert_eq!(running.amount(), 30);
    }

    #[test]
    fn test_sum() {
        let total: Money = [10, 12, 15].into_iter().map(Money::new).sum();
        assert_eq!(total.amount(), 37);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::new(-1).is_negative());
        assert!(!Money::zero().is_negative());
        assert!(!Money::new(1).is_negative());
    }

    #[test]
    fn test_display_is_bare_amount() {
        assert_eq!(Money::new(130).to_string(), "130");
        assert_eq!(Money::new(-5).to_string(), "-5");
    }

    #[test]
    fn test_serde_transparent() {
        let money: Money = serde_json::from_str("42").unwrap();
        assert_eq!(money, Money::new(42));
        assert_eq!(serde_json::to_string(&money).unwrap(), "42");
    }

    #[test]
    fn test_multiplication_saturates() {
        assert_eq!(Money::new(i64::MAX).times(2).amount(), i64::MAX);
    }
}

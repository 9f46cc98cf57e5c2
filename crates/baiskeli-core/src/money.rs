//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Shillings                                        │
//! │    Kenyan shillings are displayed with zero fractional digits in the   │
//! │    storefront, so one i64 unit = one shilling. No minor unit, no       │
//! │    rounding, no drift.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use baiskeli_core::money::Money;
//!
//! // Create from whole shillings (the only way)
//! let price = Money::new(2_500); // KSh 2,500
//!
//! // Arithmetic operations
//! let pair = price * 2;                      // KSh 5,000
//! let total = pair + Money::new(300);        // KSh 5,300
//!
//! // NEVER do this:
//! // let bad = Money::from_float(2500.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole Kenyan shillings.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction must not underflow mid-expression
///   (e.g. `threshold - subtotal` while computing the free-shipping nudge)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: serializes as a bare integer so the frontend
///   receives `45000`, not `{"0": 45000}`
///
/// ## Where Money Flows
/// ```text
/// LineItem.unit_price ──► line_total ──► subtotal ──► shipping_fee ──► total
///                                                          │
///                                       Displayed as "KSh 45,000" in the UI
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole shillings.
    ///
    /// ## Example
    /// ```rust
    /// use baiskeli_core::money::Money;
    ///
    /// let price = Money::new(1_800); // KSh 1,800
    /// assert_eq!(price.units(), 1_800);
    /// ```
    #[inline]
    pub const fn new(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole shillings.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use baiskeli_core::money::Money;
    ///
    /// let unit_price = Money::new(2_500); // tube, KSh 2,500
    /// let line_total = unit_price.multiply_quantity(2);
    /// assert_eq!(line_total.units(), 5_000);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Inner Tube 700c  KSh 2,500
    /// Quantity: 2
    ///      │
    ///      ▼
    /// multiply_quantity(2) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: KSh 5,000
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Saturating subtraction that never goes below zero.
    ///
    /// Used for "add KSh X more for free shipping" where a subtotal past
    /// the threshold must read as zero remaining, not a negative amount.
    #[inline]
    pub const fn saturating_sub(&self, other: Self) -> Self {
        let diff = self.0 - other.0;
        if diff < 0 {
            Money(0)
        } else {
            Money(diff)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. UI display goes through the
/// `MoneyFormatter` in baiskeli-drawer, which adds thousands grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KSh {}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money (for subtotal derivation).
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
    fn test_new_and_units() {
        let money = Money::new(1_800);
        assert_eq!(money.units(), 1_800);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(1800)), "KSh 1800");
        assert_eq!(format!("{}", Money::new(0)), "KSh 0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(1_000);
        let b = Money::new(500);

        assert_eq!((a + b).units(), 1_500);
        assert_eq!((a - b).units(), 500);
        let result: Money = a * 3;
        assert_eq!(result.units(), 3_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::new(2_500);
        let line_total = unit_price.multiply_quantity(2);
        assert_eq!(line_total.units(), 5_000);
    }

    #[test]
    fn test_saturating_sub() {
        let threshold = Money::new(5_000);
        let below = Money::new(1_800);
        let above = Money::new(50_000);

        assert_eq!(threshold.saturating_sub(below).units(), 3_200);
        assert_eq!(threshold.saturating_sub(above).units(), 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [Money::new(45_000), Money::new(5_000)].into_iter().sum();
        assert_eq!(total.units(), 50_000);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::new(100);
        assert!(positive.is_positive());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::new(45_000)).unwrap();
        assert_eq!(json, "45000");

        let back: Money = serde_json::from_str("45000").unwrap();
        assert_eq!(back, Money::new(45_000));
    }
}

//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    2 × 9.99 + 3 × 4.50 drifts away from 33.48 by a few ulps             │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    9.99 is stored as 999 × 10^-2, exactly                               │
//! │    2 × 9.99 + 3 × 4.50 = 33.48, exactly                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use stockcart_core::money::Money;
//!
//! // Create from cents or from a decimal string
//! let price = Money::from_cents(1099);        // $10.99
//! let other: Money = "5.00".parse().unwrap(); // $5.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                    // $21.98
//! let total = price + other;                  // $15.99
//! assert_eq!(total, Money::from_cents(1599));
//! # let _ = doubled;
//!
//! // NEVER do this:
//! // let bad = Money::from_float(10.99); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use std::str::FromStr;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in the store's currency, held as an exact decimal.
///
/// Equality is numeric: `9.9` and `9.90` are the same amount.
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► price × quantity ──► Σ lines ──► get_total_price()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn new(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use stockcart_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the underlying decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use stockcart_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // $2.99
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total, Money::from_cents(897)); // $8.97
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Like [`multiply_quantity`](Self::multiply_quantity), but `None` if the
    /// product does not fit in a decimal.
    #[inline]
    pub fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        self.0.checked_mul(Decimal::from(qty)).map(Money)
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Money)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `$10.99` / `-$5.50`, rounded to cents for display only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}${:.2}", sign, self.0.abs())
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Decimal::from_str(s.trim()).map(Money)
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
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

    fn money(s: &str) -> Money {
        s.parse().unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.amount(), Decimal::new(1099, 2));
        assert_eq!(money, "10.99".parse::<Money>().unwrap());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("ten dollars".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(a * 3, Money::from_cents(3000));

        let mut c = a;
        c += b;
        c -= Money::from_cents(1);
        assert_eq!(c, Money::from_cents(1499));
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = money("4.50");
        assert_eq!(price.checked_mul_quantity(3), Some(money("13.50")));
        assert_eq!(price.checked_add(money("0.50")), Some(money("5.00")));

        let huge = money("10000000000.00");
        assert_eq!(huge.checked_mul_quantity(i64::MAX), None);

        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::from_cents(100)), None);
    }

    #[test]
    fn test_numeric_equality_ignores_scale() {
        assert_eq!(money("4.5"), money("4.50"));
        assert_eq!(money("33.480"), money("33.48"));
    }

    /// 0.1 + 0.2 must be exactly 0.3, unlike f64.
    #[test]
    fn test_no_binary_float_drift() {
        assert_eq!(money("0.1") + money("0.2"), money("0.3"));

        let total = money("9.99").multiply_quantity(2) + money("4.50").multiply_quantity(3);
        assert_eq!(total, money("33.48"));
    }

    #[test]
    fn test_sub_cent_prices_are_kept() {
        let per_gram = money("0.125");
        assert_eq!(per_gram.multiply_quantity(3), money("0.375"));
        assert_eq!(per_gram.multiply_quantity(8), money("1"));
    }

    #[test]
    fn test_sum() {
        let total: Money = [money("1.10"), money("2.20"), money("3.30")]
            .into_iter()
            .sum();
        assert_eq!(total, money("6.60"));

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_cents(100);
        assert!(positive.is_positive());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs(), positive);
    }

    #[test]
    fn test_serializes_as_decimal_string() {
        let json = serde_json::to_string(&Money::from_cents(999)).unwrap();
        assert_eq!(json, "\"9.99\"");

        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Money::from_cents(999));
    }
}

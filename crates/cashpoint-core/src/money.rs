//! # Money Module
//!
//! Provides the `Money` type used for every amount and face value in the
//! dispenser.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GREEDY DISPENSING NEEDS EXACT DIVISION                                 │
//! │                                                                         │
//! │  remainder / value      → how many notes of this face value fit        │
//! │  remainder % smallest   → is the request reachable at all              │
//! │                                                                         │
//! │  Both only make sense on integers. A float remainder of 0.0000001      │
//! │  would turn a perfect plan into "Not enough banknotes".                 │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (kopecks, cents, ...)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cashpoint_core::money::Money;
//!
//! let requested = Money::from_minor(5400);
//! let note = Money::from_minor(200);
//!
//! assert_eq!(requested.notes_of(note), 27);
//! assert_eq!(note.times(2), Money::from_minor(400));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: Callers may hand us negative requests; validation
///   rejects them instead of the type silently wrapping.
/// - **Transparent serde**: Serializes as a bare integer, so a plan renders as
///   `{"value": 5000, "count": 40}`.
/// - **Saturating products**: `value × count` is computed in `i128` and
///   clamped, so a pathological inventory cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    ///
    /// ## Example
    /// ```rust
    /// use cashpoint_core::money::Money;
    ///
    /// let note = Money::from_minor(5000);
    /// assert_eq!(note.minor(), 5000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Multiplies a face value by a banknote count.
    ///
    /// ## Example
    /// ```rust
    /// use cashpoint_core::money::Money;
    ///
    /// let note = Money::from_minor(200);
    /// assert_eq!(note.times(38).minor(), 7600);
    /// ```
    pub fn times(&self, count: u32) -> Money {
        let product = i128::from(self.0) * i128::from(count);
        Money(saturate(product))
    }

    /// How many whole notes of `note` fit into this amount.
    ///
    /// Returns 0 when `note` is not positive, so callers never divide by zero.
    ///
    /// ## Example
    /// ```rust
    /// use cashpoint_core::money::Money;
    ///
    /// let remainder = Money::from_minor(251_600);
    /// assert_eq!(remainder.notes_of(Money::from_minor(5000)), 50);
    /// assert_eq!(remainder.notes_of(Money::zero()), 0);
    /// ```
    pub fn notes_of(&self, note: Money) -> i64 {
        if note.0 <= 0 {
            return 0;
        }
        self.0 / note.0
    }

    /// Remainder left after removing whole multiples of `step`.
    ///
    /// Truncating remainder: the sign follows `self`, so
    /// `self - self.remainder_of(step)` always rounds toward zero.
    pub fn remainder_of(&self, step: Money) -> Money {
        if step.0 == 0 {
            return *self;
        }
        Money(self.0 % step.0)
    }

    /// Checks whether this amount is an exact multiple of `step`.
    #[inline]
    pub fn is_multiple_of(&self, step: Money) -> bool {
        step.0 != 0 && self.0 % step.0 == 0
    }

    /// Formats the amount in major units for display.
    ///
    /// `minor_units` is the number of decimal places of the currency
    /// (2 for USD/EUR/RUB, 0 for JPY).
    ///
    /// ## Example
    /// ```rust
    /// use cashpoint_core::money::Money;
    ///
    /// assert_eq!(Money::from_minor(5400).format("₽", 2), "₽54.00");
    /// assert_eq!(Money::from_minor(5400).format("¥", 0), "¥5400");
    /// ```
    pub fn format(&self, symbol: &str, minor_units: u8) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        if minor_units == 0 {
            return format!("{}{}{}", sign, symbol, abs);
        }
        let scale = 10u64.saturating_pow(u32::from(minor_units));
        format!(
            "{}{}{}.{:0width$}",
            sign,
            symbol,
            abs / scale,
            abs % scale,
            width = usize::from(minor_units)
        )
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw minor-unit integer, matching the JSON form.
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
    fn from(minor: i64) -> Self {
        Money(minor)
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
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
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
    fn test_from_minor() {
        let money = Money::from_minor(5000);
        assert_eq!(money.minor(), 5000);
        assert_eq!(Money::from(5000), money);
    }

    #[test]
    fn test_display_is_raw_minor_units() {
        assert_eq!(Money::from_minor(251_600).to_string(), "251600");
        assert_eq!(Money::from_minor(-100).to_string(), "-100");
    }

    #[test]
    fn test_format() {
        assert_eq!(Money::from_minor(1099).format("$", 2), "$10.99");
        assert_eq!(Money::from_minor(500).format("$", 2), "$5.00");
        assert_eq!(Money::from_minor(-550).format("$", 2), "-$5.50");
        assert_eq!(Money::from_minor(7).format("", 3), "0.007");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor(), 1500);
        assert_eq!((a - b).minor(), 500);
        assert_eq!(a.times(3).minor(), 3000);

        let mut c = a;
        c -= b;
        c += Money::from_minor(1);
        assert_eq!(c.minor(), 501);
    }

    #[test]
    fn test_times_saturates() {
        let huge = Money::from_minor(i64::MAX / 2);
        assert_eq!(huge.times(u32::MAX).minor(), i64::MAX);
    }

    #[test]
    fn test_notes_of() {
        let remainder = Money::from_minor(5400);
        assert_eq!(remainder.notes_of(Money::from_minor(5000)), 1);
        assert_eq!(remainder.notes_of(Money::from_minor(200)), 27);
        assert_eq!(remainder.notes_of(Money::from_minor(10_000)), 0);
        assert_eq!(remainder.notes_of(Money::from_minor(-100)), 0);
    }

    #[test]
    fn test_remainder_and_multiples() {
        let amount = Money::from_minor(5050);
        let step = Money::from_minor(100);

        assert_eq!(amount.remainder_of(step).minor(), 50);
        assert!(!amount.is_multiple_of(step));
        assert!(Money::from_minor(5000).is_multiple_of(step));
        assert!(!Money::from_minor(5000).is_multiple_of(Money::zero()));
        assert_eq!(amount.remainder_of(Money::zero()), amount);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 5000]
            .into_iter()
            .map(Money::from_minor)
            .sum();
        assert_eq!(total.minor(), 5300);
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Money::from_minor(5000)).unwrap();
        assert_eq!(json, "5000");
        let parsed: Money = serde_json::from_str("200").unwrap();
        assert_eq!(parsed.minor(), 200);
    }
}

//! # Inventory Query
//!
//! Read-only questions about an inventory snapshot.
//!
//! ## Usable Count
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  value 200   count 40   reserve 2                                       │
//! │                                                                         │
//! │  ██████████████████████████████████████████████████████████████  ░░░░   │
//! │  ◄──────────────────── usable: 38 ──────────────────────────►  reserve │
//! │                                                                         │
//! │  count ≤ reserve  →  usable 0, the denomination is skipped entirely     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is also available as a method on
//! [`Denomination`] or [`Inventory`].

use crate::money::Money;
use crate::types::{Denomination, Inventory};

// =============================================================================
// Per-Record Queries
// =============================================================================

impl Denomination {
    /// Notes that may actually be dispensed: `count - reserve`, floored at 0.
    ///
    /// ## Example
    /// ```rust
    /// use cashpoint_core::Denomination;
    ///
    /// assert_eq!(Denomination::new(200, 40).with_reserve(2).usable_count(), 38);
    /// assert_eq!(Denomination::new(200, 2).with_reserve(2).usable_count(), 0);
    /// ```
    #[inline]
    pub fn usable_count(&self) -> u32 {
        self.count.saturating_sub(self.reserve)
    }

    /// True when at least one note may be dispensed.
    #[inline]
    pub fn is_usable(&self) -> bool {
        self.usable_count() > 0
    }

    /// Value of the dispensable stock of this record.
    #[inline]
    pub fn usable_value(&self) -> Money {
        self.value.times(self.usable_count())
    }
}

// =============================================================================
// Whole-Inventory Queries
// =============================================================================

impl Inventory {
    /// The usable record with the smallest face value.
    ///
    /// This is the finest granularity the machine can currently produce.
    pub fn smallest_usable(&self) -> Option<&Denomination> {
        self.iter()
            .filter(|d| d.is_usable())
            .min_by_key(|d| d.value)
    }

    /// Face value of [`Inventory::smallest_usable`], or zero when nothing is
    /// usable.
    pub fn smallest_usable_value(&self) -> Money {
        self.smallest_usable()
            .map(|d| d.value)
            .unwrap_or_default()
    }

    /// Theoretical ceiling of any single dispensation.
    ///
    /// ## Example
    /// ```rust
    /// use cashpoint_core::{Denomination, Inventory};
    ///
    /// let inventory = Inventory::new(vec![
    ///     Denomination::new(5000, 1),
    ///     Denomination::new(200, 2).with_reserve(2),
    ///     Denomination::new(100, 1),
    /// ]);
    /// assert_eq!(inventory.max_dispensable().minor(), 5100);
    /// ```
    pub fn max_dispensable(&self) -> Money {
        self.iter().map(Denomination::usable_value).sum()
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// See [`Denomination::usable_count`].
pub fn usable_count(record: &Denomination) -> u32 {
    record.usable_count()
}

/// See [`Denomination::is_usable`].
pub fn is_usable(record: &Denomination) -> bool {
    record.is_usable()
}

/// See [`Inventory::smallest_usable`].
pub fn smallest_usable_denomination(inventory: &Inventory) -> Option<&Denomination> {
    inventory.smallest_usable()
}

/// See [`Inventory::smallest_usable_value`].
pub fn smallest_usable_value(inventory: &Inventory) -> Money {
    inventory.smallest_usable_value()
}

/// See [`Inventory::max_dispensable`].
pub fn max_dispensable(inventory: &Inventory) -> Money {
    inventory.max_dispensable()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_machine() -> Inventory {
        Inventory::new(vec![
            Denomination::new(5000, 40),
            Denomination::new(1000, 40),
            Denomination::new(200, 40).with_reserve(2),
            Denomination::new(100, 40),
        ])
    }

    #[test]
    fn test_usable_count() {
        assert_eq!(usable_count(&Denomination::new(100, 40)), 40);
        assert_eq!(usable_count(&Denomination::new(200, 40).with_reserve(2)), 38);
        assert_eq!(usable_count(&Denomination::new(200, 2).with_reserve(2)), 0);
        assert_eq!(usable_count(&Denomination::new(200, 1).with_reserve(2)), 0);
        assert_eq!(usable_count(&Denomination::new(200, 0)), 0);
    }

    #[test]
    fn test_is_usable() {
        assert!(is_usable(&Denomination::new(100, 1)));
        assert!(is_usable(&Denomination::new(200, 3).with_reserve(2)));
        assert!(!is_usable(&Denomination::new(200, 2).with_reserve(2)));
        assert!(!is_usable(&Denomination::new(5000, 0)));
    }

    #[test]
    fn test_smallest_usable_skips_reserved() {
        let inventory = Inventory::new(vec![
            Denomination::new(1000, 1),
            Denomination::new(100, 0),
            Denomination::new(200, 2).with_reserve(2),
            Denomination::new(5000, 1),
        ]);

        let smallest = smallest_usable_denomination(&inventory).unwrap();
        assert_eq!(smallest.value.minor(), 1000);
        assert_eq!(smallest_usable_value(&inventory).minor(), 1000);
    }

    #[test]
    fn test_smallest_usable_none() {
        let empty = Inventory::default();
        assert!(smallest_usable_denomination(&empty).is_none());
        assert!(smallest_usable_value(&empty).is_zero());

        let drained = Inventory::new(vec![
            Denomination::new(5000, 0),
            Denomination::new(200, 2).with_reserve(2),
        ]);
        assert!(smallest_usable_value(&drained).is_zero());
    }

    #[test]
    fn test_smallest_usable_does_not_reorder_inventory() {
        let inventory = demo_machine();
        assert_eq!(smallest_usable_value(&inventory).minor(), 100);
        assert_eq!(inventory.denominations()[0].value.minor(), 5000);
    }

    #[test]
    fn test_max_dispensable() {
        // 5000*40 + 1000*40 + 200*38 + 100*40
        assert_eq!(max_dispensable(&demo_machine()).minor(), 251_600);
        assert!(max_dispensable(&Inventory::default()).is_zero());
    }
}

//! # Validation Module
//!
//! Amount validation and input checks for Cashpoint.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Amount guidance (interactive callers)                        │
//! │  ├── is_satisfiable: multiple of the smallest usable note?             │
//! │  └── nearest_bounds: which amounts to offer instead                    │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Input checks (allocator entry)                               │
//! │  ├── validate_amount: no negative requests                             │
//! │  └── validate_inventory: positive, unique face values                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Allocator exact-cover check                                  │
//! │  └── plan total must equal the request                                 │
//! │                                                                         │
//! │  Layer 1 is necessary, not sufficient: 5400 is a multiple of 100 but   │
//! │  still fails when the 200s are all held in reserve.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cashpoint_core::{Denomination, Inventory, Money};
//! use cashpoint_core::validation::{is_satisfiable, nearest_bounds};
//!
//! let inventory = Inventory::new(vec![
//!     Denomination::new(5000, 40),
//!     Denomination::new(100, 40),
//! ]);
//!
//! assert!(!is_satisfiable(Money::from_minor(5050), &inventory));
//! let bounds = nearest_bounds(Money::from_minor(5050), &inventory);
//! assert_eq!(bounds.floor.minor(), 5000);
//! assert_eq!(bounds.ceil.minor(), 5100);
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::{AmountBounds, Denomination, Inventory};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Amount Guidance
// =============================================================================

/// Checks whether `amount` can be produced in principle.
///
/// ## Rules
/// - Amount must be positive
/// - Something must be usable
/// - Amount must be an exact multiple of the smallest usable face value
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  ATM: Enter Amount                                                      │
/// │                                                                         │
/// │  Customer types: 5050                                                   │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  is_satisfiable(5050) ← THIS FUNCTION                                  │
/// │       │                                                                 │
/// │       ├── false → nearest_bounds → "Choose available amounts: 5100 or  │
/// │       │                              5000"                              │
/// │       │                                                                 │
/// │       └── true  → allocate                                              │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn is_satisfiable(amount: Money, inventory: &Inventory) -> bool {
    let smallest = inventory.smallest_usable_value();
    amount.is_positive() && smallest.is_positive() && amount.is_multiple_of(smallest)
}

/// Nearest amounts at or below and above `amount` on the smallest usable
/// note's grid.
///
/// `floor` equals `amount` when it already lies on the grid. Both bounds are
/// zero when nothing is usable.
pub fn nearest_bounds(amount: Money, inventory: &Inventory) -> AmountBounds {
    let step = inventory.smallest_usable_value();
    if step.is_zero() {
        return AmountBounds::none();
    }

    let floor = amount - amount.remainder_of(step);
    AmountBounds {
        floor,
        ceil: floor + step,
    }
}

// =============================================================================
// Input Checks
// =============================================================================

/// Validates a requested amount.
///
/// ## Rules
/// - Must be non-negative
/// - Zero is allowed (dispenses nothing)
///
/// ## Example
/// ```rust
/// use cashpoint_core::Money;
/// use cashpoint_core::validation::validate_amount;
///
/// assert!(validate_amount(Money::from_minor(5000)).is_ok());
/// assert!(validate_amount(Money::zero()).is_ok());
/// assert!(validate_amount(Money::from_minor(-100)).is_err());
/// ```
pub fn validate_amount(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::Negative {
            field: "amount".to_string(),
            value: amount.minor(),
        });
    }

    Ok(())
}

/// Validates a single denomination record.
///
/// Counts are unsigned so only the face value needs checking.
pub fn validate_denomination(record: &Denomination) -> ValidationResult<()> {
    if !record.value.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "denomination value".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole inventory snapshot.
///
/// ## Rules
/// - Every record passes [`validate_denomination`]
/// - Face values are unique
pub fn validate_inventory(inventory: &Inventory) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(inventory.len());

    for record in inventory {
        validate_denomination(record)?;

        if !seen.insert(record.value) {
            return Err(ValidationError::Duplicate {
                field: "denomination value".to_string(),
                value: record.value.to_string(),
            });
        }
    }

    Ok(())
}

/// Parses a typed-in amount.
///
/// Surrounding whitespace is ignored and an empty string reads as zero, which
/// is never satisfiable. Anything else that is not a whole number is rejected.
pub fn parse_amount(input: &str) -> ValidationResult<Money> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(Money::zero());
    }

    input
        .parse::<i64>()
        .map(Money::from_minor)
        .map_err(|_| ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not a whole number of minor units", input),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

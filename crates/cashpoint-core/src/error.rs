//! # Error Types
//!
//! Domain-specific error types for cashpoint-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cashpoint-core errors (this file)                                     │
//! │  ├── DispenseError    - Allocation failures                            │
//! │  └── ValidationError  - Malformed amounts or inventory records         │
//! │                                                                         │
//! │  atm app errors (separate crate)                                       │
//! │  └── ConfigError      - Config file / environment failures             │
//! │                                                                         │
//! │  Flow: ValidationError → DispenseError → anyhow → terminal              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the amounts involved so the caller can render a useful message
//! 3. Errors are enum variants, never String
//! 4. The core never retries; every error is terminal for that call

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Dispense Error
// =============================================================================

/// Errors returned by the allocator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispenseError {
    /// The greedy pass could not cover the requested amount exactly.
    ///
    /// ## When This Occurs
    /// - The request exceeds everything the machine may hand out
    /// - Enough money is loaded, but the descending greedy walk leaves a
    ///   remainder no usable note can cover (e.g. 5400 when the 200s are all
    ///   held in reserve)
    ///
    /// ## Telling the Two Apart
    /// ```text
    /// requested > dispensable   → machine is short of cash
    /// requested ≤ dispensable   → wrong note mix, try a nearby amount
    /// ```
    #[error(
        "Not enough banknotes: requested {requested}, dispensable {dispensable}, short by {shortfall}"
    )]
    InsufficientFunds {
        requested: Money,
        dispensable: Money,
        shortfall: Money,
    },

    /// The amount or inventory failed validation before allocation.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),
}

impl DispenseError {
    /// True when the machine holds less usable money than was requested.
    pub fn exceeds_capacity(&self) -> bool {
        matches!(
            self,
            DispenseError::InsufficientFunds { requested, dispensable, .. } if requested > dispensable
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: String, value: i64 },

    /// Duplicate value (e.g. two records for the same face value).
    #[error("{field} '{value}' appears more than once")]
    Duplicate { field: String, value: String },

    /// Invalid format (e.g. non-numeric amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with DispenseError.
pub type DispenseResult<T> = Result<T, DispenseError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DispenseError::InsufficientFunds {
            requested: Money::from_minor(5400),
            dispensable: Money::from_minor(6100),
            shortfall: Money::from_minor(400),
        };
        assert_eq!(
            err.to_string(),
            "Not enough banknotes: requested 5400, dispensable 6100, short by 400"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "denomination value".to_string(),
        };
        assert_eq!(err.to_string(), "denomination value must be positive");

        let err = ValidationError::Duplicate {
            field: "denomination value".to_string(),
            value: "500".to_string(),
        };
        assert_eq!(err.to_string(), "denomination value '500' appears more than once");
    }

    #[test]
    fn test_validation_converts_to_dispense_error() {
        let validation_err = ValidationError::Negative {
            field: "amount".to_string(),
            value: -1,
        };
        let err: DispenseError = validation_err.into();
        assert!(matches!(err, DispenseError::InvalidInput(_)));
        assert!(!err.exceeds_capacity());
    }

    #[test]
    fn test_exceeds_capacity() {
        let short_of_cash = DispenseError::InsufficientFunds {
            requested: Money::from_minor(100_000),
            dispensable: Money::from_minor(6100),
            shortfall: Money::from_minor(93_900),
        };
        assert!(short_of_cash.exceeds_capacity());

        let wrong_mix = DispenseError::InsufficientFunds {
            requested: Money::from_minor(5400),
            dispensable: Money::from_minor(6100),
            shortfall: Money::from_minor(400),
        };
        assert!(!wrong_mix.exceeds_capacity());
    }
}

//! # Greedy Allocator
//!
//! Turns a requested amount into a [`DispensationPlan`].
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  requested 251600                                                       │
//! │                                                                         │
//! │  value   usable   needed   take   remainder                             │
//! │  ─────   ──────   ──────   ────   ─────────                             │
//! │  5000      40       50      40     51600                                │
//! │  1000      40       51      40     11600                                │
//! │   200      38       58      38      4000                                │
//! │   100      40       40      40         0                                │
//! │                                                                         │
//! │  plan total == requested  →  Ok(plan)                                   │
//! │  plan total != requested  →  Err(InsufficientFunds)                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Backtracking
//! This is a single descending greedy pass, not optimal coin change. With
//! 5000×1, 1000×1, 200×2 (reserve 2), 100×1 a request of 5400 fails: the
//! walk wants 200s that are all held in reserve. When a non-greedy mix would
//! cover an amount, it is not searched for.

use tracing::debug;

use crate::error::{DispenseError, DispenseResult};
use crate::money::Money;
use crate::types::{DispensationPlan, Inventory, PlanLine};
use crate::validation::{validate_amount, validate_inventory};

/// Computes the banknotes to hand out for `requested`.
///
/// The inventory is only read. Calling twice with the same snapshot yields
/// the same plan or the same error.
///
/// ## Errors
/// - [`DispenseError::InvalidInput`] for a negative amount, a non-positive
///   face value or duplicate face values
/// - [`DispenseError::InsufficientFunds`] when the greedy pass cannot cover
///   the amount exactly
///
/// ## Example
/// ```rust
/// use cashpoint_core::{allocate, Denomination, Inventory, Money};
///
/// let inventory = Inventory::new(vec![
///     Denomination::new(5000, 40),
///     Denomination::new(1000, 40),
///     Denomination::new(200, 40).with_reserve(2),
///     Denomination::new(100, 40),
/// ]);
///
/// let plan = allocate(Money::from_minor(5400), &inventory).unwrap();
/// assert_eq!(plan.to_string(), "5000 x 1, 200 x 2");
/// ```
pub fn allocate(requested: Money, inventory: &Inventory) -> DispenseResult<DispensationPlan> {
    validate_amount(requested)?;
    validate_inventory(inventory)?;

    let mut remainder = requested;
    let mut lines = Vec::new();

    for denomination in inventory.by_value_desc() {
        let usable = denomination.usable_count();
        if denomination.value > remainder || usable == 0 {
            continue;
        }

        let needed = remainder.notes_of(denomination.value);
        let count = u32::try_from(needed).map_or(usable, |needed| needed.min(usable));
        if count > 0 {
            lines.push(PlanLine::new(denomination.value, count));
            remainder -= denomination.value.times(count);
        }
    }

    let plan = DispensationPlan::from_lines(lines);
    let total = plan.total();

    if total != requested {
        debug!(
            requested = %requested,
            covered = %total,
            "Greedy pass left a remainder"
        );
        return Err(DispenseError::InsufficientFunds {
            requested,
            dispensable: inventory.max_dispensable(),
            shortfall: requested - total,
        });
    }

    debug!(
        requested = %requested,
        lines = plan.lines().len(),
        notes = plan.note_count(),
        "Allocated banknotes"
    );
    Ok(plan)
}

// =============================================================================
// Unit Tests
// =============================================================================

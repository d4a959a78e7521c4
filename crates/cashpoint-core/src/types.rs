//! # Domain Types
//!
//! Core domain types used throughout Cashpoint.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌───────────────────┐   ┌─────────────────┐     │
//! │  │  Denomination   │   │ DispensationPlan  │   │  AmountBounds   │     │
//! │  │  ─────────────  │   │  ───────────────  │   │  ─────────────  │     │
//! │  │  value (Money)  │   │  Vec<PlanLine>    │   │  floor (Money)  │     │
//! │  │  count          │   │  strictly desc.   │   │  ceil  (Money)  │     │
//! │  │  reserve        │   │  by value         │   └─────────────────┘     │
//! │  └────────┬────────┘   └───────────────────┘                           │
//! │           │ 1..n                                                        │
//! │  ┌────────▼────────┐                                                   │
//! │  │    Inventory    │   snapshot, never mutated by the core             │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Denomination
// =============================================================================

/// One banknote face value loaded in the machine.
///
/// `reserve` is the minimum stock that must never be dispensed. It is kept
/// separate from `count` so the usable count stays a single derived value.
/// Inventory files may also spell it `minCount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Denomination {
    /// Face value in minor units.
    pub value: Money,

    /// Total notes on hand.
    #[serde(default)]
    pub count: u32,

    /// Notes that must stay in the machine.
    #[serde(default, alias = "minCount")]
    pub reserve: u32,
}

impl Denomination {
    /// Creates a record with no reserve. `value` is in minor units.
    pub fn new(value: i64, count: u32) -> Self {
        Denomination {
            value: Money::from_minor(value),
            count,
            reserve: 0,
        }
    }

    /// Sets the reserve on a record.
    pub fn with_reserve(mut self, reserve: u32) -> Self {
        self.reserve = reserve;
        self
    }
}

// =============================================================================
// Inventory
// =============================================================================

/// An unordered snapshot of denominations, one record per face value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory(Vec<Denomination>);

impl Inventory {
    /// Wraps a list of records. Order is irrelevant.
    pub fn new(denominations: Vec<Denomination>) -> Self {
        Inventory(denominations)
    }

    /// The records, in the order the caller supplied them.
    #[inline]
    pub fn denominations(&self) -> &[Denomination] {
        &self.0
    }

    /// Iterates the records in caller order.
    pub fn iter(&self) -> std::slice::Iter<'_, Denomination> {
        self.0.iter()
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the machine has no denominations configured at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrowed view sorted by descending face value.
    ///
    /// The caller's order is left untouched.
    pub fn by_value_desc(&self) -> Vec<&Denomination> {
        let mut sorted: Vec<&Denomination> = self.0.iter().collect();
        sorted.sort_by(|a, b| b.value.cmp(&a.value));
        sorted
    }
}

impl From<Vec<Denomination>> for Inventory {
    fn from(denominations: Vec<Denomination>) -> Self {
        Inventory(denominations)
    }
}

impl FromIterator<Denomination> for Inventory {
    fn from_iter<I: IntoIterator<Item = Denomination>>(iter: I) -> Self {
        Inventory(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Denomination;
    type IntoIter = std::slice::Iter<'a, Denomination>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Dispensation Plan
// =============================================================================

/// A single line of a plan: hand out `count` notes of `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLine {
    pub value: Money,
    pub count: u32,
}

impl PlanLine {
    pub fn new(value: Money, count: u32) -> Self {
        PlanLine { value, count }
    }

    /// Value of this line (`value × count`).
    #[inline]
    pub fn total(&self) -> Money {
        self.value.times(self.count)
    }
}

/// The banknotes to hand out for a satisfied request.
///
/// ## Invariants
/// - Every line has `count > 0`
/// - Lines are in strictly descending `value` order
/// - `total()` equals the requested amount (the allocator rejects otherwise)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DispensationPlan(Vec<PlanLine>);

impl DispensationPlan {
    /// An empty plan (the answer for a zero request).
    pub fn empty() -> Self {
        DispensationPlan(Vec::new())
    }

    pub(crate) fn from_lines(lines: Vec<PlanLine>) -> Self {
        DispensationPlan(lines)
    }

    #[inline]
    pub fn lines(&self) -> &[PlanLine] {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of `value × count` over all lines.
    pub fn total(&self) -> Money {
        self.0.iter().map(PlanLine::total).sum()
    }

    /// Total number of physical banknotes in the plan.
    pub fn note_count(&self) -> u64 {
        self.0.iter().map(|line| u64::from(line.count)).sum()
    }

    pub fn into_lines(self) -> Vec<PlanLine> {
        self.0
    }
}

impl<'a> IntoIterator for &'a DispensationPlan {
    type Item = &'a PlanLine;
    type IntoIter = std::slice::Iter<'a, PlanLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One line per denomination, e.g. `5000 x 1, 200 x 2`.
impl fmt::Display for DispensationPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} x {}", line.value, line.count)?;
        }
        Ok(())
    }
}

// =============================================================================
// Amount Bounds
// =============================================================================

/// Nearest satisfiable amounts around a request, for UI guidance.
///
/// Both zero means nothing at all can be dispensed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountBounds {
    pub floor: Money,
    pub ceil: Money,
}

impl AmountBounds {
    /// Bounds for a machine that cannot dispense anything.
    pub const fn none() -> Self {
        AmountBounds {
            floor: Money::zero(),
            ceil: Money::zero(),
        }
    }

    /// True when neither bound is usable.
    pub fn is_none(&self) -> bool {
        self.floor.is_zero() && self.ceil.is_zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

//! # cashpoint-core: Pure Dispensing Logic for Cashpoint
//!
//! This crate decides which banknotes an ATM hands out. It contains the
//! dispensing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cashpoint Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    atm (terminal app)                           │   │
//! │  │    config.toml ──► prompt loop ──► print plan / error           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Inventory snapshot + amount            │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ cashpoint-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ inventory │  │validation │  │ allocator │  │  prompt   │  │   │
//! │  │   │  usable   │  │  grid /   │  │  greedy   │  │ request / │  │   │
//! │  │   │  counts   │  │  bounds   │  │   pass    │  │ response  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • SNAPSHOT IN, PLAN OUT             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Denomination, Inventory, DispensationPlan, AmountBounds
//! - [`money`] - Money type with integer arithmetic
//! - [`inventory`] - Usable counts and the smallest usable note
//! - [`validation`] - Satisfiability, nearest bounds, input checks
//! - [`allocator`] - The greedy allocation pass
//! - [`prompt`] - Interactive amount entry as a state machine
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same inventory and amount, same plan or same error
//! 2. **No I/O**: the inventory always arrives as an explicit parameter
//! 3. **Integer Money**: all values are minor units (i64)
//! 4. **Greedy, Not Optimal**: descending pass, no backtracking
//!
//! ## Example Usage
//!
//! ```rust
//! use cashpoint_core::{allocate, Denomination, Inventory, Money};
//!
//! let inventory = Inventory::new(vec![
//!     Denomination::new(5000, 40),
//!     Denomination::new(1000, 40),
//!     Denomination::new(200, 40).with_reserve(2),
//!     Denomination::new(100, 40),
//! ]);
//!
//! let plan = allocate(Money::from_minor(100_000), &inventory).unwrap();
//! assert_eq!(plan.to_string(), "5000 x 20");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod allocator;
pub mod error;
pub mod inventory;
pub mod money;
pub mod prompt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use allocator::allocate;
pub use error::{DispenseError, DispenseResult, ValidationError};
pub use money::Money;
pub use prompt::{AmountPrompt, PromptMessage, PromptOutcome};
pub use types::*;
pub use validation::{is_satisfiable, nearest_bounds};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of amount entries before an interactive session gives up.
///
/// ## Business Reason
/// Keeps an unattended terminal from looping forever on a stuck key.
pub const DEFAULT_MAX_PROMPT_ATTEMPTS: u32 = 5;

//! # Amount Prompt
//!
//! A request/response state machine for asking a customer how much to
//! withdraw. It does no I/O: the caller shows [`AmountPrompt::message`],
//! reads a line however it likes, and feeds it to [`AmountPrompt::submit`].
//!
//! ## Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   message() ──► "Enter the amount"                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   submit("5050") ──► Retry { floor: 5000, ceil: 5100 }                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   message() ──► "Choose available amounts: 5100 or 5000"                │
//! │   suggested() ──► Some(5100)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │   submit("5100") ──► Accepted(5100) ──► allocate(...)                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Acceptance only means the amount is on the smallest note's grid. The
//! allocator can still reject it.

use std::fmt;

use serde::Serialize;

use crate::money::Money;
use crate::types::{AmountBounds, Inventory};
use crate::validation::{is_satisfiable, nearest_bounds, parse_amount};

/// What to show the customer before the next input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amounts")]
pub enum PromptMessage {
    /// First attempt, or nothing nearby to suggest.
    EnterAmount,

    /// Nearby satisfiable amounts, larger first.
    ChooseFrom(Vec<Money>),
}

impl fmt::Display for PromptMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptMessage::EnterAmount => write!(f, "Enter the amount"),
            PromptMessage::ChooseFrom(amounts) => {
                write!(f, "Choose available amounts: ")?;
                for (i, amount) in amounts.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{}", amount)?;
                }
                Ok(())
            }
        }
    }
}

/// Result of one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The amount is on the grid and can go to the allocator.
    Accepted(Money),

    /// Ask again, offering these bounds.
    Retry(AmountBounds),
}

/// Interactive amount entry against one inventory snapshot.
#[derive(Debug, Clone)]
pub struct AmountPrompt<'a> {
    inventory: &'a Inventory,
    bounds: AmountBounds,
    attempts: u32,
}

impl<'a> AmountPrompt<'a> {
    pub fn new(inventory: &'a Inventory) -> Self {
        AmountPrompt {
            inventory,
            bounds: AmountBounds::none(),
            attempts: 0,
        }
    }

    /// The text to show before reading input.
    ///
    /// Zero bounds are left out; if both are zero the prompt falls back to
    /// [`PromptMessage::EnterAmount`].
    pub fn message(&self) -> PromptMessage {
        let amounts: Vec<Money> = [self.bounds.ceil, self.bounds.floor]
            .into_iter()
            .filter(|amount| !amount.is_zero())
            .collect();

        if amounts.is_empty() {
            PromptMessage::EnterAmount
        } else {
            PromptMessage::ChooseFrom(amounts)
        }
    }

    /// Pre-filled answer: the upper bound, when there is one.
    pub fn suggested(&self) -> Option<Money> {
        Some(self.bounds.ceil).filter(|ceil| !ceil.is_zero())
    }

    /// Bounds computed from the last rejected submission.
    pub fn bounds(&self) -> AmountBounds {
        self.bounds
    }

    /// Number of submissions so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Feeds one line of input.
    ///
    /// Input that does not parse as a whole number is treated like an empty
    /// answer (amount zero), so the customer is simply asked again.
    pub fn submit(&mut self, input: &str) -> PromptOutcome {
        self.attempts += 1;
        let amount = parse_amount(input).unwrap_or_default();

        if is_satisfiable(amount, self.inventory) {
            return PromptOutcome::Accepted(amount);
        }

        self.bounds = nearest_bounds(amount, self.inventory);
        PromptOutcome::Retry(self.bounds)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Denomination;

    fn demo_machine() -> Inventory {
        Inventory::new(vec![
            Denomination::new(5000, 40),
            Denomination::new(1000, 40),
            Denomination::new(200, 40).with_reserve(2),
            Denomination::new(100, 40),
        ])
    }

    #[test]
    fn test_first_message() {
        let inventory = demo_machine();
        let prompt = AmountPrompt::new(&inventory);
        assert_eq!(prompt.message(), PromptMessage::EnterAmount);
        assert_eq!(prompt.message().to_string(), "Enter the amount");
        assert_eq!(prompt.suggested(), None);
        assert_eq!(prompt.attempts(), 0);
    }

    #[test]
    fn test_retry_then_accept() {
        let inventory = demo_machine();
        let mut prompt = AmountPrompt::new(&inventory);

        let outcome = prompt.submit("5050");
        assert_eq!(
            outcome,
            PromptOutcome::Retry(AmountBounds {
                floor: Money::from_minor(5000),
                ceil: Money::from_minor(5100),
            })
        );
        assert_eq!(
            prompt.message().to_string(),
            "Choose available amounts: 5100 or 5000"
        );
        assert_eq!(prompt.suggested(), Some(Money::from_minor(5100)));

        let outcome = prompt.submit("5100");
        assert_eq!(outcome, PromptOutcome::Accepted(Money::from_minor(5100)));
        assert_eq!(prompt.attempts(), 2);
    }

    #[test]
    fn test_small_amount_omits_zero_floor() {
        let inventory = demo_machine();
        let mut prompt = AmountPrompt::new(&inventory);

        prompt.submit("50");
        assert_eq!(
            prompt.message(),
            PromptMessage::ChooseFrom(vec![Money::from_minor(100)])
        );
    }

    #[test]
    fn test_garbage_input_reads_as_zero() {
        let inventory = demo_machine();
        let mut prompt = AmountPrompt::new(&inventory);

        let outcome = prompt.submit("a lot");
        assert_eq!(
            outcome,
            PromptOutcome::Retry(AmountBounds {
                floor: Money::zero(),
                ceil: Money::from_minor(100),
            })
        );
    }

    #[test]
    fn test_nothing_usable_keeps_asking() {
        let inventory = Inventory::new(vec![Denomination::new(200, 2).with_reserve(2)]);
        let mut prompt = AmountPrompt::new(&inventory);

        assert_eq!(prompt.submit("200"), PromptOutcome::Retry(AmountBounds::none()));
        assert_eq!(prompt.message(), PromptMessage::EnterAmount);
        assert_eq!(prompt.suggested(), None);
    }

    #[test]
    fn test_message_wire_shape() {
        let message = PromptMessage::ChooseFrom(vec![Money::from_minor(5100), Money::from_minor(5000)]);
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, r#"{"kind":"choose_from","amounts":[5100,5000]}"#);
    }
}

//! # Interactive Session
//!
//! Drives [`AmountPrompt`] over a line-based reader and writer.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  show message ──► read line ──► submit ──┬── Accepted ──► allocate      │
//! │       ▲                                  │                              │
//! │       └──────────── Retry (bounds) ◄─────┘                              │
//! │                                                                         │
//! │  EOF              → Cancelled                                           │
//! │  attempts used up → GaveUp                                              │
//! │  empty line       → take the suggested amount, if any                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Generic over `BufRead`/`Write` so tests can script a customer.

use std::io::{self, BufRead, Write};

use cashpoint_core::{
    allocate, AmountPrompt, DispensationPlan, DispenseError, Inventory, Money, PromptOutcome,
};
use tracing::{debug, info};

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Notes were allocated for `amount`.
    Dispensed {
        amount: Money,
        plan: DispensationPlan,
    },

    /// The amount was accepted but the allocator refused it.
    Declined {
        amount: Money,
        error: DispenseError,
    },

    /// Input ended before an amount was accepted.
    Cancelled,

    /// Too many unusable entries.
    GaveUp { attempts: u32 },
}

/// Runs one withdrawal against `inventory`.
pub fn run<R, W>(
    inventory: &Inventory,
    max_attempts: u32,
    mut input: R,
    mut output: W,
) -> io::Result<SessionOutcome>
where
    R: BufRead,
    W: Write,
{
    let mut prompt = AmountPrompt::new(inventory);
    let mut line = String::new();

    loop {
        if prompt.attempts() >= max_attempts {
            info!(attempts = prompt.attempts(), "Giving up on amount entry");
            return Ok(SessionOutcome::GaveUp {
                attempts: prompt.attempts(),
            });
        }

        let suggested = prompt.suggested();
        match suggested {
            Some(amount) => write!(output, "{} [{}]: ", prompt.message(), amount)?,
            None => write!(output, "{}: ", prompt.message())?,
        }
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("Input closed during amount entry");
            return Ok(SessionOutcome::Cancelled);
        }

        let answer = match suggested {
            Some(amount) if line.trim().is_empty() => amount.to_string(),
            _ => line.trim().to_string(),
        };

        match prompt.submit(&answer) {
            PromptOutcome::Accepted(amount) => {
                info!(%amount, attempts = prompt.attempts(), "Amount accepted");
                return Ok(match allocate(amount, inventory) {
                    Ok(plan) => SessionOutcome::Dispensed { amount, plan },
                    Err(error) => SessionOutcome::Declined { amount, error },
                });
            }
            PromptOutcome::Retry(bounds) => {
                debug!(
                    input = %answer,
                    floor = %bounds.floor,
                    ceil = %bounds.ceil,
                    "Amount not satisfiable, asking again"
                );
            }
        }
    }
}

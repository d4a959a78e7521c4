//! # Cashpoint ATM
//!
//! Terminal front end for the dispensing core.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: info, debug for cashpoint, override: RUST_LOG            │
//! │                                                                         │
//! │  2. Parse Arguments ──────────────────────────────────────────────────► │
//! │                                                                         │
//! │  3. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults → atm.toml → CASHPOINT_* env                             │
//! │                                                                         │
//! │  4. Run Mode ─────────────────────────────────────────────────────────► │
//! │     • interactive prompt, one-shot dispense, bounds, or inventory       │
//! │     • plans and bounds go to stdout as JSON                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cli;
mod config;
mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use cashpoint_core::{allocate, nearest_bounds, DispensationPlan, DispenseError, Money};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{parse_args, Mode, USAGE};
use crate::config::AtmConfig;
use crate::session::SessionOutcome;

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();

    let args = parse_args(std::env::args().skip(1))?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Help must work even when the config file is broken.
    if args.mode == Mode::Help {
        writeln!(out, "{}", USAGE)?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = AtmConfig::load(args.config_path).context("Failed to load ATM configuration")?;
    info!(
        denominations = config.inventory.len(),
        dispensable = %config.inventory.max_dispensable(),
        smallest = %config.inventory.smallest_usable_value(),
        "Inventory loaded"
    );

    match args.mode {
        Mode::Help => Ok(ExitCode::SUCCESS),
        Mode::ShowInventory => {
            print_inventory(&mut out, &config)?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Bounds(amount) => {
            let bounds = nearest_bounds(amount, &config.inventory);
            writeln!(out, "{}", serde_json::to_string_pretty(&bounds)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Mode::Dispense(amount) => report(&mut out, &config, amount, allocate(amount, &config.inventory)),
        Mode::Interactive => {
            let max_attempts = args.max_attempts.unwrap_or(config.max_attempts);
            let stdin = io::stdin();
            let outcome = session::run(&config.inventory, max_attempts, stdin.lock(), &mut out)?;
            writeln!(out)?;

            match outcome {
                SessionOutcome::Dispensed { amount, plan } => report(&mut out, &config, amount, Ok(plan)),
                SessionOutcome::Declined { amount, error } => report(&mut out, &config, amount, Err(error)),
                SessionOutcome::Cancelled => {
                    warn!("Session cancelled before an amount was accepted");
                    Ok(ExitCode::FAILURE)
                }
                SessionOutcome::GaveUp { attempts } => {
                    warn!(attempts, "No usable amount entered");
                    eprintln!("No usable amount after {} attempts", attempts);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

/// Prints a plan as JSON, or the reason it could not be made.
fn report<W: Write>(
    out: &mut W,
    config: &AtmConfig,
    amount: Money,
    result: Result<DispensationPlan, DispenseError>,
) -> anyhow::Result<ExitCode> {
    match result {
        Ok(plan) => {
            info!(
                amount = %amount.format(&config.currency_symbol, config.minor_units),
                notes = plan.note_count(),
                "Dispensing"
            );
            writeln!(out, "{}", serde_json::to_string_pretty(&plan)?)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            warn!(%amount, %error, "Request declined");
            eprintln!("Error: {}", error);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_inventory<W: Write>(out: &mut W, config: &AtmConfig) -> anyhow::Result<()> {
    let rows: Vec<_> = config
        .inventory
        .by_value_desc()
        .into_iter()
        .map(|d| {
            json!({
                "value": d.value,
                "count": d.count,
                "reserve": d.reserve,
                "usable": d.usable_count(),
            })
        })
        .collect();

    let summary = json!({
        "denominations": rows,
        "smallestUsable": config.inventory.smallest_usable_value(),
        "maxDispensable": config.inventory.max_dispensable(),
        "maxDispensableDisplay": config
            .inventory
            .max_dispensable()
            .format(&config.currency_symbol, config.minor_units),
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=cashpoint_core=trace` - Trace the allocator only
/// - Default: INFO, DEBUG for cashpoint crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cashpoint_core=debug,atm=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

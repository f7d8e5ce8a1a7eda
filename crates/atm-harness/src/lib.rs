//! Test harness for the ATM session state machine.
//!
//! Extracts observable state from [`atm_app::App`], checks session
//! invariants against it, and drives the App through intent sequences with
//! a running ledger of expected balances.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod invariants;
mod sim_driver;

pub use invariants::{Invariant, InvariantRegistry, InvariantResult, SessionSnapshot, Violation};
pub use sim_driver::SimDriver;

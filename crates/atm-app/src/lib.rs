//! Application layer for the ATM simulator
//!
//! Pure session state machine and generic runtime, enabling deterministic
//! testing with the same code that runs behind the terminal UI.
//!
//! # Components
//!
//! - [`App`]: session state machine (PIN entry, accounts, operations)
//! - [`Accounts`]: canonical balances and their mutation rules
//! - [`AtmConfig`]: secret PIN, seed balances, withdrawal denominations
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod accounts;
mod action;
mod amount;
mod app;
pub mod config;
mod driver;
mod error;
mod event;
mod input;
mod runtime;
mod state;

pub use accounts::Accounts;
pub use action::AppAction;
pub use amount::Amount;
pub use app::App;
pub use config::{AtmConfig, ConfigError};
pub use driver::Driver;
pub use error::AtmError;
pub use event::{AppEvent, Intent};
pub use input::KeyInput;
pub use runtime::Runtime;
pub use state::{Account, AccountKind, MenuTarget, Notification, Screen, Theme};

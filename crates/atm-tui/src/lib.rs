//! Terminal UI for the ATM simulator
//!
//! A thin shell over [`atm_app::Driver`] that provides terminal-specific
//! I/O. All session logic lives in [`atm_app::App`] and orchestration in the
//! generic [`atm_app::Runtime`].
//!
//! This crate only handles key mapping and terminal rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod input;
pub mod terminal;
pub mod ui;

pub use atm_app::{App, AppAction, AppEvent, AtmConfig, Driver, KeyInput, Runtime};
pub use input::InputState;
pub use terminal::{TerminalDriver, TerminalError};

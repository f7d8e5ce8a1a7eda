//! Application side-effects.
//!
//! This module defines the [`AppAction`] enum, the effects produced by the
//! [`crate::App`] state machine for the runtime to execute.

use crate::Notification;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Show a blocking notification to the user.
    Notify(Notification),
}

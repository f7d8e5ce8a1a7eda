//! Error types for session operations.
//!
//! Every variant is user-recoverable: the state machine converts each one into
//! a [`crate::Notification`] and stays on a valid, navigable screen.

use thiserror::Error;

use crate::{AccountKind, Amount};

/// Errors raised by session and account operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtmError {
    /// Entered PIN does not match the configured secret.
    #[error("invalid PIN")]
    AuthenticationFailed,

    /// Withdrawal exceeds the available balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        /// Amount the user asked for.
        requested: Amount,
        /// Balance at the time of the request.
        available: Amount,
    },

    /// Amount is not a positive number, or the result would overflow.
    #[error("invalid amount: {input:?}")]
    InvalidAmount {
        /// Raw input that was rejected.
        input: String,
    },

    /// No account of this kind exists in the collection.
    #[error("unknown account: {0}")]
    UnknownAccount(AccountKind),
}

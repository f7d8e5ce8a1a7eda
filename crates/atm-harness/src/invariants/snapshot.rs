//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of a session at a point in time.
//! Invariants operate on snapshots rather than live state to ensure
//! consistent, atomic checks.

use atm_app::{Account, AccountKind, Amount, App, Screen};

/// Snapshot of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Current screen.
    pub screen: Screen,
    /// Whether the PIN was accepted.
    pub authenticated: bool,
    /// Number of PIN digits entered.
    pub pin_len: usize,
    /// Selected account kind.
    pub selected: Option<AccountKind>,
    /// All accounts, in collection order.
    pub accounts: Vec<Account>,
    /// Raw pending deposit text.
    pub pending_deposit: String,
    /// Sum of balances the accounts should hold. `None` if not tracked.
    pub expected_total: Option<Amount>,
}

impl SessionSnapshot {
    /// Capture the observable state of `app`.
    pub fn from_app(app: &App) -> Self {
        Self {
            screen: app.screen(),
            authenticated: app.is_authenticated(),
            pin_len: app.entered_pin().len(),
            selected: app.selected_kind(),
            accounts: app.accounts().iter().collect(),
            pending_deposit: app.pending_deposit().to_string(),
            expected_total: None,
        }
    }

    /// Attach the expected balance total for conservation checks.
    #[must_use]
    pub fn with_expected_total(mut self, total: Amount) -> Self {
        self.expected_total = Some(total);
        self
    }

    /// Sum of all balances, or `None` on overflow.
    pub fn total(&self) -> Option<Amount> {
        self.accounts.iter().try_fold(Amount::ZERO, |acc, a| acc.checked_add(a.balance))
    }
}

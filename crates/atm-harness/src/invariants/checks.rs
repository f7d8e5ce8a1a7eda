//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use atm_app::{AccountKind, config::PIN_LENGTH};

use super::{Invariant, InvariantResult, SessionSnapshot, Violation};

/// Entered PIN never exceeds [`PIN_LENGTH`] digits.
pub struct PinLengthBounded;

impl Invariant for PinLengthBounded {
    fn name(&self) -> &'static str {
        "pin_length_bounded"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.pin_len > PIN_LENGTH {
            return Err(Violation {
                invariant: self.name(),
                message: format!("entered PIN has {} digits", state.pin_len),
            });
        }
        Ok(())
    }
}

/// Only the PIN screen is visible without authentication.
pub struct AuthenticatedScreens;

impl Invariant for AuthenticatedScreens {
    fn name(&self) -> &'static str {
        "authenticated_screens"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.screen.requires_auth() && !state.authenticated {
            return Err(Violation {
                invariant: self.name(),
                message: format!("screen {} shown without authentication", state.screen),
            });
        }
        Ok(())
    }
}

/// Menu and operation screens always have an account selected.
///
/// The account screen may or may not carry a selection (first login vs.
/// switching), so it is not checked.
pub struct SelectionOnOperationScreens;

impl Invariant for SelectionOnOperationScreens {
    fn name(&self) -> &'static str {
        "selection_on_operation_screens"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.screen.requires_selection() && state.selected.is_none() {
            return Err(Violation {
                invariant: self.name(),
                message: format!("screen {} has no selected account", state.screen),
            });
        }
        Ok(())
    }
}

/// A logged-out session holds no selection and no pending deposit.
pub struct LoggedOutIsClean;

impl Invariant for LoggedOutIsClean {
    fn name(&self) -> &'static str {
        "logged_out_is_clean"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        if state.authenticated {
            return Ok(());
        }
        if let Some(kind) = state.selected {
            return Err(Violation {
                invariant: self.name(),
                message: format!("logged out with {kind} selected"),
            });
        }
        if !state.pending_deposit.is_empty() {
            return Err(Violation {
                invariant: self.name(),
                message: format!("logged out with pending deposit {:?}", state.pending_deposit),
            });
        }
        Ok(())
    }
}

/// Exactly one account exists per kind.
pub struct OneAccountPerKind;

impl Invariant for OneAccountPerKind {
    fn name(&self) -> &'static str {
        "one_account_per_kind"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let mut kinds: Vec<_> = state.accounts.iter().map(|a| a.kind).collect();
        kinds.sort_unstable();
        if kinds != AccountKind::ALL {
            return Err(Violation {
                invariant: self.name(),
                message: format!("account kinds {kinds:?}"),
            });
        }
        Ok(())
    }
}

/// Balances sum to the tracked expectation.
///
/// Money only moves through reported withdrawals and deposits. A mismatch
/// means a balance changed without a notification, or a notification was
/// emitted without a balance change.
pub struct BalanceConservation;

impl Invariant for BalanceConservation {
    fn name(&self) -> &'static str {
        "balance_conservation"
    }

    fn check(&self, state: &SessionSnapshot) -> InvariantResult {
        let Some(expected) = state.expected_total else {
            return Ok(());
        };
        let actual = state.total();
        if actual != Some(expected) {
            return Err(Violation {
                invariant: self.name(),
                message: format!("balances sum to {actual:?}, expected {expected}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use atm_app::{Account, Amount, Screen};

    use super::*;

    fn snapshot() -> SessionSnapshot {
        SessionSnapshot {
            screen: Screen::Pin,
            authenticated: false,
            pin_len: 0,
            selected: None,
            accounts: vec![
                Account { kind: AccountKind::Current, balance: Amount::from_units(1) },
                Account { kind: AccountKind::Savings, balance: Amount::from_units(2) },
            ],
            pending_deposit: String::new(),
            expected_total: None,
        }
    }

    #[test]
    fn long_pin_violates() {
        let state = SessionSnapshot { pin_len: 5, ..snapshot() };
        assert!(PinLengthBounded.check(&state).is_err());
    }

    #[test]
    fn menu_without_auth_violates() {
        let state = SessionSnapshot { screen: Screen::Menu, ..snapshot() };
        assert!(AuthenticatedScreens.check(&state).is_err());
        assert!(SelectionOnOperationScreens.check(&state).is_err());
    }

    #[test]
    fn account_screen_allows_missing_selection() {
        let state = SessionSnapshot { screen: Screen::Account, authenticated: true, ..snapshot() };
        assert!(SelectionOnOperationScreens.check(&state).is_ok());
    }

    #[test]
    fn logged_out_selection_violates() {
        let state = SessionSnapshot { selected: Some(AccountKind::Savings), ..snapshot() };
        assert!(LoggedOutIsClean.check(&state).is_err());
    }

    #[test]
    fn duplicate_kind_violates() {
        let mut state = snapshot();
        state.accounts[1].kind = AccountKind::Current;
        assert!(OneAccountPerKind.check(&state).is_err());
    }

    #[test]
    fn conservation_compares_totals() {
        let state = snapshot().with_expected_total(Amount::from_units(3));
        assert!(BalanceConservation.check(&state).is_ok());

        let state = snapshot().with_expected_total(Amount::from_units(4));
        assert!(BalanceConservation.check(&state).is_err());
    }
}

//! Session invariants.
//!
//! A session invariant is a rule about the ATM that no sequence of intents
//! may break: a logged-out user never sees an account screen, the PIN buffer
//! never grows past four digits, money never appears or disappears without
//! a withdrawal or deposit notification, and so on.
//!
//! Checks run against a [`SessionSnapshot`] rather than the live [`App`], so
//! one capture feeds every rule and the rules cannot mutate the session.
//!
//! ```ignore
//! let snapshot = SessionSnapshot::from_app(&app);
//! InvariantRegistry::standard().check_all(&snapshot)?;
//! ```
//!
//! [`App`]: atm_app::App

mod checks;
mod snapshot;

use std::fmt;

pub use checks::{
    AuthenticatedScreens, BalanceConservation, LoggedOutIsClean, OneAccountPerKind,
    PinLengthBounded, SelectionOnOperationScreens,
};
pub use snapshot::SessionSnapshot;

/// Outcome of a single rule.
pub type InvariantResult = Result<(), Violation>;

/// A broken rule and what was observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Rule that failed.
    pub invariant: &'static str,
    /// Observed state that breaks it.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// A rule over one session snapshot.
pub trait Invariant: Send + Sync {
    /// Stable name used in violation reports.
    fn name(&self) -> &'static str;

    /// Check `state`, describing the first problem found.
    fn check(&self, state: &SessionSnapshot) -> InvariantResult;
}

/// Ordered set of session rules.
#[derive(Default)]
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl InvariantRegistry {
    /// Registry with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every session rule this crate defines.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(PinLengthBounded);
        registry.add(AuthenticatedScreens);
        registry.add(SelectionOnOperationScreens);
        registry.add(LoggedOutIsClean);
        registry.add(OneAccountPerKind);
        registry.add(BalanceConservation);
        registry
    }

    /// Register another rule. Rules run in registration order.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Names of the registered rules, in order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.invariants.iter().map(|inv| inv.name())
    }

    /// Run every rule and collect all failures.
    pub fn check_all(&self, state: &SessionSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Panic with every failure listed. `context` names the step under test.
    pub fn assert_all(&self, state: &SessionSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            let lines: Vec<_> = violations.iter().map(ToString::to_string).collect();
            panic!("session invariants broken {context}:\n  {}", lines.join("\n  "));
        }
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// True if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use atm_app::{AccountKind, App, MenuTarget, Screen};

    use super::*;

    struct NeverOnBalance;

    impl Invariant for NeverOnBalance {
        fn name(&self) -> &'static str {
            "never_on_balance"
        }

        fn check(&self, state: &SessionSnapshot) -> InvariantResult {
            if state.screen == Screen::Balance {
                return Err(Violation { invariant: self.name(), message: "on balance".into() });
            }
            Ok(())
        }
    }

    fn on_balance_screen() -> App {
        let mut app = App::default();
        for d in [1, 2, 3, 4] {
            app.digit_press(d);
        }
        app.submit_pin();
        app.select_account(AccountKind::Savings);
        app.navigate(MenuTarget::Balance);
        app
    }

    #[test]
    fn standard_registry_lists_session_rules() {
        let registry = InvariantRegistry::standard();
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.names().next(), Some("pin_length_bounded"));
        assert!(registry.names().any(|name| name == "balance_conservation"));
    }

    #[test]
    fn fresh_and_logged_in_sessions_pass() {
        let registry = InvariantRegistry::standard();
        assert!(registry.check_all(&SessionSnapshot::from_app(&App::default())).is_ok());
        assert!(registry.check_all(&SessionSnapshot::from_app(&on_balance_screen())).is_ok());
    }

    #[test]
    fn custom_rule_reports_violation() {
        let mut registry = InvariantRegistry::standard();
        registry.add(NeverOnBalance);

        let result = registry.check_all(&SessionSnapshot::from_app(&on_balance_screen()));

        let names: Vec<_> = result.err().unwrap_or_default().iter().map(|v| v.invariant).collect();
        assert_eq!(names, vec!["never_on_balance"]);
    }
}

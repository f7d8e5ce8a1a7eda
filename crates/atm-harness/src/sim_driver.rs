//! Simulation driver for session tests.
//!
//! [`SimDriver`] wraps an [`App`], applies intents one at a time, keeps a
//! ledger of the money that should be in the accounts based on the
//! notifications the App emits, and checks the invariant registry after
//! every step.

use atm_app::{AccountKind, Amount, App, AppAction, AtmConfig, Intent, Notification};

use crate::invariants::{InvariantRegistry, SessionSnapshot, Violation};

/// Drives an [`App`] and checks invariants after each intent.
pub struct SimDriver {
    app: App,
    registry: InvariantRegistry,
    expected_total: Amount,
    notifications: Vec<Notification>,
    steps: usize,
}

impl SimDriver {
    /// Driver over a fresh App built from `config`.
    pub fn new(config: AtmConfig) -> Self {
        let app = App::new(config);
        let expected_total = app.accounts().total().unwrap_or_default();
        Self {
            app,
            registry: InvariantRegistry::standard(),
            expected_total,
            notifications: Vec::new(),
            steps: 0,
        }
    }

    /// Apply one intent and verify every invariant.
    ///
    /// # Errors
    ///
    /// Returns all violations if any invariant fails after the step.
    pub fn step(&mut self, intent: Intent) -> Result<Vec<AppAction>, Vec<Violation>> {
        tracing::trace!(step = self.steps, ?intent, "applying intent");
        let actions = self.app.apply(intent);
        self.steps += 1;

        for action in &actions {
            if let AppAction::Notify(notification) = action {
                self.record(notification);
            }
        }

        self.registry.check_all(&self.snapshot())?;
        Ok(actions)
    }

    /// Apply intents in order, stopping at the first violation.
    ///
    /// # Errors
    ///
    /// Returns the violations of the failing step.
    pub fn run(&mut self, intents: impl IntoIterator<Item = Intent>) -> Result<(), Vec<Violation>> {
        for intent in intents {
            self.step(intent)?;
        }
        Ok(())
    }

    /// Type a PIN digit by digit and submit it.
    ///
    /// # Errors
    ///
    /// Returns the violations of the failing step.
    pub fn login(&mut self, pin: &str) -> Result<(), Vec<Violation>> {
        let digits: Vec<_> = pin
            .chars()
            .filter_map(|c| c.to_digit(10))
            .filter_map(|d| u8::try_from(d).ok())
            .map(Intent::DigitPress)
            .collect();
        self.run(digits)?;
        self.step(Intent::SubmitPin).map(|_| ())
    }

    fn record(&mut self, notification: &Notification) {
        let moved = match notification {
            Notification::Withdrawn(amount) => self.expected_total.checked_sub(*amount),
            Notification::Deposited(amount) => self.expected_total.checked_add(*amount),
            Notification::InvalidPin
            | Notification::InsufficientFunds
            | Notification::InvalidAmount => None,
        };
        if let Some(total) = moved {
            self.expected_total = total;
        }
        self.notifications.push(notification.clone());
    }

    /// Snapshot of the current state with the ledger expectation attached.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::from_app(&self.app).with_expected_total(self.expected_total)
    }

    /// Underlying App.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Notifications emitted so far, oldest first.
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Number of intents applied.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Balance of `kind`.
    pub fn balance(&self, kind: AccountKind) -> Option<Amount> {
        self.app.balance(kind)
    }
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new(AtmConfig::default())
    }
}

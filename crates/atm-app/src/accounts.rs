//! Canonical account collection.
//!
//! [`Accounts`] holds exactly one [`Account`] per [`AccountKind`]. It is the
//! single source of truth for balances: the session's selected account is a
//! kind used to look into this collection, never a copy of it.

use std::collections::BTreeMap;

use crate::{Account, AccountKind, Amount, AtmError};

/// One account per kind, with balance mutation rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accounts {
    balances: BTreeMap<AccountKind, Amount>,
}

impl Accounts {
    /// Seed the collection. Kinds missing from `seed` start at zero.
    pub fn seeded(seed: &BTreeMap<AccountKind, Amount>) -> Self {
        let balances = AccountKind::ALL
            .into_iter()
            .map(|kind| (kind, seed.get(&kind).copied().unwrap_or_default()))
            .collect();
        Self { balances }
    }

    /// Look up an account by kind.
    pub fn get(&self, kind: AccountKind) -> Option<Account> {
        self.balances.get(&kind).map(|&balance| Account { kind, balance })
    }

    /// All accounts in display order.
    pub fn iter(&self) -> impl Iterator<Item = Account> + '_ {
        self.balances.iter().map(|(&kind, &balance)| Account { kind, balance })
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// True if the collection holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Sum of all balances, or `None` on overflow.
    pub fn total(&self) -> Option<Amount> {
        self.balances.values().try_fold(Amount::ZERO, |acc, &b| acc.checked_add(b))
    }

    /// Debit `amount` from `kind`. Returns the new balance.
    ///
    /// The amount must be positive and no larger than the balance.
    pub fn withdraw(&mut self, kind: AccountKind, amount: Amount) -> Result<Amount, AtmError> {
        if amount.is_zero() {
            return Err(AtmError::InvalidAmount { input: amount.to_string() });
        }

        let balance = self.balances.get_mut(&kind).ok_or(AtmError::UnknownAccount(kind))?;
        let updated = balance
            .checked_sub(amount)
            .ok_or(AtmError::InsufficientFunds { requested: amount, available: *balance })?;
        *balance = updated;
        Ok(updated)
    }

    /// Credit `amount` to `kind`. Returns the new balance.
    ///
    /// The amount must be positive and the result must not overflow.
    pub fn deposit(&mut self, kind: AccountKind, amount: Amount) -> Result<Amount, AtmError> {
        if amount.is_zero() {
            return Err(AtmError::InvalidAmount { input: amount.to_string() });
        }

        let balance = self.balances.get_mut(&kind).ok_or(AtmError::UnknownAccount(kind))?;
        let updated = balance
            .checked_add(amount)
            .ok_or_else(|| AtmError::InvalidAmount { input: amount.to_string() })?;
        *balance = updated;
        Ok(updated)
    }
}

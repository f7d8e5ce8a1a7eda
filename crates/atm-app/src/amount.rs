//! Fixed-point money amounts.
//!
//! [`Amount`] stores money in minor units (cents) so balances stay exact
//! across any sequence of deposits and withdrawals. Text is read as an
//! unsigned decimal, optionally in exponent notation (`"1e2"`, `"2.5e1"`),
//! and accepted only if it lands on a whole number of cents.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, de};

use crate::AtmError;

/// Minor units per major unit.
const CENTS_PER_UNIT: u64 = 100;

/// Non-negative money amount in minor units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Amount from whole currency units.
    ///
    /// Saturates at the largest representable amount.
    pub const fn from_units(units: u64) -> Self {
        Self(units.saturating_mul(CENTS_PER_UNIT))
    }

    /// Amount from minor units (cents).
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Value in minor units.
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// True for the zero amount.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Sum, or `None` on overflow.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Difference, or `None` if `other` is larger.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = self.0 / CENTS_PER_UNIT;
        let cents = self.0 % CENTS_PER_UNIT;
        if cents == 0 { write!(f, "${units}") } else { write!(f, "${units}.{cents:02}") }
    }
}

impl FromStr for Amount {
    type Err = AtmError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || AtmError::InvalidAmount { input: input.to_string() };

        let text = input.trim();
        let text = text.strip_prefix('+').unwrap_or(text);

        let (mantissa, exponent) = match text.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, Some(exponent)),
            None => (text, None),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let whole = if whole.is_empty() { "0" } else { whole };
        let fraction = if fraction.is_empty() { "0" } else { fraction };

        let value = match exponent {
            Some(exponent) => {
                let digits = exponent.strip_prefix(['+', '-']).unwrap_or(exponent);
                if digits.is_empty() || !all_digits(digits) {
                    return Err(invalid());
                }
                let exponent: i32 = exponent.parse().map_err(|_| invalid())?;
                Decimal::from_scientific(&format!("{whole}.{fraction}e{exponent}"))
            },
            None => Decimal::from_str(&format!("{whole}.{fraction}")),
        }
        .map_err(|_| invalid())?;

        value
            .checked_mul(Decimal::ONE_HUNDRED)
            .filter(|cents| cents.fract().is_zero())
            .and_then(|cents| cents.to_u64())
            .map(Self)
            .ok_or_else(invalid)
    }
}

/// Config files write amounts either as whole numbers (`1000`) or as
/// decimal strings (`"12.50"`).
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Units(u64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Units(units) => units
                .checked_mul(CENTS_PER_UNIT)
                .map(Self)
                .ok_or_else(|| de::Error::custom(format!("amount {units} is too large"))),
            Raw::Text(text) => text.parse().map_err(de::Error::custom),
        }
    }
}

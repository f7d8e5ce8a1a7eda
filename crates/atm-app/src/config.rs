//! Machine configuration.
//!
//! [`AtmConfig`] holds the constants that shape a session: the secret PIN,
//! the seed balance of each account, and the withdrawal denominations on
//! offer. Values come from defaults, then an optional TOML file, then the
//! `ATM_SECRET_PIN` environment variable.
//!
//! ```toml
//! secret_pin = "4321"
//! withdrawal_denominations = [20, 40, 100]
//!
//! [seed_balances]
//! current = 250
//! savings = "1200.50"
//! ```

use std::{collections::BTreeMap, fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{AccountKind, Amount};

/// Environment variable overriding the secret PIN.
pub const SECRET_PIN_ENV: &str = "ATM_SECRET_PIN";

/// Number of digits in a PIN.
pub const PIN_LENGTH: usize = 4;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path that was read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Config file is not valid TOML for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but violates a constraint.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtmConfig {
    /// PIN that authenticates a session.
    pub secret_pin: String,
    /// Opening balance per account kind.
    pub seed_balances: BTreeMap<AccountKind, Amount>,
    /// Withdrawal amounts offered, in display order.
    pub withdrawal_denominations: Vec<Amount>,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            secret_pin: "1234".to_string(),
            seed_balances: BTreeMap::from([
                (AccountKind::Current, Amount::from_units(1000)),
                (AccountKind::Savings, Amount::from_units(5000)),
            ]),
            withdrawal_denominations: [20, 50, 100, 200, 500, 1000]
                .into_iter()
                .map(Amount::from_units)
                .collect(),
        }
    }
}

/// On-disk shape. Account kinds are plain strings so unknown kinds produce a
/// readable validation error instead of a serde one.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    secret_pin: Option<String>,
    seed_balances: Option<BTreeMap<String, Amount>>,
    withdrawal_denominations: Option<Vec<Amount>>,
}

impl AtmConfig {
    /// Load configuration from an optional file, then apply the
    /// [`SECRET_PIN_ENV`] override from the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with(path, std::env::var(SECRET_PIN_ENV).ok())
    }

    /// Load configuration from an optional file, then apply `secret` if given.
    pub fn load_with(path: Option<&Path>, secret: Option<String>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_toml_str(&raw)?
            },
            None => Self::default(),
        };

        let config = config.with_secret_override(secret);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: RawConfig = toml::from_str(raw)?;
        let mut config = Self::default();

        if let Some(secret_pin) = parsed.secret_pin {
            config.secret_pin = secret_pin;
        }

        if let Some(seed) = parsed.seed_balances {
            let mut balances = BTreeMap::new();
            for (name, amount) in seed {
                let kind = name.parse::<AccountKind>().map_err(ConfigError::Invalid)?;
                balances.insert(kind, amount);
            }
            config.seed_balances = balances;
        }

        if let Some(denominations) = parsed.withdrawal_denominations {
            config.withdrawal_denominations = denominations;
        }

        config.validate()?;
        Ok(config)
    }

    /// Replace the secret PIN when an override is present.
    #[must_use]
    pub fn with_secret_override(mut self, secret: Option<String>) -> Self {
        if let Some(secret) = secret {
            tracing::debug!("secret PIN overridden from environment");
            self.secret_pin = secret;
        }
        self
    }

    /// Check the configuration constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret_pin.len() != PIN_LENGTH
            || !self.secret_pin.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ConfigError::Invalid(format!(
                "secret_pin must be exactly {PIN_LENGTH} ASCII digits"
            )));
        }

        if self.withdrawal_denominations.is_empty() {
            return Err(ConfigError::Invalid(
                "withdrawal_denominations must not be empty".to_string(),
            ));
        }

        if self.withdrawal_denominations.iter().any(|d| d.is_zero()) {
            return Err(ConfigError::Invalid(
                "withdrawal_denominations must be positive".to_string(),
            ));
        }

        let mut seen = self.withdrawal_denominations.clone();
        seen.sort_unstable();
        seen.dedup();
        if seen.len() != self.withdrawal_denominations.len() {
            return Err(ConfigError::Invalid(
                "withdrawal_denominations must not repeat".to_string(),
            ));
        }

        Ok(())
    }
}

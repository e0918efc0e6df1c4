use std::time::Duration;

use super::{positive_var_or, var_or};
use crate::domain::rules::MAX_ROUNDS;
use crate::error::AppError;

pub const DEFAULT_TURN_INTERVAL: Duration = Duration::from_secs(30);
pub const DEFAULT_CAS_ATTEMPTS: u32 = 8;

/// Tunables for one game instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Turn counter value at which the game ends.
    pub max_rounds: u32,
    /// Minimum wall-clock time between two scheduled turns.
    pub turn_interval: Duration,
    /// Prepended to every store key.
    pub key_prefix: String,
    /// Attempts per compare-and-swap loop before giving up with a conflict.
    pub cas_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            turn_interval: DEFAULT_TURN_INTERVAL,
            key_prefix: String::new(),
            cas_attempts: DEFAULT_CAS_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Reads `MAX_ROUNDS`, `TURN_INTERVAL_SECS`, `STORE_KEY_PREFIX` and
    /// `STORE_CAS_ATTEMPTS`; each one is optional.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let max_rounds = positive_var_or("MAX_ROUNDS", u64::from(defaults.max_rounds))?;
        let max_rounds = u32::try_from(max_rounds)
            .map_err(|_| AppError::config("MAX_ROUNDS is out of range"))?;
        let interval_secs =
            positive_var_or("TURN_INTERVAL_SECS", defaults.turn_interval.as_secs())?;
        let cas_attempts =
            positive_var_or("STORE_CAS_ATTEMPTS", u64::from(defaults.cas_attempts))?;
        let cas_attempts = u32::try_from(cas_attempts)
            .map_err(|_| AppError::config("STORE_CAS_ATTEMPTS is out of range"))?;

        Ok(Self {
            max_rounds,
            turn_interval: Duration::from_secs(interval_secs),
            key_prefix: var_or("STORE_KEY_PREFIX", defaults.key_prefix)?,
            cas_attempts,
        })
    }
}

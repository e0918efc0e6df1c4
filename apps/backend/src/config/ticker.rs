use std::time::Duration;

use super::positive_var_or;
use crate::error::AppError;

/// Settings for the turn-ticker daemon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerConfig {
    /// How often the daemon asks whether a turn is due.
    pub tick_interval: Duration,
}

impl TickerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            tick_interval: Duration::from_secs(positive_var_or("TICK_INTERVAL_SECS", 5)?),
        })
    }
}

//! Environment-driven configuration.

pub mod game;
pub mod store;
pub mod ticker;

use std::env;
use std::str::FromStr;

use crate::error::AppError;

pub use game::GameConfig;
pub use store::{StoreConfig, StoreKind};
pub use ticker::TickerConfig;

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Parse an optional environment variable, falling back to `default` when unset.
pub(crate) fn var_or<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| {
            AppError::config(format!(
                "Environment variable '{name}' has an invalid value: '{raw}'"
            ))
        }),
        Err(_) => Ok(default),
    }
}

/// Like [`var_or`] but rejects zero.
pub(crate) fn positive_var_or(name: &str, default: u64) -> Result<u64, AppError> {
    let value = var_or(name, default)?;
    if value == 0 {
        return Err(AppError::config(format!(
            "Environment variable '{name}' must be greater than zero"
        )));
    }
    Ok(value)
}

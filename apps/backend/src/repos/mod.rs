//! Persistence contracts over the key-value store.
//!
//! Each repository owns one key. Values are JSON documents except the turn
//! marker, which is a decimal millisecond timestamp.

pub mod game_state;
pub mod turn_marker;
pub mod votes;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::AppError;

pub use game_state::{GameStateRepo, Versioned};
pub use turn_marker::{Marker, TurnMarkerRepo};
pub use votes::{Ledger, VoteLedgerRepo};

/// Fully qualified store keys for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    pub game_state: String,
    pub votes: String,
    pub last_turn: String,
}

impl StoreKeys {
    pub fn new(prefix: &str) -> Self {
        Self {
            game_state: format!("{prefix}game_state"),
            votes: format!("{prefix}current_votes"),
            last_turn: format!("{prefix}last_turn_processed"),
        }
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::new("")
    }
}

pub(crate) fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, AppError> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::corrupted(format!("Stored value under '{key}' is not valid"), e))
}

pub(crate) fn encode<T: Serialize>(key: &str, value: &T) -> Result<String, AppError> {
    serde_json::to_string(value)
        .map_err(|e| AppError::corrupted(format!("Value for '{key}' could not be encoded"), e))
}

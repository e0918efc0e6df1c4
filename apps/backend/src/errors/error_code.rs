//! Error codes for the faction clash backend.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that a transport layer would surface to clients.

use core::fmt;

use serde::{Serialize, Serializer};

/// Centralized error codes.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// No authenticated username was supplied
    MissingIdentity,
    /// Faction outside the fixed four-item set
    InvalidFaction,
    /// Action outside the fixed three-item set
    InvalidAction,
    /// Player already holds a faction assignment
    AlreadyInFaction,
    /// Player has not joined a faction
    NotInFaction,
    /// Player already voted this turn
    AlreadyVoted,
    /// Attack vote without a target
    MissingAttackTarget,
    /// Attack vote targeting the voter's own faction
    SelfTarget,

    // Business Logic Conflicts
    /// Stored record changed between read and conditional write
    OptimisticLock,

    // System Errors
    /// Key-value store did not respond
    StoreUnavailable,
    /// Stored record could not be decoded
    DataCorruption,
    ConfigError,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            // Request Validation
            Self::MissingIdentity => "MISSING_IDENTITY",
            Self::InvalidFaction => "INVALID_FACTION",
            Self::InvalidAction => "INVALID_ACTION",
            Self::AlreadyInFaction => "ALREADY_IN_FACTION",
            Self::NotInFaction => "NOT_IN_FACTION",
            Self::AlreadyVoted => "ALREADY_VOTED",
            Self::MissingAttackTarget => "MISSING_ATTACK_TARGET",
            Self::SelfTarget => "SELF_TARGET",

            // Business Logic Conflicts
            Self::OptimisticLock => "OPTIMISTIC_LOCK",

            // System Errors
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 12] = [
        Self::MissingIdentity,
        Self::InvalidFaction,
        Self::InvalidAction,
        Self::AlreadyInFaction,
        Self::NotInFaction,
        Self::AlreadyVoted,
        Self::MissingAttackTarget,
        Self::SelfTarget,
        Self::OptimisticLock,
        Self::StoreUnavailable,
        Self::DataCorruption,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

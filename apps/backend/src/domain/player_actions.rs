//! Join and vote rules applied to an in-memory [`GameState`].
//!
//! These functions validate and mutate the snapshot only. Persisting the
//! snapshot and the vote ledger is the service layer's job.

use crate::domain::faction::{Action, Faction};
use crate::domain::state::{GameState, Player, Vote};
use crate::errors::domain::{DomainError, ValidationKind};

/// Trimmed, non-empty username or `MissingIdentity`.
pub fn require_identity(username: &str) -> Result<&str, DomainError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingIdentity,
            "A username is required",
        ));
    }
    Ok(trimmed)
}

/// Register `username` in `faction`. A player can join exactly once.
pub fn join_faction(
    state: &mut GameState,
    username: &str,
    faction: Faction,
) -> Result<(), DomainError> {
    let username = require_identity(username)?;
    if state.players.contains_key(username) {
        return Err(DomainError::validation(
            ValidationKind::AlreadyInFaction,
            "You are already in a faction!",
        ));
    }

    state.players.insert(
        username.to_owned(),
        Player {
            username: username.to_owned(),
            faction,
            has_voted: false,
        },
    );
    Ok(())
}

/// Validate a ballot, flag the player as having voted and return the vote to
/// append to the ledger.
///
/// A target passed with Defend or Train is dropped.
pub fn cast_vote(
    state: &mut GameState,
    username: &str,
    action: Action,
    target: Option<Faction>,
) -> Result<Vote, DomainError> {
    let username = require_identity(username)?;
    let Some(player) = state.players.get_mut(username) else {
        return Err(DomainError::validation(
            ValidationKind::NotInFaction,
            "You must join a faction before voting",
        ));
    };

    if player.has_voted {
        return Err(DomainError::validation(
            ValidationKind::AlreadyVoted,
            "You have already voted this turn",
        ));
    }

    let target = match action {
        Action::Attack => match target {
            None => {
                return Err(DomainError::validation(
                    ValidationKind::MissingAttackTarget,
                    "Attack requires a target faction",
                ))
            }
            Some(t) if t == player.faction => {
                return Err(DomainError::validation(
                    ValidationKind::SelfTarget,
                    "You cannot attack your own faction",
                ))
            }
            Some(t) => Some(t),
        },
        Action::Defend | Action::Train => None,
    };

    player.has_voted = true;
    Ok(Vote {
        username: player.username.clone(),
        faction: player.faction,
        action,
        target,
    })
}

/// Clear the vote flag again after the ledger write for a vote failed.
/// Returns whether the flag was set.
pub fn withdraw_vote(state: &mut GameState, username: &str) -> bool {
    match state.players.get_mut(username.trim()) {
        Some(player) if player.has_voted => {
            player.has_voted = false;
            true
        }
        _ => false,
    }
}

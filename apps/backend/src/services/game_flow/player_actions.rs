use tracing::{error, info, warn};

use super::GameFlowService;
use crate::domain::faction::{Action, Faction};
use crate::domain::player_actions::{cast_vote, join_faction, withdraw_vote};
use crate::error::AppError;
use crate::protocol::{JoinOutcome, Rejection, VoteOutcome};

impl GameFlowService {
    /// Enlist `username` in `faction`. Joining twice is a rejected outcome,
    /// not an error.
    pub async fn join_faction(
        &self,
        username: &str,
        faction: Faction,
    ) -> Result<JoinOutcome, AppError> {
        let _guard = self.gate.lock().await;

        match self
            .games
            .update(|state| Ok(join_faction(state, username, faction)?))
            .await
        {
            Ok(_) => {
                info!(username = %username.trim(), faction = %faction, "Player joined faction");
                Ok(JoinOutcome::joined(faction))
            }
            Err(err) => Rejection::from_app_error(err).map(JoinOutcome::rejected),
        }
    }

    /// Record one vote for the current turn.
    ///
    /// The player's vote flag is committed first, then the vote is appended
    /// to the ledger. If the append fails the flag is withdrawn again so the
    /// player can retry.
    pub async fn submit_vote(
        &self,
        username: &str,
        action: Action,
        target: Option<Faction>,
    ) -> Result<VoteOutcome, AppError> {
        let _guard = self.gate.lock().await;

        let vote = match self
            .games
            .update(|state| Ok(cast_vote(state, username, action, target)?))
            .await
        {
            Ok((_, vote)) => vote,
            Err(err) => return Rejection::from_app_error(err).map(VoteOutcome::rejected),
        };

        if let Err(err) = self.votes.append(&vote).await {
            warn!(username = %vote.username, error = %err, "Vote ledger write failed, withdrawing vote");
            if let Err(revert) = self
                .games
                .update(|state| Ok(withdraw_vote(state, &vote.username)))
                .await
            {
                error!(username = %vote.username, error = %revert, "Failed to withdraw vote flag");
            }
            return Err(err);
        }

        info!(
            username = %vote.username,
            faction = %vote.faction,
            action = %vote.action,
            target = ?vote.target,
            "Vote recorded"
        );
        Ok(VoteOutcome::recorded(vote.action, vote.target))
    }
}

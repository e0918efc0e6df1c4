use tracing::{debug, error, info, warn};

use super::GameFlowService;
use crate::domain::resolution::{resolve_turn, TurnResolution};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};

impl GameFlowService {
    /// Resolve the current turn and commit it.
    ///
    /// The new snapshot is committed with compare-and-swap against the
    /// snapshot the votes were tallied for. Once that commit lands the turn
    /// is resolved; the ledger cleanup that follows cannot undo it. If the
    /// cleanup fails, the leftover votes no longer carry a vote flag and are
    /// skipped and drained by the next resolution.
    pub async fn process_turn(&self) -> Result<TurnResolution, AppError> {
        let _guard = self.gate.lock().await;

        for attempt in 1..=self.config.cas_attempts {
            let base = self.games.load_versioned().await?;
            let ledger = self.votes.load().await?;
            let votes = base.state.live_votes(&ledger);
            if votes.len() < ledger.len() {
                warn!(
                    skipped = ledger.len() - votes.len(),
                    "Skipping votes left over from an earlier turn"
                );
            }

            let mut next = base.state.clone();
            let resolution = resolve_turn(&mut next, &votes, self.config.max_rounds);

            if !self.games.commit(&base, &next).await? {
                debug!(attempt, "Retrying turn resolution");
                continue;
            }
            if let Err(err) = self.votes.drain(ledger.len()).await {
                error!(error = %err, "Turn committed but its votes were not drained");
            }

            match &resolution {
                TurnResolution::Advanced { turn, .. } => info!(
                    turn = *turn,
                    votes = votes.len(),
                    next_turn = next.current_turn,
                    "Turn resolved"
                ),
                TurnResolution::GameOver { .. } => info!(
                    turn = next.current_turn,
                    leader = %next.leader(),
                    "Game over"
                ),
            }
            return Ok(resolution);
        }

        Err(DomainError::conflict(
            ConflictKind::OptimisticLock,
            format!(
                "Turn could not be committed after {} attempts, please retry",
                self.config.cas_attempts
            ),
        )
        .into())
    }
}

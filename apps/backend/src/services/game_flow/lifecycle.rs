use tracing::{debug, info};

use super::GameFlowService;
use crate::domain::faction::Faction;
use crate::error::AppError;
use crate::protocol::{GameStateView, ResetOutcome};

impl GameFlowService {
    /// Snapshot for `username`, persisting the default game on first access.
    pub async fn init_or_get(&self, username: Option<&str>) -> Result<GameStateView, AppError> {
        let state = self.games.get().await?;
        debug!(turn = state.current_turn, active = state.active, "Loaded game state");
        Ok(GameStateView::for_viewer(state, username))
    }

    /// Read-only snapshot for `username`. An absent game reads as the
    /// default snapshot without being written.
    pub async fn get_state(&self, username: Option<&str>) -> Result<GameStateView, AppError> {
        let state = self.games.load_versioned().await?.state;
        Ok(GameStateView::for_viewer(state, username))
    }

    pub async fn player_faction(&self, username: &str) -> Result<Option<Faction>, AppError> {
        let state = self.games.load_versioned().await?.state;
        Ok(state.player_faction(username.trim()))
    }

    pub async fn has_player_voted(&self, username: &str) -> Result<bool, AppError> {
        let state = self.games.load_versioned().await?.state;
        Ok(state.has_voted(username.trim()))
    }

    /// Start over: default snapshot, empty ledger, no turn marker.
    pub async fn reset_game(&self) -> Result<ResetOutcome, AppError> {
        let _guard = self.gate.lock().await;

        self.games.initialize().await?;
        self.votes.clear().await?;
        self.marker.clear().await?;

        info!("Game reset");
        Ok(ResetOutcome::done())
    }
}

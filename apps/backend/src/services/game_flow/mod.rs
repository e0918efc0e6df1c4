//! Game flow service - bridges the pure domain rules with store persistence.
//!
//! Every mutating call in this process goes through one async gate, so local
//! callers never race each other. Races with other processes sharing the
//! store are caught by compare-and-swap in the repositories.

mod lifecycle;
mod orchestration;
mod player_actions;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::GameConfig;
use crate::repos::{GameStateRepo, StoreKeys, TurnMarkerRepo, VoteLedgerRepo};
use crate::store::KvStore;

pub struct GameFlowService {
    config: GameConfig,
    games: GameStateRepo,
    votes: VoteLedgerRepo,
    marker: TurnMarkerRepo,
    gate: Mutex<()>,
}

impl GameFlowService {
    pub fn new(store: Arc<dyn KvStore>, config: GameConfig) -> Self {
        let keys = StoreKeys::new(&config.key_prefix);
        Self {
            games: GameStateRepo::new(store.clone(), keys.game_state, config.cas_attempts),
            votes: VoteLedgerRepo::new(store.clone(), keys.votes, config.cas_attempts),
            marker: TurnMarkerRepo::new(store, keys.last_turn),
            config,
            gate: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub(crate) fn turn_marker(&self) -> &TurnMarkerRepo {
        &self.marker
    }
}

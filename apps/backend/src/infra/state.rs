use std::sync::Arc;

use crate::config::{GameConfig, StoreConfig};
use crate::error::AppError;
use crate::services::{GameFlowService, TurnScheduler};
use crate::state::app_state::AppState;
use crate::store::{KvStore, MemoryStore};
use crate::utils::clock::{Clock, SystemClock};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    config: GameConfig,
    store: Option<Arc<dyn KvStore>>,
    store_config: Option<StoreConfig>,
    clock: Arc<dyn Clock>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            store: None,
            store_config: None,
            clock: Arc::new(SystemClock),
        }
    }

    /// Use an already connected store. Takes precedence over `with_store_config`.
    pub fn with_store(mut self, store: Arc<dyn KvStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_store_config(mut self, store_config: StoreConfig) -> Self {
        self.store_config = Some(store_config);
        self
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let store: Arc<dyn KvStore> = match (self.store, self.store_config) {
            (Some(store), _) => store,
            (None, Some(store_config)) => store_config.connect().await?,
            (None, None) => Arc::new(MemoryStore::new()),
        };

        let flow = Arc::new(GameFlowService::new(store, self.config));
        let scheduler = Arc::new(TurnScheduler::new(flow.clone(), self.clock));
        Ok(AppState::new(flow, scheduler))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

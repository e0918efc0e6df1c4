#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod protocol;
pub mod repos;
pub mod services;
pub mod state;
pub mod store;
pub mod utils;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::{GameConfig, StoreConfig, StoreKind, TickerConfig};
pub use domain::{Action, Faction, GameState, TurnResolution};
pub use error::AppError;
pub use errors::ErrorCode;
pub use infra::state::{build_state, StateBuilder};
pub use services::{GameFlowService, ProcessOutcome, TurnScheduler, TurnStatus};
pub use state::app_state::AppState;
pub use store::{KvStore, MemoryStore, RedisStore, StoreError};
pub use utils::clock::{Clock, ManualClock, SystemClock};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

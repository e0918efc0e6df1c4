#![allow(dead_code)]

use std::sync::Arc;

use clash_backend::infra::state::build_state;
use clash_backend::{AppState, GameConfig, KvStore, ManualClock, MemoryStore};
use time::macros::datetime;
use time::OffsetDateTime;

// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

pub const START: OffsetDateTime = datetime!(2024-01-01 12:00 UTC);

/// A test game: app state plus handles on its store and clock.
pub struct TestGame {
    pub app: AppState,
    pub store: Arc<MemoryStore>,
    pub clock: Arc<ManualClock>,
}

pub async fn game() -> TestGame {
    game_with(GameConfig::default()).await
}

pub async fn game_with(config: GameConfig) -> TestGame {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(START));
    let app = app_on(store.clone(), clock.clone(), config).await;
    TestGame { app, store, clock }
}

/// Another app state on an existing store, standing in for a second process.
pub async fn app_on(
    store: Arc<dyn KvStore>,
    clock: Arc<ManualClock>,
    config: GameConfig,
) -> AppState {
    build_state()
        .with_store(store)
        .with_clock(clock)
        .with_config(config)
        .build()
        .await
        .expect("state should build")
}

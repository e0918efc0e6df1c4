use std::sync::Arc;

use tracing::{debug, warn};

use super::{decode, encode};
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::store::KvStore;

/// A snapshot together with the exact stored text it was decoded from.
///
/// `raw` is the compare-and-swap token; `None` means nothing was stored yet.
#[derive(Debug, Clone)]
pub struct Versioned {
    pub state: GameState,
    raw: Option<String>,
}

impl Versioned {
    pub fn is_persisted(&self) -> bool {
        self.raw.is_some()
    }
}

/// Reads and writes the GameState aggregate.
#[derive(Clone)]
pub struct GameStateRepo {
    store: Arc<dyn KvStore>,
    key: String,
    cas_attempts: u32,
}

impl GameStateRepo {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>, cas_attempts: u32) -> Self {
        Self {
            store,
            key: key.into(),
            cas_attempts: cas_attempts.max(1),
        }
    }

    /// Current snapshot, or the default snapshot (not yet persisted) if the
    /// key is absent.
    pub async fn load_versioned(&self) -> Result<Versioned, AppError> {
        match self.store.get(&self.key).await? {
            Some(raw) => Ok(Versioned {
                state: decode(&self.key, &raw)?,
                raw: Some(raw),
            }),
            None => Ok(Versioned {
                state: GameState::new(),
                raw: None,
            }),
        }
    }

    /// Current snapshot. The first access persists the default snapshot;
    /// concurrent first accesses agree on a single one.
    pub async fn get(&self) -> Result<GameState, AppError> {
        for _ in 0..self.cas_attempts {
            let current = self.load_versioned().await?;
            if current.is_persisted() {
                return Ok(current.state);
            }
            if self.commit(&current, &current.state).await? {
                debug!(key = %self.key, "Initialized default game state");
                return Ok(current.state);
            }
        }
        Err(self.exhausted())
    }

    /// Overwrite the snapshot unconditionally.
    pub async fn save(&self, state: &GameState) -> Result<(), AppError> {
        let raw = encode(&self.key, state)?;
        self.store.set(&self.key, &raw).await?;
        debug!(key = %self.key, turn = state.current_turn, "Saved game state");
        Ok(())
    }

    /// Overwrite with the default snapshot and return it.
    pub async fn initialize(&self) -> Result<GameState, AppError> {
        let state = GameState::new();
        self.save(&state).await?;
        Ok(state)
    }

    /// Write `next` only if the stored snapshot is still the one `base` was
    /// read from. Returns whether the write happened.
    pub async fn commit(&self, base: &Versioned, next: &GameState) -> Result<bool, AppError> {
        let raw = encode(&self.key, next)?;
        let swapped = self
            .store
            .compare_and_swap(&self.key, base.raw.as_deref(), &raw)
            .await?;
        if !swapped {
            warn!(key = %self.key, "Game state changed concurrently");
        }
        Ok(swapped)
    }

    /// Optimistic read-modify-write.
    ///
    /// `mutate` runs on a fresh copy for every attempt. An `Err` from it
    /// aborts without writing. A successful mutation is committed with
    /// compare-and-swap; lost races are retried up to the attempt budget.
    pub async fn update<T, F>(&self, mut mutate: F) -> Result<(GameState, T), AppError>
    where
        F: FnMut(&mut GameState) -> Result<T, AppError>,
    {
        for attempt in 1..=self.cas_attempts {
            let current = self.load_versioned().await?;
            let mut next = current.state.clone();
            let value = mutate(&mut next)?;
            if self.commit(&current, &next).await? {
                return Ok((next, value));
            }
            debug!(key = %self.key, attempt, "Retrying game state update");
        }
        Err(self.exhausted())
    }

    fn exhausted(&self) -> AppError {
        DomainError::conflict(
            ConflictKind::OptimisticLock,
            format!(
                "Game state kept changing after {} attempts, please retry",
                self.cas_attempts
            ),
        )
        .into()
    }
}

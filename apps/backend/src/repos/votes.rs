use std::sync::Arc;

use tracing::{debug, warn};

use super::{decode, encode};
use crate::domain::state::Vote;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::store::KvStore;

/// The ledger contents plus the stored text they were decoded from.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub votes: Vec<Vote>,
    raw: Option<String>,
}

/// Append-only list of this turn's votes, in submission order.
#[derive(Clone)]
pub struct VoteLedgerRepo {
    store: Arc<dyn KvStore>,
    key: String,
    cas_attempts: u32,
}

impl VoteLedgerRepo {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>, cas_attempts: u32) -> Self {
        Self {
            store,
            key: key.into(),
            cas_attempts: cas_attempts.max(1),
        }
    }

    pub async fn load(&self) -> Result<Vec<Vote>, AppError> {
        Ok(self.load_versioned().await?.votes)
    }

    pub async fn load_versioned(&self) -> Result<Ledger, AppError> {
        match self.store.get(&self.key).await? {
            Some(raw) => Ok(Ledger {
                votes: decode(&self.key, &raw)?,
                raw: Some(raw),
            }),
            None => Ok(Ledger::default()),
        }
    }

    pub async fn append(&self, vote: &Vote) -> Result<(), AppError> {
        for attempt in 1..=self.cas_attempts {
            let mut ledger = self.load_versioned().await?;
            ledger.votes.push(vote.clone());
            let raw = encode(&self.key, &ledger.votes)?;
            if self
                .store
                .compare_and_swap(&self.key, ledger.raw.as_deref(), &raw)
                .await?
            {
                debug!(
                    key = %self.key,
                    username = %vote.username,
                    ledger_len = ledger.votes.len(),
                    "Appended vote"
                );
                return Ok(());
            }
            debug!(key = %self.key, attempt, "Retrying vote append");
        }
        Err(self.exhausted())
    }

    /// Remove the first `count` votes. Votes appended after the caller
    /// loaded the ledger sit behind that prefix and are kept.
    pub async fn drain(&self, count: usize) -> Result<(), AppError> {
        for attempt in 1..=self.cas_attempts {
            let ledger = self.load_versioned().await?;
            let Some(raw) = ledger.raw.as_deref() else {
                return Ok(());
            };
            let remaining = &ledger.votes[count.min(ledger.votes.len())..];
            let done = if remaining.is_empty() {
                self.store.compare_and_delete(&self.key, raw).await?
            } else {
                warn!(
                    key = %self.key,
                    kept = remaining.len(),
                    "Votes arrived during resolution; keeping them for the next turn"
                );
                let next = encode(&self.key, &remaining)?;
                self.store
                    .compare_and_swap(&self.key, Some(raw), &next)
                    .await?
            };
            if done {
                debug!(key = %self.key, drained = count, "Drained vote ledger");
                return Ok(());
            }
            debug!(key = %self.key, attempt, "Retrying vote drain");
        }
        Err(self.exhausted())
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        self.store.delete(&self.key).await?;
        debug!(key = %self.key, "Cleared vote ledger");
        Ok(())
    }

    fn exhausted(&self) -> AppError {
        DomainError::conflict(
            ConflictKind::OptimisticLock,
            format!(
                "Vote ledger kept changing after {} attempts, please retry",
                self.cas_attempts
            ),
        )
        .into()
    }
}

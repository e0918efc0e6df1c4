use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::store::KvStore;

/// The scheduler's last-processed timestamp as read from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub at: OffsetDateTime,
    raw: String,
}

/// Stores the last-processed timestamp as Unix epoch milliseconds.
#[derive(Clone)]
pub struct TurnMarkerRepo {
    store: Arc<dyn KvStore>,
    key: String,
}

impl TurnMarkerRepo {
    pub fn new(store: Arc<dyn KvStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub async fn load(&self) -> Result<Option<Marker>, AppError> {
        let Some(raw) = self.store.get(&self.key).await? else {
            return Ok(None);
        };
        let at = decode_millis(&raw).ok_or_else(|| AppError::DataCorruption {
            detail: format!("Stored value under '{}' is not a timestamp", self.key),
            source: None,
        })?;
        Ok(Some(Marker { at, raw }))
    }

    pub async fn stamp(&self, at: OffsetDateTime) -> Result<(), AppError> {
        self.store.set(&self.key, &encode_millis(at)).await?;
        debug!(key = %self.key, at = %at, "Stamped turn marker");
        Ok(())
    }

    /// Move the marker from `observed` to `at` if nobody else moved it first.
    /// Returns the new marker when this caller won the slot.
    pub async fn claim(
        &self,
        observed: Option<&Marker>,
        at: OffsetDateTime,
    ) -> Result<Option<Marker>, AppError> {
        let raw = encode_millis(at);
        let expected = observed.map(|m| m.raw.as_str());
        if self
            .store
            .compare_and_swap(&self.key, expected, &raw)
            .await?
        {
            debug!(key = %self.key, at = %at, "Claimed turn slot");
            Ok(Some(Marker { at, raw }))
        } else {
            debug!(key = %self.key, "Turn slot already claimed");
            Ok(None)
        }
    }

    /// Undo a claim, restoring `previous`. Does nothing if the marker moved
    /// since it was claimed.
    pub async fn release(
        &self,
        claimed: &Marker,
        previous: Option<&Marker>,
    ) -> Result<bool, AppError> {
        let restored = match previous {
            Some(prev) => {
                self.store
                    .compare_and_swap(&self.key, Some(&claimed.raw), &prev.raw)
                    .await?
            }
            None => {
                self.store
                    .compare_and_delete(&self.key, &claimed.raw)
                    .await?
            }
        };
        if restored {
            warn!(key = %self.key, "Released turn slot claim");
        }
        Ok(restored)
    }

    pub async fn clear(&self) -> Result<(), AppError> {
        self.store.delete(&self.key).await?;
        debug!(key = %self.key, "Cleared turn marker");
        Ok(())
    }
}

fn encode_millis(at: OffsetDateTime) -> String {
    (at.unix_timestamp_nanos() / 1_000_000).to_string()
}

fn decode_millis(raw: &str) -> Option<OffsetDateTime> {
    let millis: i128 = raw.trim().parse().ok()?;
    OffsetDateTime::from_unix_timestamp_nanos(millis.checked_mul(1_000_000)?).ok()
}

//! Time-gated turn trigger.
//!
//! A turn is due once the configured interval has elapsed since the stored
//! marker. Callers in any number of processes may ask at once; the marker is
//! claimed with compare-and-swap before resolving, so each interval resolves
//! at most one turn.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info};

use crate::domain::resolution::TurnResolution;
use crate::error::AppError;
use crate::protocol::outcomes::{minutes_ceil, whole_secs};
use crate::repos::{Marker, TurnMarkerRepo};
use crate::services::game_flow::GameFlowService;
use crate::utils::clock::Clock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    Processed { resolution: TurnResolution },
    NotDue { next_turn_in: Duration },
}

/// Countdown summary for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnStatus {
    pub time_until_next: Duration,
    /// `time_until_next` in whole minutes, rounded up.
    pub minutes_remaining: u64,
    pub should_process: bool,
}

pub struct TurnScheduler {
    flow: Arc<GameFlowService>,
    marker: TurnMarkerRepo,
    interval: Duration,
    clock: Arc<dyn Clock>,
}

impl TurnScheduler {
    pub fn new(flow: Arc<GameFlowService>, clock: Arc<dyn Clock>) -> Self {
        Self {
            marker: flow.turn_marker().clone(),
            interval: flow.config().turn_interval,
            flow,
            clock,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub async fn is_due(&self) -> Result<bool, AppError> {
        Ok(self.time_until_next().await?.is_zero())
    }

    /// Time left in the current interval; zero when no turn was ever processed.
    pub async fn time_until_next(&self) -> Result<Duration, AppError> {
        let marker = self.marker.load().await?;
        Ok(self.remaining(marker.as_ref()))
    }

    pub async fn status(&self) -> Result<TurnStatus, AppError> {
        let time_until_next = self.time_until_next().await?;
        Ok(TurnStatus {
            time_until_next,
            minutes_remaining: minutes_ceil(whole_secs(time_until_next)),
            should_process: time_until_next.is_zero(),
        })
    }

    /// Resolve a turn if one is due and this caller wins the slot.
    ///
    /// A caller that loses the claim to a concurrent caller gets `NotDue`.
    /// If resolution fails the claim is released so the next poll retries.
    pub async fn process_if_due(&self) -> Result<ProcessOutcome, AppError> {
        let previous = self.marker.load().await?;
        let remaining = self.remaining(previous.as_ref());
        if !remaining.is_zero() {
            return Ok(ProcessOutcome::NotDue {
                next_turn_in: remaining,
            });
        }

        let Some(claim) = self
            .marker
            .claim(previous.as_ref(), self.clock.now())
            .await?
        else {
            let current = self.marker.load().await?;
            return Ok(ProcessOutcome::NotDue {
                next_turn_in: self.remaining(current.as_ref()),
            });
        };

        match self.flow.process_turn().await {
            Ok(resolution) => {
                self.marker.stamp(self.clock.now()).await?;
                info!(game_over = resolution.is_game_over(), "Scheduled turn processed");
                Ok(ProcessOutcome::Processed { resolution })
            }
            Err(err) => {
                if let Err(release_err) = self.marker.release(&claim, previous.as_ref()).await {
                    error!(error = %release_err, "Failed to release turn slot claim");
                }
                Err(err)
            }
        }
    }

    /// Resolve a turn now, ignoring the interval. The cadence restarts from
    /// the completion time.
    pub async fn force_process(&self) -> Result<TurnResolution, AppError> {
        let resolution = self.flow.process_turn().await?;
        self.marker.stamp(self.clock.now()).await?;
        info!(actions = resolution.action_count(), "Turn force-processed");
        Ok(resolution)
    }

    fn remaining(&self, marker: Option<&Marker>) -> Duration {
        let Some(marker) = marker else {
            return Duration::ZERO;
        };
        // A marker in the future counts as zero elapsed.
        let elapsed = Duration::try_from(self.clock.now() - marker.at).unwrap_or(Duration::ZERO);
        debug!(elapsed_ms = elapsed.as_millis() as u64, "Checked turn marker");
        self.interval.saturating_sub(elapsed)
    }
}

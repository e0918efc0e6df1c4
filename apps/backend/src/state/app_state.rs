use std::sync::Arc;
use std::time::Duration;

use crate::domain::faction::{Action, Faction};
use crate::error::AppError;
use crate::protocol::outcomes::whole_secs;
use crate::protocol::{GameStateView, JoinOutcome, ResetOutcome, TurnReport, VoteOutcome};
use crate::services::{GameFlowService, ProcessOutcome, TurnScheduler, TurnStatus};

/// Application state shared by every caller of the core.
///
/// Cloning is cheap; clones share the same service and scheduler.
#[derive(Clone)]
pub struct AppState {
    flow: Arc<GameFlowService>,
    scheduler: Arc<TurnScheduler>,
}

impl AppState {
    pub fn new(flow: Arc<GameFlowService>, scheduler: Arc<TurnScheduler>) -> Self {
        Self { flow, scheduler }
    }

    pub fn flow(&self) -> &GameFlowService {
        &self.flow
    }

    pub fn scheduler(&self) -> &TurnScheduler {
        &self.scheduler
    }

    pub async fn init_or_get(&self, username: Option<&str>) -> Result<GameStateView, AppError> {
        self.flow.init_or_get(username).await
    }

    pub async fn join_faction(
        &self,
        username: &str,
        faction: Faction,
    ) -> Result<JoinOutcome, AppError> {
        self.flow.join_faction(username, faction).await
    }

    pub async fn submit_vote(
        &self,
        username: &str,
        action: Action,
        target: Option<Faction>,
    ) -> Result<VoteOutcome, AppError> {
        self.flow.submit_vote(username, action, target).await
    }

    pub async fn get_state(&self, username: Option<&str>) -> Result<GameStateView, AppError> {
        self.flow.get_state(username).await
    }

    pub async fn process_turn_if_due(&self) -> Result<TurnReport, AppError> {
        match self.scheduler.process_if_due().await? {
            ProcessOutcome::Processed { resolution } => Ok(TurnReport::processed(
                &resolution,
                self.scheduler.interval().as_secs(),
            )),
            ProcessOutcome::NotDue { next_turn_in } => {
                Ok(TurnReport::waiting(whole_secs(next_turn_in)))
            }
        }
    }

    pub async fn force_process_turn(&self) -> Result<TurnReport, AppError> {
        let resolution = self.scheduler.force_process().await?;
        Ok(TurnReport::forced(
            &resolution,
            self.scheduler.interval().as_secs(),
        ))
    }

    pub async fn time_until_next_turn(&self) -> Result<Duration, AppError> {
        self.scheduler.time_until_next().await
    }

    pub async fn turn_status(&self) -> Result<TurnStatus, AppError> {
        self.scheduler.status().await
    }

    pub async fn reset_game(&self) -> Result<ResetOutcome, AppError> {
        self.flow.reset_game().await
    }
}

//! Service layer: persistence-aware operations over the pure domain.

pub mod game_flow;
pub mod scheduler;

pub use game_flow::GameFlowService;
pub use scheduler::{ProcessOutcome, TurnScheduler, TurnStatus};

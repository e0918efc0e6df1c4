//! Result values handed across the core boundary.

pub mod game_state;
pub mod outcomes;

pub use game_state::GameStateView;
pub use outcomes::{JoinOutcome, Rejection, ResetOutcome, TurnReport, VoteOutcome};

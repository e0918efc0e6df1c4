//! Domain layer: pure game rules, no I/O.

pub mod faction;
pub mod player_actions;
pub mod resolution;
pub mod rules;
pub mod standings;
pub mod state;
pub mod tally;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_player_actions;
#[cfg(test)]
mod tests_props_resolution;
#[cfg(test)]
mod tests_resolution;
#[cfg(test)]
mod tests_tally;

// Re-exports for ergonomics
pub use faction::{Action, Faction, FactionTable};
pub use resolution::{resolve_turn, TurnResolution};
pub use state::{FactionStats, GameState, Player, TurnResult, Vote};
pub use tally::{select_actions, ChosenAction};

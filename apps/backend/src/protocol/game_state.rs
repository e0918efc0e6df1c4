use serde::Serialize;

use crate::domain::faction::Faction;
use crate::domain::state::GameState;

/// Snapshot plus the requesting player's own standing in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    pub game_state: GameState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_faction: Option<Faction>,
    pub has_voted: bool,
}

impl GameStateView {
    /// View for `username`; an anonymous viewer has no faction and no vote.
    pub fn for_viewer(game_state: GameState, username: Option<&str>) -> Self {
        let username = username.map(str::trim).filter(|u| !u.is_empty());
        let player_faction = username.and_then(|u| game_state.player_faction(u));
        let has_voted = username.is_some_and(|u| game_state.has_voted(u));
        Self {
            game_state,
            player_faction,
            has_voted,
        }
    }
}

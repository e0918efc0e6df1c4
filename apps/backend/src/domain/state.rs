use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::faction::{Action, Faction, FactionTable};
use crate::domain::rules::{FIRST_TURN, INITIAL_HP, INITIAL_SCORE};
use crate::domain::standings;

/// Health and score of one faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionStats {
    /// Never negative; no ceiling.
    pub hp: u32,
    /// Non-decreasing under normal play.
    pub score: u32,
}

impl FactionStats {
    pub const fn initial() -> Self {
        Self {
            hp: INITIAL_HP,
            score: INITIAL_SCORE,
        }
    }
}

impl Default for FactionStats {
    fn default() -> Self {
        Self::initial()
    }
}

/// A registered player. The faction assignment is set once at join time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub username: String,
    pub faction: Faction,
    /// True iff this player's vote sits in the current vote ledger.
    pub has_voted: bool,
}

/// One ballot in the vote ledger. `target` is only ever set for attacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub username: String,
    pub faction: Faction,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Faction>,
}

/// What one faction did in the most recently resolved turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnResult {
    pub faction: Faction,
    pub action: Action,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Faction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_gain: Option<u32>,
    /// Narrative shown to players.
    pub result: String,
}

impl TurnResult {
    pub fn narrate(faction: Faction, action: Action, result: String) -> Self {
        Self {
            faction,
            action,
            target: None,
            damage: None,
            score_gain: None,
            result,
        }
    }
}

/// Aggregate root: the whole persisted game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub factions: FactionTable<FactionStats>,
    /// Keyed by username.
    pub players: BTreeMap<String, Player>,
    /// 1-based; advances by exactly one per resolved turn.
    pub current_turn: u32,
    /// Results of the latest resolved turn, in canonical faction order.
    pub last_turn_results: Vec<TurnResult>,
    /// False once the round cap has been reached.
    #[serde(rename = "gameActive")]
    pub active: bool,
}

impl GameState {
    /// Default snapshot: four fresh factions, no players, turn 1.
    pub fn new() -> Self {
        Self {
            factions: FactionTable::from_fn(|_| FactionStats::initial()),
            players: BTreeMap::new(),
            current_turn: FIRST_TURN,
            last_turn_results: Vec::new(),
            active: true,
        }
    }

    pub fn player(&self, username: &str) -> Option<&Player> {
        self.players.get(username)
    }

    pub fn player_faction(&self, username: &str) -> Option<Faction> {
        self.player(username).map(|p| p.faction)
    }

    pub fn has_voted(&self, username: &str) -> bool {
        self.player(username).is_some_and(|p| p.has_voted)
    }

    /// Number of players enlisted in `faction`.
    pub fn roster_size(&self, faction: Faction) -> usize {
        self.players
            .values()
            .filter(|p| p.faction == faction)
            .count()
    }

    /// Ledger entries that count this turn: the latest vote of each player
    /// whose vote flag is set, in ledger order. Entries left behind by a
    /// turn that committed before its ledger was drained fail this test.
    pub fn live_votes(&self, ledger: &[Vote]) -> Vec<Vote> {
        let mut seen = HashSet::new();
        let mut live: Vec<Vote> = ledger
            .iter()
            .rev()
            .filter(|vote| seen.insert(vote.username.as_str()) && self.has_voted(&vote.username))
            .cloned()
            .collect();
        live.reverse();
        live
    }

    /// Faction currently ranked first.
    pub fn leader(&self) -> Faction {
        standings::rank(&self.factions)[0].0
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

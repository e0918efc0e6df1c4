//! Turn resolution: every faction's action is fixed first, then all effects
//! are applied at once against the pre-turn stats.

use crate::domain::faction::{Action, Faction, FactionTable};
use crate::domain::rules::{
    round_cap_reached, DEFENDED_DAMAGE, FULL_DAMAGE, MUTUAL_DAMAGE, TRAIN_SCORE_GAIN,
};
use crate::domain::state::{GameState, TurnResult, Vote};
use crate::domain::tally::{select_actions, ChosenAction};

/// Outcome of one call into the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnResolution {
    /// Turn `turn` was resolved; `results` holds one entry per faction in
    /// canonical order. The state now sits at `turn + 1`.
    Advanced { turn: u32, results: Vec<TurnResult> },
    /// The round cap was already reached; nothing was tallied.
    GameOver { summary: String },
}

impl TurnResolution {
    pub fn results(&self) -> &[TurnResult] {
        match self {
            TurnResolution::Advanced { results, .. } => results,
            TurnResolution::GameOver { .. } => &[],
        }
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self, TurnResolution::GameOver { .. })
    }

    /// Number of faction actions the resolution carried.
    pub fn action_count(&self) -> usize {
        match self {
            TurnResolution::Advanced { results, .. } => results.len(),
            TurnResolution::GameOver { .. } => 1,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Effect {
    damage_taken: u32,
    score_gained: u32,
}

/// Resolve the current turn in place.
///
/// Once the turn counter has reached `max_rounds` (or the game is already
/// inactive) this only marks the game inactive and reports completion; the
/// counter, stats and results stay as they are.
///
/// Otherwise the counter advances by one, stats and last results are
/// replaced and every player's vote flag is cleared. Clearing the ledger
/// itself is left to the caller.
pub fn resolve_turn(state: &mut GameState, votes: &[Vote], max_rounds: u32) -> TurnResolution {
    if !state.active || round_cap_reached(state.current_turn, max_rounds) {
        state.active = false;
        return TurnResolution::GameOver {
            summary: format!(
                "Game has ended after {max_rounds} rounds! Final standings determined."
            ),
        };
    }

    let chosen = select_actions(votes);
    let mut effects: FactionTable<Effect> = FactionTable::default();
    let results: Vec<TurnResult> = Faction::ALL
        .into_iter()
        .map(|faction| execute(faction, &chosen, &mut effects))
        .collect();

    for (faction, stats) in state.factions.iter_mut() {
        let effect = effects[faction];
        stats.hp = stats.hp.saturating_sub(effect.damage_taken);
        stats.score = stats.score.saturating_add(effect.score_gained);
    }

    let turn = state.current_turn;
    state.current_turn += 1;
    state.last_turn_results = results.clone();
    for player in state.players.values_mut() {
        player.has_voted = false;
    }

    TurnResolution::Advanced { turn, results }
}

fn execute(
    faction: Faction,
    chosen: &FactionTable<ChosenAction>,
    effects: &mut FactionTable<Effect>,
) -> TurnResult {
    let mine = chosen[faction];
    match mine.action {
        Action::Attack => match mine.target {
            Some(target) if target != faction => attack(faction, target, chosen, effects),
            _ => TurnResult::narrate(
                faction,
                Action::Attack,
                format!("{faction} attempted to attack but had no valid target!"),
            ),
        },
        Action::Defend => TurnResult::narrate(
            faction,
            Action::Defend,
            format!("{faction} chose to defend and is ready to block incoming attacks."),
        ),
        Action::Train => train(faction, chosen, effects),
    }
}

/// Damage lands on `target` only. In a mutual exchange the attacker's share
/// comes from the target's own attack entry.
fn attack(
    attacker: Faction,
    target: Faction,
    chosen: &FactionTable<ChosenAction>,
    effects: &mut FactionTable<Effect>,
) -> TurnResult {
    let response = chosen[target];
    let (damage, result) = match response.action {
        Action::Defend => (
            DEFENDED_DAMAGE,
            format!(
                "{attacker} attacked {target}, but {target} defended and only took {DEFENDED_DAMAGE} damage!"
            ),
        ),
        Action::Train => (
            FULL_DAMAGE,
            format!(
                "{attacker} attacked {target} while they were training, dealing {FULL_DAMAGE} damage! {target} still gained {TRAIN_SCORE_GAIN} score from training."
            ),
        ),
        Action::Attack if response.target == Some(attacker) => (
            MUTUAL_DAMAGE,
            format!(
                "{attacker} and {target} attacked each other simultaneously, both taking {MUTUAL_DAMAGE} damage!"
            ),
        ),
        Action::Attack => (
            FULL_DAMAGE,
            format!("{attacker} attacked {target}, dealing {FULL_DAMAGE} damage!"),
        ),
    };

    effects[target].damage_taken += damage;

    TurnResult {
        faction: attacker,
        action: Action::Attack,
        target: Some(target),
        damage: Some(damage),
        score_gain: None,
        result,
    }
}

fn train(
    faction: Faction,
    chosen: &FactionTable<ChosenAction>,
    effects: &mut FactionTable<Effect>,
) -> TurnResult {
    effects[faction].score_gained += TRAIN_SCORE_GAIN;

    let exposed = faction.others().any(|rival| chosen[rival].attacks(faction));
    let result = if exposed {
        format!(
            "{faction} trained and gained {TRAIN_SCORE_GAIN} score, but was vulnerable to attacks!"
        )
    } else {
        format!("{faction} trained safely and gained {TRAIN_SCORE_GAIN} score!")
    };

    TurnResult {
        faction,
        action: Action::Train,
        target: None,
        damage: None,
        score_gain: Some(TRAIN_SCORE_GAIN),
        result,
    }
}

//! Property tests for the turn engine (pure domain, no store).

use proptest::prelude::*;

use crate::domain::faction::{Action, Faction};
use crate::domain::resolution::resolve_turn;
use crate::domain::rules::{FULL_DAMAGE, MAX_ROUNDS, TRAIN_SCORE_GAIN};
use crate::domain::state::{FactionStats, GameState};
use crate::domain::tally::select_actions;
use crate::domain::test_gens;
use crate::domain::test_prelude;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every faction survives every turn with hp >= 0 and a non-decreasing score.
    #[test]
    fn prop_stats_stay_well_formed(
        turns in prop::collection::vec(test_gens::ledger(), 1..12),
        start_hp in prop::array::uniform4(0u32..=100),
    ) {
        let mut state = GameState::new();
        for (faction, hp) in Faction::ALL.into_iter().zip(start_hp) {
            state.factions[faction] = FactionStats { hp, score: 0 };
        }

        for votes in &turns {
            let before = state.clone();
            resolve_turn(&mut state, votes, MAX_ROUNDS);

            prop_assert_eq!(state.factions.iter().count(), 4);
            for (faction, stats) in state.factions.iter() {
                let prev = before.factions[faction];
                prop_assert!(stats.score >= prev.score);
                prop_assert!(stats.score - prev.score <= TRAIN_SCORE_GAIN);
                prop_assert!(stats.hp <= prev.hp);
                prop_assert!(prev.hp - stats.hp <= 3 * FULL_DAMAGE);
            }
            prop_assert_eq!(state.current_turn, before.current_turn + 1);
            prop_assert_eq!(state.last_turn_results.len(), 4);
        }
    }

    /// The chosen action always has the maximum count among its faction's
    /// groups, and is the earliest group to reach that count.
    #[test]
    fn prop_tally_picks_earliest_maximum(votes in test_gens::ledger()) {
        let chosen = select_actions(&votes);
        for faction in Faction::ALL {
            let mine: Vec<_> = votes.iter().filter(|v| v.faction == faction).collect();
            if mine.is_empty() {
                prop_assert_eq!(chosen[faction].action, Action::Defend);
                prop_assert_eq!(chosen[faction].votes, 0);
                continue;
            }
            let count = |a: Action, t: Option<Faction>| {
                mine.iter().filter(|v| v.action == a && v.target == t).count() as u32
            };
            let best = mine.iter().map(|v| count(v.action, v.target)).max().unwrap_or(0);
            prop_assert_eq!(chosen[faction].votes, best);

            let first = mine
                .iter()
                .find(|v| count(v.action, v.target) == best)
                .map(|v| (v.action, v.target));
            prop_assert_eq!(Some((chosen[faction].action, chosen[faction].target)), first);
        }
    }

    /// Resolution never reads vote order across factions: shuffling other
    /// factions' votes around does not change the outcome.
    #[test]
    fn prop_interleaving_between_factions_is_irrelevant(votes in test_gens::ledger()) {
        let mut grouped = votes.clone();
        grouped.sort_by_key(|v| v.faction);

        let mut a = GameState::new();
        let mut b = GameState::new();
        resolve_turn(&mut a, &votes, MAX_ROUNDS);
        resolve_turn(&mut b, &grouped, MAX_ROUNDS);
        prop_assert_eq!(a, b);
    }
}

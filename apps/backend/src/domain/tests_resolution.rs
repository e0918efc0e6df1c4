use crate::domain::faction::{Action, Faction};
use crate::domain::resolution::{resolve_turn, TurnResolution};
use crate::domain::rules::MAX_ROUNDS;
use crate::domain::state::{FactionStats, GameState, Vote};
use crate::domain::test_state_helpers::{state_with_players, unanimous};

fn resolve(state: &mut GameState, votes: &[Vote]) -> TurnResolution {
    resolve_turn(state, votes, MAX_ROUNDS)
}

#[test]
fn attack_into_defend_deals_five() {
    let mut state = GameState::new();
    let mut votes = unanimous(Faction::Fire, Action::Attack, Some(Faction::Earth), 3);
    votes.extend(unanimous(Faction::Earth, Action::Defend, None, 2));

    let resolution = resolve(&mut state, &votes);

    assert_eq!(state.factions[Faction::Earth].hp, 95);
    assert_eq!(state.factions[Faction::Fire].hp, 100);
    let fire = &resolution.results()[0];
    assert_eq!(fire.faction, Faction::Fire);
    assert_eq!(fire.damage, Some(5));
    assert_eq!(
        fire.result,
        "Fire attacked Earth, but Earth defended and only took 5 damage!"
    );
}

#[test]
fn mutual_attack_costs_each_side_fifteen() {
    let mut state = GameState::new();
    let mut votes = unanimous(Faction::Fire, Action::Attack, Some(Faction::Water), 2);
    votes.extend(unanimous(Faction::Water, Action::Attack, Some(Faction::Fire), 2));

    let resolution = resolve(&mut state, &votes);

    assert_eq!(state.factions[Faction::Fire].hp, 85);
    assert_eq!(state.factions[Faction::Water].hp, 85);
    assert_eq!(state.factions[Faction::Earth].hp, 100);
    assert_eq!(resolution.results()[0].damage, Some(15));
    assert_eq!(resolution.results()[1].damage, Some(15));
    assert!(resolution.results()[0]
        .result
        .contains("attacked each other simultaneously"));
}

#[test]
fn attack_into_train_still_grants_training_score() {
    let mut state = GameState::new();
    let mut votes = unanimous(Faction::Air, Action::Attack, Some(Faction::Earth), 1);
    votes.extend(unanimous(Faction::Earth, Action::Train, None, 1));

    let resolution = resolve(&mut state, &votes);

    assert_eq!(state.factions[Faction::Earth].hp, 80);
    assert_eq!(state.factions[Faction::Earth].score, 10);
    assert_eq!(state.factions[Faction::Air].score, 0);
    let earth = &resolution.results()[2];
    assert_eq!(earth.score_gain, Some(10));
    assert_eq!(
        earth.result,
        "Earth trained and gained 10 score, but was vulnerable to attacks!"
    );
}

#[test]
fn attack_into_third_party_attacker_deals_twenty() {
    let mut state = GameState::new();
    let mut votes = unanimous(Faction::Fire, Action::Attack, Some(Faction::Water), 1);
    votes.extend(unanimous(Faction::Water, Action::Attack, Some(Faction::Earth), 1));

    resolve(&mut state, &votes);

    assert_eq!(state.factions[Faction::Water].hp, 80);
    // Earth defends by default.
    assert_eq!(state.factions[Faction::Earth].hp, 95);
    assert_eq!(state.factions[Faction::Fire].hp, 100);
}

#[test]
fn effects_use_pre_turn_actions_for_every_faction() {
    // Three factions pile on Air, which trains.
    let mut state = GameState::new();
    let mut votes = Vec::new();
    for attacker in Faction::Air.others() {
        votes.extend(unanimous(attacker, Action::Attack, Some(Faction::Air), 1));
    }
    votes.extend(unanimous(Faction::Air, Action::Train, None, 1));

    resolve(&mut state, &votes);

    assert_eq!(state.factions[Faction::Air].hp, 40);
    assert_eq!(state.factions[Faction::Air].score, 10);
}

#[test]
fn hp_floors_at_zero() {
    let mut state = GameState::new();
    state.factions[Faction::Water] = FactionStats { hp: 7, score: 0 };
    let votes = unanimous(Faction::Fire, Action::Attack, Some(Faction::Water), 1);

    resolve(&mut state, &votes);

    // Water defended by default: 5 damage lands on 7 hp.
    assert_eq!(state.factions[Faction::Water].hp, 2);

    let mut votes = unanimous(Faction::Fire, Action::Attack, Some(Faction::Water), 1);
    votes.extend(unanimous(Faction::Water, Action::Train, None, 1));
    resolve(&mut state, &votes);
    assert_eq!(state.factions[Faction::Water].hp, 0);
}

#[test]
fn commit_advances_turn_and_resets_vote_flags() {
    let mut state = state_with_players(&[("alice", Faction::Fire), ("bob", Faction::Air)]);
    for player in state.players.values_mut() {
        player.has_voted = true;
    }

    let resolution = resolve(&mut state, &[]);

    assert_eq!(state.current_turn, 2);
    assert!(state.players.values().all(|p| !p.has_voted));
    assert_eq!(state.last_turn_results.len(), 4);
    match resolution {
        TurnResolution::Advanced { turn, results } => {
            assert_eq!(turn, 1);
            assert_eq!(results, state.last_turn_results);
        }
        other => panic!("expected an advanced turn, got {other:?}"),
    }
}

#[test]
fn results_follow_canonical_order_and_default_to_defend() {
    let mut state = GameState::new();
    let resolution = resolve(&mut state, &[]);
    let order: Vec<Faction> = resolution.results().iter().map(|r| r.faction).collect();
    assert_eq!(order, Faction::ALL.to_vec());
    for result in resolution.results() {
        assert_eq!(result.action, Action::Defend);
        assert_eq!(
            result.result,
            format!(
                "{} chose to defend and is ready to block incoming attacks.",
                result.faction
            )
        );
    }
}

#[test]
fn lone_training_is_safe() {
    let mut state = GameState::new();
    let votes = unanimous(Faction::Water, Action::Train, None, 4);
    let resolution = resolve(&mut state, &votes);
    assert_eq!(
        resolution.results()[1].result,
        "Water trained safely and gained 10 score!"
    );
    assert_eq!(state.factions[Faction::Water].score, 10);
}

#[test]
fn attack_without_target_has_no_effect() {
    let mut state = GameState::new();
    let votes = unanimous(Faction::Earth, Action::Attack, None, 1);
    let resolution = resolve(&mut state, &votes);
    assert_eq!(
        resolution.results()[2].result,
        "Earth attempted to attack but had no valid target!"
    );
    for (_, stats) in state.factions.iter() {
        assert_eq!(*stats, FactionStats::initial());
    }
}

#[test]
fn round_cap_ends_the_game_without_tallying() {
    let mut state = GameState::new();
    state.current_turn = MAX_ROUNDS;
    let votes = unanimous(Faction::Fire, Action::Attack, Some(Faction::Air), 2);

    let resolution = resolve(&mut state, &votes);

    assert!(!state.active);
    assert_eq!(state.current_turn, MAX_ROUNDS);
    assert_eq!(state.factions[Faction::Air].hp, 100);
    assert_eq!(
        resolution,
        TurnResolution::GameOver {
            summary: "Game has ended after 50 rounds! Final standings determined.".into()
        }
    );
}

#[test]
fn terminal_state_is_idempotent() {
    let mut state = GameState::new();
    state.current_turn = MAX_ROUNDS;
    resolve(&mut state, &[]);
    let frozen = state.clone();

    let votes = unanimous(Faction::Water, Action::Train, None, 1);
    for _ in 0..3 {
        assert!(resolve(&mut state, &votes).is_game_over());
        assert_eq!(state, frozen);
    }
}

#[test]
fn last_playable_turn_still_resolves() {
    let mut state = GameState::new();
    state.current_turn = MAX_ROUNDS - 1;
    let resolution = resolve(&mut state, &[]);
    assert!(!resolution.is_game_over());
    assert_eq!(state.current_turn, MAX_ROUNDS);
    assert!(state.active);
}

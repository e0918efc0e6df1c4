use crate::domain::faction::{Action, Faction};
use crate::domain::player_actions::{cast_vote, join_faction, withdraw_vote};
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::state_with_players;
use crate::errors::domain::{DomainError, ValidationKind};

fn kind(err: DomainError) -> ValidationKind {
    match err {
        DomainError::Validation(kind, _) => kind,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn join_is_one_time() {
    let mut state = GameState::new();
    join_faction(&mut state, "alice", Faction::Water).unwrap();

    let err = join_faction(&mut state, "alice", Faction::Fire).unwrap_err();
    assert_eq!(kind(err), ValidationKind::AlreadyInFaction);
    assert_eq!(state.player_faction("alice"), Some(Faction::Water));
    assert!(!state.has_voted("alice"));
}

#[test]
fn blank_identity_is_rejected() {
    let mut state = GameState::new();
    let err = join_faction(&mut state, "   ", Faction::Air).unwrap_err();
    assert_eq!(kind(err), ValidationKind::MissingIdentity);
    assert!(state.players.is_empty());
}

#[test]
fn vote_requires_membership() {
    let mut state = GameState::new();
    let err = cast_vote(&mut state, "ghost", Action::Train, None).unwrap_err();
    assert_eq!(kind(err), ValidationKind::NotInFaction);
}

#[test]
fn second_vote_in_a_turn_is_rejected() {
    let mut state = state_with_players(&[("bob", Faction::Earth)]);
    let first = cast_vote(&mut state, "bob", Action::Train, None).unwrap();
    assert_eq!(first.faction, Faction::Earth);
    assert!(state.has_voted("bob"));

    let err = cast_vote(&mut state, "bob", Action::Defend, None).unwrap_err();
    assert_eq!(kind(err), ValidationKind::AlreadyVoted);
}

#[test]
fn attack_needs_a_rival_target() {
    let mut state = state_with_players(&[("carol", Faction::Fire)]);

    let err = cast_vote(&mut state, "carol", Action::Attack, None).unwrap_err();
    assert_eq!(kind(err), ValidationKind::MissingAttackTarget);

    let err = cast_vote(&mut state, "carol", Action::Attack, Some(Faction::Fire)).unwrap_err();
    assert_eq!(kind(err), ValidationKind::SelfTarget);
    assert!(!state.has_voted("carol"));

    let vote = cast_vote(&mut state, "carol", Action::Attack, Some(Faction::Air)).unwrap();
    assert_eq!(vote.target, Some(Faction::Air));
}

#[test]
fn non_attack_votes_drop_the_target() {
    let mut state = state_with_players(&[("dave", Faction::Air)]);
    let vote = cast_vote(&mut state, "dave", Action::Defend, Some(Faction::Fire)).unwrap();
    assert_eq!(vote.target, None);
}

#[test]
fn withdraw_clears_only_a_set_flag() {
    let mut state = state_with_players(&[("erin", Faction::Water)]);
    assert!(!withdraw_vote(&mut state, "erin"));

    cast_vote(&mut state, "erin", Action::Train, None).unwrap();
    assert!(withdraw_vote(&mut state, "erin"));
    assert!(!state.has_voted("erin"));
    assert!(!withdraw_vote(&mut state, "nobody"));
}

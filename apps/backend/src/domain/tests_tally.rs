use crate::domain::faction::{Action, Faction};
use crate::domain::tally::{select_actions, ChosenAction};
use crate::domain::test_state_helpers::{unanimous, vote};

#[test]
fn faction_without_votes_defends() {
    let chosen = select_actions(&[]);
    for faction in Faction::ALL {
        assert_eq!(chosen[faction], ChosenAction::DEFAULT);
    }
}

#[test]
fn plurality_wins() {
    let votes = vec![
        vote("a", Faction::Fire, Action::Train, None),
        vote("b", Faction::Fire, Action::Attack, Some(Faction::Air)),
        vote("c", Faction::Fire, Action::Attack, Some(Faction::Air)),
    ];
    let chosen = select_actions(&votes)[Faction::Fire];
    assert_eq!(chosen.action, Action::Attack);
    assert_eq!(chosen.target, Some(Faction::Air));
    assert_eq!(chosen.votes, 2);
}

#[test]
fn tie_keeps_first_pair_to_appear() {
    // Attack->Earth x2 submitted before Defend x2.
    let votes = vec![
        vote("a", Faction::Fire, Action::Attack, Some(Faction::Earth)),
        vote("b", Faction::Fire, Action::Defend, None),
        vote("c", Faction::Fire, Action::Attack, Some(Faction::Earth)),
        vote("d", Faction::Fire, Action::Defend, None),
    ];
    let chosen = select_actions(&votes)[Faction::Fire];
    assert_eq!(chosen.action, Action::Attack);
    assert_eq!(chosen.target, Some(Faction::Earth));
}

#[test]
fn tie_order_follows_first_vote_not_last() {
    let votes = vec![
        vote("a", Faction::Water, Action::Train, None),
        vote("b", Faction::Water, Action::Defend, None),
        vote("c", Faction::Water, Action::Defend, None),
        vote("d", Faction::Water, Action::Train, None),
    ];
    assert_eq!(select_actions(&votes)[Faction::Water].action, Action::Train);
}

#[test]
fn attack_targets_are_counted_separately() {
    let votes = vec![
        vote("a", Faction::Earth, Action::Attack, Some(Faction::Fire)),
        vote("b", Faction::Earth, Action::Attack, Some(Faction::Water)),
        vote("c", Faction::Earth, Action::Attack, Some(Faction::Water)),
    ];
    let chosen = select_actions(&votes)[Faction::Earth];
    assert_eq!(chosen.target, Some(Faction::Water));
    assert_eq!(chosen.votes, 2);
}

#[test]
fn votes_only_count_for_their_own_faction() {
    let mut votes = unanimous(Faction::Air, Action::Train, None, 3);
    votes.extend(unanimous(Faction::Fire, Action::Attack, Some(Faction::Air), 1));
    let chosen = select_actions(&votes);

    assert_eq!(chosen[Faction::Air].action, Action::Train);
    assert_eq!(chosen[Faction::Air].votes, 3);
    assert!(chosen[Faction::Fire].attacks(Faction::Air));
    assert_eq!(chosen[Faction::Water], ChosenAction::DEFAULT);
}

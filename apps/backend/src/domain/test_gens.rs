// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::faction::{Action, Faction};
use crate::domain::state::Vote;

pub fn faction() -> impl Strategy<Value = Faction> {
    prop_oneof![
        Just(Faction::Fire),
        Just(Faction::Water),
        Just(Faction::Earth),
        Just(Faction::Air),
    ]
}

pub fn action() -> impl Strategy<Value = Action> {
    prop_oneof![Just(Action::Attack), Just(Action::Defend), Just(Action::Train)]
}

/// A vote as `cast_vote` would record it: attacks always carry a rival
/// target, other actions never carry one.
pub fn vote() -> impl Strategy<Value = Vote> {
    (faction(), action(), 0usize..3, 0u32..1000).prop_map(|(faction, action, rival, id)| {
        let target = match action {
            Action::Attack => faction.others().nth(rival),
            Action::Defend | Action::Train => None,
        };
        Vote {
            username: format!("player-{id}"),
            faction,
            action,
            target,
        }
    })
}

pub fn ledger() -> impl Strategy<Value = Vec<Vote>> {
    prop::collection::vec(vote(), 0..40)
}

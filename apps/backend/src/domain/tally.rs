//! Per-faction plurality vote.

use crate::domain::faction::{Action, Faction, FactionTable};
use crate::domain::state::Vote;

/// The action a faction executes this turn and how many votes carried it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenAction {
    pub action: Action,
    pub target: Option<Faction>,
    pub votes: u32,
}

impl ChosenAction {
    /// Fallback for a faction nobody voted for.
    pub const DEFAULT: Self = Self {
        action: Action::Defend,
        target: None,
        votes: 0,
    };

    /// Whether this choice is an attack aimed at `victim`.
    #[inline]
    pub fn attacks(&self, victim: Faction) -> bool {
        self.action == Action::Attack && self.target == Some(victim)
    }
}

impl Default for ChosenAction {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Select every faction's action from the ledger.
///
/// Votes are grouped by `(action, target)`. The group with the strictly
/// greatest count wins; on a tie the group whose first vote appears earliest
/// in the ledger keeps the win. A faction without votes defends.
pub fn select_actions(votes: &[Vote]) -> FactionTable<ChosenAction> {
    FactionTable::from_fn(|faction| select_for(faction, votes))
}

fn select_for(faction: Faction, votes: &[Vote]) -> ChosenAction {
    // Groups kept in first-seen order.
    let mut groups: Vec<((Action, Option<Faction>), u32)> = Vec::new();
    for vote in votes.iter().filter(|v| v.faction == faction) {
        let key = (vote.action, vote.target);
        match groups.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => groups.push((key, 1)),
        }
    }

    let mut chosen = ChosenAction::DEFAULT;
    for ((action, target), count) in groups {
        if count > chosen.votes {
            chosen = ChosenAction {
                action,
                target,
                votes: count,
            };
        }
    }
    chosen
}

use crate::domain::faction::{Faction, FactionTable};
use crate::domain::state::FactionStats;

/// Leaderboard order: score descending, then hp descending. Factions that
/// tie on both keep canonical order.
pub fn rank(factions: &FactionTable<FactionStats>) -> Vec<(Faction, FactionStats)> {
    let mut ranked: Vec<(Faction, FactionStats)> =
        factions.iter().map(|(f, stats)| (f, *stats)).collect();
    ranked.sort_by(|(_, a), (_, b)| b.score.cmp(&a.score).then(b.hp.cmp(&a.hp)));
    ranked
}

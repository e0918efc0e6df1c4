pub const FACTIONS: usize = 4;

/// Turn counter value at which the game ends.
pub const MAX_ROUNDS: u32 = 50;

pub const INITIAL_HP: u32 = 100;
pub const INITIAL_SCORE: u32 = 0;
pub const FIRST_TURN: u32 = 1;

/// Score gained by a faction that trains, whether or not it is attacked.
pub const TRAIN_SCORE_GAIN: u32 = 10;

/// Damage dealt to a target that defended.
pub const DEFENDED_DAMAGE: u32 = 5;
/// Damage each side takes when two factions attack each other.
pub const MUTUAL_DAMAGE: u32 = 15;
/// Damage dealt to a target that trained or attacked a third faction.
pub const FULL_DAMAGE: u32 = 20;

/// Whether a game at `current_turn` has reached the round cap.
#[inline]
pub fn round_cap_reached(current_turn: u32, max_rounds: u32) -> bool {
    current_turn >= max_rounds
}

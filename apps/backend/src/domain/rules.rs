use crate::domain::pick_order::Turn;
use crate::domain::state::Player;

pub const PLAYERS: usize = 2;
pub const PICKS_PER_PLAYER: usize = 5;
pub const BANS_PER_PLAYER: usize = 1;
pub const TOTAL_PICKS: usize = PICKS_PER_PLAYER * PLAYERS;
pub const TURN_COUNT: usize = 6;
/// Monsters each side fields after bans.
pub const MONSTERS_IN_COMBAT: usize = PICKS_PER_PLAYER - BANS_PER_PLAYER;

// Snake order relative to whoever picks first: 1, 2, 2, 2, 2, 1.
pub const PICK_ORDER: [Turn; TURN_COUNT] = [
    Turn::new(Player::A, 1),
    Turn::new(Player::B, 2),
    Turn::new(Player::A, 2),
    Turn::new(Player::B, 2),
    Turn::new(Player::A, 2),
    Turn::new(Player::B, 1),
];

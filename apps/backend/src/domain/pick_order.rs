//! The fixed snake table and its remapping for the actual first player.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{PICKS_PER_PLAYER, PICK_ORDER, TURN_COUNT};
use crate::domain::state::Player;

/// One slot in the pick-order table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    pub player: Player,
    pub picks: usize,
}

impl Turn {
    pub const fn new(player: Player, picks: usize) -> Self {
        Self { player, picks }
    }
}

/// Turn sequence for a draft started by `first_player`.
///
/// The canonical table is written relative to A going first; when B goes
/// first every label is swapped. Total and side-effect free.
pub fn turns_for(first_player: Player) -> [Turn; TURN_COUNT] {
    PICK_ORDER.map(|turn| match first_player {
        Player::A => turn,
        Player::B => Turn::new(turn.player.opponent(), turn.picks),
    })
}

/// Picks `player` makes across all of `turns`.
pub fn picks_for_player(turns: &[Turn], player: Player) -> usize {
    turns
        .iter()
        .filter(|t| t.player == player)
        .map(|t| t.picks)
        .sum()
}

/// A pick order is valid when it spans exactly six turns and gives each
/// side five picks.
pub fn is_valid_pick_order(turns: &[Turn]) -> bool {
    turns.len() == TURN_COUNT
        && picks_for_player(turns, Player::A) == PICKS_PER_PLAYER
        && picks_for_player(turns, Player::B) == PICKS_PER_PLAYER
}

/// Per-player pick counts after `total` picks have been taken in order.
///
/// Used to check that a snapshot's counts are reachable under the table.
pub fn expected_counts_after(first_player: Player, total: usize) -> (usize, usize) {
    let mut left = total;
    let (mut a, mut b) = (0, 0);
    for turn in turns_for(first_player) {
        let taken = turn.picks.min(left);
        left -= taken;
        match turn.player {
            Player::A => a += taken,
            Player::B => b += taken,
        }
        if left == 0 {
            break;
        }
    }
    (a, b)
}

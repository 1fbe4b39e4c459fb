//! Turn resolution: who acts now and how many picks remain.
//!
//! Every layer (interactive session, stateless request handler, CLI) asks
//! this module instead of re-walking the table itself, so all of them see
//! the same answer for the same pick counts.

use crate::domain::pick_order::turns_for;
use crate::domain::rules::PICKS_PER_PLAYER;
use crate::domain::state::{DraftState, Player};

/// The active turn for a given set of pick totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentTurnInfo {
    /// 1-based index into the pick-order table.
    pub turn: u8,
    pub current_player: Player,
    /// Picks left in this turn.
    pub picks_remaining: usize,
    /// Picks left for `current_player` over the whole draft.
    pub picks_remaining_for_player: usize,
    pub picks_in_turn: usize,
    pub picks_done_in_turn: usize,
}

/// Resolve the active turn from explicit pick totals.
///
/// The active turn is the first whose cumulative pick count strictly
/// exceeds `picks_by_a + picks_by_b`; landing exactly on a boundary
/// therefore moves on to the next turn. Returns `None` once all ten picks
/// are made.
///
/// `picks_remaining_for_player` comes from the player's own running total,
/// not from the turn-local count.
pub fn resolve(first_player: Player, picks_by_a: usize, picks_by_b: usize) -> Option<CurrentTurnInfo> {
    let total = picks_by_a + picks_by_b;
    let mut cumulative = 0usize;

    for (idx, turn) in turns_for(first_player).iter().enumerate() {
        let before = cumulative;
        cumulative += turn.picks;
        if total < cumulative {
            let done = total - before;
            let own = match turn.player {
                Player::A => picks_by_a,
                Player::B => picks_by_b,
            };
            return Some(CurrentTurnInfo {
                turn: (idx + 1) as u8,
                current_player: turn.player,
                picks_remaining: turn.picks - done,
                picks_remaining_for_player: PICKS_PER_PLAYER.saturating_sub(own),
                picks_in_turn: turn.picks,
                picks_done_in_turn: done,
            });
        }
    }

    None
}

/// [`resolve`] with totals taken from `state`.
pub fn resolve_for(state: &DraftState) -> Option<CurrentTurnInfo> {
    resolve(
        state.first_player(),
        state.picks(Player::A).len(),
        state.picks(Player::B).len(),
    )
}

/// Player expected to pick next.
///
/// Before any pick the first player is the only legal actor, independently
/// of the resolver. `None` once picking is over.
pub fn expected_picker(state: &DraftState) -> Option<Player> {
    match resolve_for(state) {
        Some(info) => Some(info.current_player),
        None if state.total_picks() == 0 => Some(state.first_player()),
        None => None,
    }
}

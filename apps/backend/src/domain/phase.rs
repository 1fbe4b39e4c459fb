//! Coarse draft phases and the transitions between them.

use serde::{Deserialize, Serialize};

use crate::domain::rules::{BANS_PER_PLAYER, PICKS_PER_PLAYER};
use crate::domain::state::{DraftState, Player};
use crate::domain::turns::resolve_for;

/// Overall draft progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Players pick in snake order.
    Picking,
    /// Each side bans one opposing pick; order between sides does not matter.
    Banning,
    /// Both bans are in. Terminal.
    Completed,
}

impl Phase {
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Picking => "picking",
            Phase::Banning => "banning",
            Phase::Completed => "completed",
        }
    }
}

/// Derive the phase from the four sequence lengths.
///
/// Pure: the same counts always give the same phase, and there is no way
/// to move backwards short of starting a new draft.
pub fn derive_phase(a_picks: usize, b_picks: usize, a_bans: usize, b_bans: usize) -> Phase {
    if a_picks < PICKS_PER_PLAYER || b_picks < PICKS_PER_PLAYER {
        Phase::Picking
    } else if a_bans >= BANS_PER_PLAYER && b_bans >= BANS_PER_PLAYER {
        Phase::Completed
    } else {
        Phase::Banning
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftTransition {
    /// Edge-triggered: the picking turn passed to a specific player.
    TurnBecame { player: Player },

    /// Edge-triggered: both teams are full.
    BanningStarted,

    /// Edge-triggered: both bans are in.
    DraftCompleted,
}

/// Derive transitions from before/after states.
pub fn derive_transitions(before: &DraftState, after: &DraftState) -> Vec<DraftTransition> {
    let mut transitions = Vec::new();

    // 1. Turn change (picking only)
    let turn_before = resolve_for(before).map(|t| t.current_player);
    let turn_after = resolve_for(after).map(|t| t.current_player);
    if let Some(player) = turn_after {
        if turn_before != Some(player) {
            transitions.push(DraftTransition::TurnBecame { player });
        }
    }

    let (phase_before, phase_after) = (before.phase(), after.phase());

    // 2. Picking -> Banning
    if phase_before == Phase::Picking && phase_after == Phase::Banning {
        transitions.push(DraftTransition::BanningStarted);
    }

    // 3. !Completed -> Completed
    if phase_before != Phase::Completed && phase_after == Phase::Completed {
        transitions.push(DraftTransition::DraftCompleted);
    }

    transitions
}

//! Boundary shapes for the draft: the input snapshot a stateless caller
//! sends, and the views returned to it.
//!
//! A snapshot is untrusted. [`DraftSnapshot::into_state`] checks every
//! draft invariant before the engine ever sees the data; any phase or turn
//! fields a client sends alongside the sequences are ignored and recomputed.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::phase::Phase;
use crate::domain::pick_order::expected_counts_after;
use crate::domain::rules::{BANS_PER_PLAYER, PICKS_PER_PLAYER};
use crate::domain::state::{DraftState, MonsterId, Player};
use crate::domain::turns::CurrentTurnInfo;
use crate::errors::domain::{DomainError, ValidationKind};

/// Field-level draft input, as sent by request handlers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSnapshot {
    pub first_player: Player,
    #[serde(default)]
    pub player_a_picks: Vec<MonsterId>,
    #[serde(default)]
    pub player_b_picks: Vec<MonsterId>,
    #[serde(default)]
    pub player_a_bans: Vec<MonsterId>,
    #[serde(default)]
    pub player_b_bans: Vec<MonsterId>,
}

impl DraftSnapshot {
    pub fn new(first_player: Player) -> Self {
        Self {
            first_player,
            player_a_picks: Vec::new(),
            player_b_picks: Vec::new(),
            player_a_bans: Vec::new(),
            player_b_bans: Vec::new(),
        }
    }

    /// Every invariant the snapshot violates, in a stable order.
    ///
    /// Empty means the snapshot describes a reachable draft.
    pub fn consistency_errors(&self) -> Vec<String> {
        let mut errors = Vec::new();
        let (a_picks, b_picks) = (&self.player_a_picks, &self.player_b_picks);
        let (a_bans, b_bans) = (&self.player_a_bans, &self.player_b_bans);

        if a_picks.len() > PICKS_PER_PLAYER {
            errors.push(format!("player A has {} picks (max {PICKS_PER_PLAYER})", a_picks.len()));
        }
        if b_picks.len() > PICKS_PER_PLAYER {
            errors.push(format!("player B has {} picks (max {PICKS_PER_PLAYER})", b_picks.len()));
        }
        if a_bans.len() > BANS_PER_PLAYER {
            errors.push(format!("player A has {} bans (max {BANS_PER_PLAYER})", a_bans.len()));
        }
        if b_bans.len() > BANS_PER_PLAYER {
            errors.push(format!("player B has {} bans (max {BANS_PER_PLAYER})", b_bans.len()));
        }

        let mut seen = HashSet::new();
        for id in a_picks.iter().chain(b_picks.iter()) {
            if !seen.insert(*id) {
                errors.push(format!("monster {id} is picked more than once"));
            }
        }

        if let Some(bad) = a_bans.iter().find(|id| !b_picks.contains(id)) {
            errors.push(format!("player A banned {bad}, which is not in player B's picks"));
        }
        if let Some(bad) = b_bans.iter().find(|id| !a_picks.contains(id)) {
            errors.push(format!("player B banned {bad}, which is not in player A's picks"));
        }

        let picks_full = a_picks.len() == PICKS_PER_PLAYER && b_picks.len() == PICKS_PER_PLAYER;
        if !picks_full && (!a_bans.is_empty() || !b_bans.is_empty()) {
            errors.push("bans recorded before picking is complete".to_string());
        }

        let total = a_picks.len() + b_picks.len();
        if a_picks.len() <= PICKS_PER_PLAYER && b_picks.len() <= PICKS_PER_PLAYER {
            let expected = expected_counts_after(self.first_player, total);
            if (a_picks.len(), b_picks.len()) != expected {
                errors.push(format!(
                    "pick counts A={} B={} are not reachable when {} picks first (expected A={} B={})",
                    a_picks.len(),
                    b_picks.len(),
                    self.first_player,
                    expected.0,
                    expected.1
                ));
            }
        }

        errors
    }

    /// Validate and convert into engine state.
    pub fn into_state(self) -> Result<DraftState, DomainError> {
        let errors = self.consistency_errors();
        if !errors.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InconsistentDraft,
                errors.join("; "),
            ));
        }
        Ok(DraftState::from_parts(
            self.first_player,
            self.player_a_picks,
            self.player_b_picks,
            self.player_a_bans,
            self.player_b_bans,
        ))
    }
}

impl From<&DraftState> for DraftSnapshot {
    fn from(state: &DraftState) -> Self {
        Self {
            first_player: state.first_player(),
            player_a_picks: state.picks(Player::A).to_vec(),
            player_b_picks: state.picks(Player::B).to_vec(),
            player_a_bans: state.bans(Player::A).to_vec(),
            player_b_bans: state.bans(Player::B).to_vec(),
        }
    }
}

/// Turn resolver output as seen by callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnInfoView {
    pub turn: u8,
    pub current_player: Player,
    pub picks_remaining: usize,
    pub picks_remaining_for_player: usize,
}

impl From<CurrentTurnInfo> for TurnInfoView {
    fn from(info: CurrentTurnInfo) -> Self {
        Self {
            turn: info.turn,
            current_player: info.current_player,
            picks_remaining: info.picks_remaining,
            picks_remaining_for_player: info.picks_remaining_for_player,
        }
    }
}

/// Summary of a draft: the sequences plus everything derived from them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftView {
    #[serde(flatten)]
    pub draft: DraftSnapshot,
    pub phase: Phase,
    pub turn: Option<TurnInfoView>,
    pub final_team_a: Vec<MonsterId>,
    pub final_team_b: Vec<MonsterId>,
}

/// Entry point: produce a view of the current draft state.
pub fn view(state: &DraftState) -> DraftView {
    DraftView {
        draft: DraftSnapshot::from(state),
        phase: state.phase(),
        turn: state.turn_info().map(TurnInfoView::from),
        final_team_a: state.final_team(Player::A),
        final_team_b: state.final_team(Player::B),
    }
}

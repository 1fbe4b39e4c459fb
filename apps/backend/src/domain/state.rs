use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::phase::{derive_phase, Phase};
use crate::domain::turns::{resolve_for, CurrentTurnInfo};

/// One of the two drafting sides.
///
/// `A` is the operator of the tool, `B` the opponent being modelled. The
/// labels carry no ownership semantics beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Player::A => "A",
            Player::B => "B",
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Opaque monster identifier. The engine only compares ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterId(pub u32);

impl From<u32> for MonsterId {
    fn from(id: u32) -> Self {
        MonsterId(id)
    }
}

impl Display for MonsterId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Entire draft container, sufficient for pure domain operations.
///
/// Fields are private: the only ways to grow a state are the checked
/// transitions in [`crate::domain::validation`] and the validated
/// conversion from [`crate::domain::snapshot::DraftSnapshot`]. Phase is
/// never stored; [`DraftState::phase`] derives it on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftState {
    first_player: Player,
    player_a_picks: Vec<MonsterId>,
    player_b_picks: Vec<MonsterId>,
    player_a_bans: Vec<MonsterId>,
    player_b_bans: Vec<MonsterId>,
}

impl DraftState {
    /// Fresh draft. The first player is chosen once, before any pick.
    pub fn new(first_player: Player) -> Self {
        Self {
            first_player,
            player_a_picks: Vec::with_capacity(5),
            player_b_picks: Vec::with_capacity(5),
            player_a_bans: Vec::with_capacity(1),
            player_b_bans: Vec::with_capacity(1),
        }
    }

    /// Assemble a state from already-validated sequences.
    pub(crate) fn from_parts(
        first_player: Player,
        player_a_picks: Vec<MonsterId>,
        player_b_picks: Vec<MonsterId>,
        player_a_bans: Vec<MonsterId>,
        player_b_bans: Vec<MonsterId>,
    ) -> Self {
        Self {
            first_player,
            player_a_picks,
            player_b_picks,
            player_a_bans,
            player_b_bans,
        }
    }

    #[inline]
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn picks(&self, player: Player) -> &[MonsterId] {
        match player {
            Player::A => &self.player_a_picks,
            Player::B => &self.player_b_picks,
        }
    }

    pub fn bans(&self, player: Player) -> &[MonsterId] {
        match player {
            Player::A => &self.player_a_bans,
            Player::B => &self.player_b_bans,
        }
    }

    /// The ban placed by `player`, if any.
    pub fn ban(&self, player: Player) -> Option<MonsterId> {
        self.bans(player).first().copied()
    }

    pub fn total_picks(&self) -> usize {
        self.player_a_picks.len() + self.player_b_picks.len()
    }

    /// True if either side already picked `monster`.
    pub fn is_picked(&self, monster: MonsterId) -> bool {
        self.player_a_picks.contains(&monster) || self.player_b_picks.contains(&monster)
    }

    pub fn phase(&self) -> Phase {
        derive_phase(
            self.player_a_picks.len(),
            self.player_b_picks.len(),
            self.player_a_bans.len(),
            self.player_b_bans.len(),
        )
    }

    pub fn is_completed(&self) -> bool {
        self.phase() == Phase::Completed
    }

    /// Current turn, or `None` once every pick has been made.
    pub fn turn_info(&self) -> Option<CurrentTurnInfo> {
        resolve_for(self)
    }

    /// Monsters that actually enter combat for `player`: their picks minus
    /// the one the opponent banned.
    pub fn final_team(&self, player: Player) -> Vec<MonsterId> {
        let banned = self.ban(player.opponent());
        self.picks(player)
            .iter()
            .copied()
            .filter(|m| Some(*m) != banned)
            .collect()
    }

    pub(crate) fn push_pick(&mut self, player: Player, monster: MonsterId) {
        match player {
            Player::A => self.player_a_picks.push(monster),
            Player::B => self.player_b_picks.push(monster),
        }
    }

    pub(crate) fn push_ban(&mut self, player: Player, monster: MonsterId) {
        match player {
            Player::A => self.player_a_bans.push(monster),
            Player::B => self.player_b_bans.push(monster),
        }
    }
}

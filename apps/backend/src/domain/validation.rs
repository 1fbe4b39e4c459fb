//! Pick/ban legality and the checked transitions that apply them.
//!
//! Rejections are ordinary values: every input produces either `Ok` or a
//! named [`RejectReason`]. State is only touched after validation passes,
//! and the `apply_*` functions return a new state rather than mutating the
//! caller's.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use crate::domain::phase::Phase;
use crate::domain::pools::MonsterCollection;
use crate::domain::rules::{BANS_PER_PLAYER, PICKS_PER_PLAYER};
use crate::domain::state::{DraftState, MonsterId, Player};
use crate::domain::turns::resolve_for;

/// Why an action was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RejectReason {
    WrongPhase,
    WrongTurn,
    TurnExhausted,
    Duplicate,
    NotOwned,
    Full,
    AlreadyBanned,
    InvalidTarget,
}

impl RejectReason {
    pub const ALL: [RejectReason; 8] = [
        RejectReason::WrongPhase,
        RejectReason::WrongTurn,
        RejectReason::TurnExhausted,
        RejectReason::Duplicate,
        RejectReason::NotOwned,
        RejectReason::Full,
        RejectReason::AlreadyBanned,
        RejectReason::InvalidTarget,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            RejectReason::WrongPhase => "WRONG_PHASE",
            RejectReason::WrongTurn => "WRONG_TURN",
            RejectReason::TurnExhausted => "TURN_EXHAUSTED",
            RejectReason::Duplicate => "DUPLICATE",
            RejectReason::NotOwned => "NOT_OWNED",
            RejectReason::Full => "FULL",
            RejectReason::AlreadyBanned => "ALREADY_BANNED",
            RejectReason::InvalidTarget => "INVALID_TARGET",
        }
    }

    /// User-facing explanation.
    pub const fn message(&self) -> &'static str {
        match self {
            RejectReason::WrongPhase => "This action is not allowed in the current phase",
            RejectReason::WrongTurn => "It is not this player's turn",
            RejectReason::TurnExhausted => "No picks remain in the current turn",
            RejectReason::Duplicate => "This monster has already been picked",
            RejectReason::NotOwned => "This monster is not in your collection",
            RejectReason::Full => "This player already has a full team",
            RejectReason::AlreadyBanned => "This player has already banned",
            RejectReason::InvalidTarget => "Bans must target one of the opponent's picks",
        }
    }
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Error for RejectReason {}

/// A proposed draft action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Action {
    Pick {
        player: Player,
        #[serde(rename = "monsterId")]
        monster: MonsterId,
    },
    Ban {
        player: Player,
        #[serde(rename = "monsterId")]
        monster: MonsterId,
    },
}

impl Action {
    pub fn player(&self) -> Player {
        match self {
            Action::Pick { player, .. } | Action::Ban { player, .. } => *player,
        }
    }

    pub fn monster(&self) -> MonsterId {
        match self {
            Action::Pick { monster, .. } | Action::Ban { monster, .. } => *monster,
        }
    }
}

/// Check a pick without applying it.
///
/// `collection` restricts player A's pool to the operator's monsters when
/// supplied; player B is never restricted.
pub fn validate_pick(
    state: &DraftState,
    player: Player,
    monster: MonsterId,
    collection: Option<&dyn MonsterCollection>,
) -> Result<(), RejectReason> {
    if state.phase() != Phase::Picking {
        return Err(RejectReason::WrongPhase);
    }

    match resolve_for(state) {
        Some(info) => {
            if info.current_player != player {
                return Err(RejectReason::WrongTurn);
            }
            if info.picks_remaining == 0 {
                return Err(RejectReason::TurnExhausted);
            }
        }
        // Every turn in the table is used up.
        None => return Err(RejectReason::TurnExhausted),
    }

    if state.is_picked(monster) {
        return Err(RejectReason::Duplicate);
    }

    if player == Player::A {
        if let Some(collection) = collection {
            if !collection.owns(monster) {
                return Err(RejectReason::NotOwned);
            }
        }
    }

    if state.picks(player).len() >= PICKS_PER_PLAYER {
        return Err(RejectReason::Full);
    }

    Ok(())
}

/// Check a ban without applying it.
///
/// The target check comes first: banning anything but an opposing pick is
/// refused whatever the phase or ban count.
pub fn validate_ban(state: &DraftState, player: Player, monster: MonsterId) -> Result<(), RejectReason> {
    if !state.picks(player.opponent()).contains(&monster) {
        return Err(RejectReason::InvalidTarget);
    }

    if state.phase() != Phase::Banning {
        return Err(RejectReason::WrongPhase);
    }

    if state.bans(player).len() >= BANS_PER_PLAYER {
        return Err(RejectReason::AlreadyBanned);
    }

    Ok(())
}

/// Validate then append a pick, returning the new state.
pub fn apply_pick(
    state: &DraftState,
    player: Player,
    monster: MonsterId,
    collection: Option<&dyn MonsterCollection>,
) -> Result<DraftState, RejectReason> {
    validate_pick(state, player, monster, collection)?;
    let mut next = state.clone();
    next.push_pick(player, monster);
    Ok(next)
}

/// Validate then record a ban, returning the new state.
pub fn apply_ban(state: &DraftState, player: Player, monster: MonsterId) -> Result<DraftState, RejectReason> {
    validate_ban(state, player, monster)?;
    let mut next = state.clone();
    next.push_ban(player, monster);
    Ok(next)
}

pub fn validate_action(
    state: &DraftState,
    action: Action,
    collection: Option<&dyn MonsterCollection>,
) -> Result<(), RejectReason> {
    match action {
        Action::Pick { player, monster } => validate_pick(state, player, monster, collection),
        Action::Ban { player, monster } => validate_ban(state, player, monster),
    }
}

pub fn apply_action(
    state: &DraftState,
    action: Action,
    collection: Option<&dyn MonsterCollection>,
) -> Result<DraftState, RejectReason> {
    match action {
        Action::Pick { player, monster } => apply_pick(state, player, monster, collection),
        Action::Ban { player, monster } => apply_ban(state, player, monster),
    }
}

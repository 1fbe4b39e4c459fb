//! Legal pick pools and the collection membership hook.

use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use serde::{Deserialize, Serialize};

use crate::domain::phase::Phase;
use crate::domain::rules::BANS_PER_PLAYER;
use crate::domain::state::{DraftState, MonsterId, Player};

/// Membership check for player A's legal pool.
///
/// The operator's collection lives outside the engine; anything that can
/// answer "is this monster owned" plugs in here.
pub trait MonsterCollection {
    fn owns(&self, monster: MonsterId) -> bool;
}

impl<S: BuildHasher> MonsterCollection for HashSet<MonsterId, S> {
    fn owns(&self, monster: MonsterId) -> bool {
        self.contains(&monster)
    }
}

impl MonsterCollection for BTreeSet<MonsterId> {
    fn owns(&self, monster: MonsterId) -> bool {
        self.contains(&monster)
    }
}

/// The operator's collection as a plain id set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnedMonsters(BTreeSet<MonsterId>);

impl OwnedMonsters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, monster: MonsterId) -> bool {
        self.0.insert(monster)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = MonsterId> + '_ {
        self.0.iter().copied()
    }
}

impl MonsterCollection for OwnedMonsters {
    fn owns(&self, monster: MonsterId) -> bool {
        self.0.contains(&monster)
    }
}

impl FromIterator<MonsterId> for OwnedMonsters {
    fn from_iter<I: IntoIterator<Item = MonsterId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Monsters `player` could still pick, sorted and deduplicated.
///
/// `candidates` is every monster the caller knows about. For player A the
/// collection, when given, narrows that further; player B may pick any
/// unpicked candidate.
pub fn available_for(
    state: &DraftState,
    player: Player,
    candidates: impl IntoIterator<Item = MonsterId>,
    collection: Option<&dyn MonsterCollection>,
) -> Vec<MonsterId> {
    let restrict = match player {
        Player::A => collection,
        Player::B => None,
    };
    candidates
        .into_iter()
        .filter(|m| !state.is_picked(*m))
        .filter(|m| restrict.map_or(true, |c| c.owns(*m)))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Opposing picks `player` may still ban; empty outside banning or once
/// the player has banned.
pub fn ban_targets(state: &DraftState, player: Player) -> Vec<MonsterId> {
    if state.phase() != Phase::Banning || state.bans(player).len() >= BANS_PER_PLAYER {
        return Vec::new();
    }
    state.picks(player.opponent()).to_vec()
}

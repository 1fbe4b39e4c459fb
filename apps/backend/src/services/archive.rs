//! Completed-draft records and the archive they are handed to.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::domain::{DraftState, MonsterId, Phase, Player};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::services::recommendation::Recommendation;

/// A recommendation as it was shown during the draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedRecommendation {
    pub text: String,
    pub proposed_monster_ids: Vec<MonsterId>,
    pub phase: Phase,
    pub turn: Option<u8>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl RecordedRecommendation {
    /// Stamp a recommendation with the draft position it was given at.
    pub fn capture(recommendation: &Recommendation, state: &DraftState) -> Self {
        Self {
            text: recommendation.text.clone(),
            proposed_monster_ids: recommendation.proposed_monster_ids.clone(),
            phase: state.phase(),
            turn: state.turn_info().map(|t| t.turn),
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Archived outcome of one finished draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    pub id: Ulid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub first_player: Player,
    pub player_a_picks: Vec<MonsterId>,
    pub player_b_picks: Vec<MonsterId>,
    pub player_a_bans: Vec<MonsterId>,
    pub player_b_bans: Vec<MonsterId>,
    pub final_team_a: Vec<MonsterId>,
    pub final_team_b: Vec<MonsterId>,
    pub recommendations: Vec<RecordedRecommendation>,
}

impl DraftRecord {
    /// Build a record from a completed draft.
    ///
    /// Anything short of [`Phase::Completed`] is refused.
    pub fn from_completed(
        state: &DraftState,
        recommendations: Vec<RecordedRecommendation>,
    ) -> Result<Self, DomainError> {
        if !state.is_completed() {
            return Err(DomainError::validation(
                ValidationKind::DraftNotCompleted,
                format!("cannot archive a draft in phase {}", state.phase().as_str()),
            ));
        }

        Ok(Self {
            id: Ulid::new(),
            created_at: OffsetDateTime::now_utc(),
            first_player: state.first_player(),
            player_a_picks: state.picks(Player::A).to_vec(),
            player_b_picks: state.picks(Player::B).to_vec(),
            player_a_bans: state.bans(Player::A).to_vec(),
            player_b_bans: state.bans(Player::B).to_vec(),
            final_team_a: state.final_team(Player::A),
            final_team_b: state.final_team(Player::B),
            recommendations,
        })
    }
}

/// Sink for finished drafts.
pub trait DraftArchive: Send + Sync {
    fn store(&self, record: DraftRecord) -> Result<(), DomainError>;
}

/// Process-local archive.
#[derive(Debug, Default)]
pub struct InMemoryArchive {
    records: Mutex<Vec<DraftRecord>>,
}

impl InMemoryArchive {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Snapshot of everything stored so far, oldest first.
    pub fn records(&self) -> Vec<DraftRecord> {
        self.records.lock().clone()
    }

    pub fn find(&self, id: Ulid) -> Option<DraftRecord> {
        self.records.lock().iter().find(|r| r.id == id).cloned()
    }
}

impl DraftArchive for InMemoryArchive {
    fn store(&self, record: DraftRecord) -> Result<(), DomainError> {
        let mut records = self.records.lock();
        if records.iter().any(|r| r.id == record.id) {
            return Err(DomainError::infra(
                InfraErrorKind::Archive,
                format!("draft record {} already archived", record.id),
            ));
        }
        records.push(record);
        Ok(())
    }
}

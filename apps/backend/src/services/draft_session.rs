//! Interactive draft session: one state, one writer, plus collaborators.
//!
//! Every action goes through the same domain functions the stateless
//! handler uses; the session adds logging, transition reporting,
//! recommendation history and archiving on completion.

use std::sync::Arc;

use tracing::{debug, info, warn};
use ulid::Ulid;

use crate::config::DraftConfig;
use crate::domain::{
    apply_ban, apply_pick, derive_transitions, view, CurrentTurnInfo, DraftState, DraftTransition,
    DraftView, MonsterCollection, MonsterId, OwnedMonsters, Phase, Player, RejectReason,
};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::archive::{DraftArchive, DraftRecord, RecordedRecommendation};
use crate::services::recommendation::{
    legal_proposals, recommendation_request, Recommendation, RecommendationService,
};

/// What changed after an accepted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUpdate {
    pub transitions: Vec<DraftTransition>,
    pub phase: Phase,
    pub turn: Option<CurrentTurnInfo>,
    /// Set when this action completed the draft and it was archived.
    pub archived: Option<Ulid>,
}

pub struct DraftSession {
    id: Ulid,
    state: DraftState,
    config: DraftConfig,
    known_monsters: Vec<MonsterId>,
    collection: Option<OwnedMonsters>,
    recommender: Option<Arc<dyn RecommendationService>>,
    archive: Option<Arc<dyn DraftArchive>>,
    recommendations: Vec<RecordedRecommendation>,
}

impl DraftSession {
    pub fn new(first_player: Player, config: DraftConfig) -> Self {
        let id = Ulid::new();
        info!(draft_id = %id, first_player = %first_player, "Draft started");
        Self {
            id,
            state: DraftState::new(first_player),
            config,
            known_monsters: Vec::new(),
            collection: None,
            recommender: None,
            archive: None,
            recommendations: Vec::new(),
        }
    }

    /// Every monster the caller knows about; bounds recommendation pools.
    pub fn with_known_monsters(mut self, monsters: impl IntoIterator<Item = MonsterId>) -> Self {
        self.known_monsters = monsters.into_iter().collect();
        self
    }

    /// The operator's collection, restricting player A when enforcement is on.
    pub fn with_collection(mut self, collection: OwnedMonsters) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn with_recommender(mut self, recommender: Arc<dyn RecommendationService>) -> Self {
        self.recommender = Some(recommender);
        self
    }

    pub fn with_archive(mut self, archive: Arc<dyn DraftArchive>) -> Self {
        self.archive = Some(archive);
        self
    }

    pub fn id(&self) -> Ulid {
        self.id
    }

    pub fn state(&self) -> &DraftState {
        &self.state
    }

    pub fn view(&self) -> DraftView {
        view(&self.state)
    }

    pub fn recommendations(&self) -> &[RecordedRecommendation] {
        &self.recommendations
    }

    /// Drop the current draft and start over.
    pub fn restart(&mut self, first_player: Player) {
        info!(
            draft_id = %self.id,
            phase = self.state.phase().as_str(),
            "Draft discarded"
        );
        self.id = Ulid::new();
        self.state = DraftState::new(first_player);
        self.recommendations.clear();
        info!(draft_id = %self.id, first_player = %first_player, "Draft started");
    }

    pub fn submit_pick(&mut self, player: Player, monster: MonsterId) -> Result<SessionUpdate, AppError> {
        let collection = self.active_collection();
        let next = apply_pick(&self.state, player, monster, collection)
            .map_err(|reason| self.rejected("pick", player, monster, reason))?;
        info!(draft_id = %self.id, player = %player, monster = %monster, "Pick accepted");
        self.advance(next)
    }

    pub fn submit_ban(&mut self, player: Player, monster: MonsterId) -> Result<SessionUpdate, AppError> {
        let next = apply_ban(&self.state, player, monster)
            .map_err(|reason| self.rejected("ban", player, monster, reason))?;
        info!(draft_id = %self.id, player = %player, monster = %monster, "Ban accepted");
        self.advance(next)
    }

    /// Ask the configured service for advice to player A.
    ///
    /// Proposals outside the legal pool are dropped; the result is kept in
    /// the session history and ends up in the archived record.
    pub fn recommend(&mut self) -> Result<Recommendation, AppError> {
        let Some(recommender) = self.recommender.clone() else {
            return Err(AppError::upstream(
                ErrorCode::RecommendationFailed,
                "no recommendation service configured".to_string(),
            ));
        };

        let request = recommendation_request(
            &self.state,
            &self.known_monsters,
            self.active_collection(),
            &self.config,
        )?;
        let recommendation = recommender.recommend(&request).map_err(|e| {
            warn!(draft_id = %self.id, error = %e, "Recommendation service failed");
            AppError::from(e)
        })?;
        let recommendation = legal_proposals(recommendation, &request);

        debug!(
            draft_id = %self.id,
            phase = request.phase.as_str(),
            proposals = recommendation.proposed_monster_ids.len(),
            "Recommendation produced"
        );
        self.recommendations
            .push(RecordedRecommendation::capture(&recommendation, &self.state));
        Ok(recommendation)
    }

    fn active_collection(&self) -> Option<&dyn MonsterCollection> {
        if !self.config.enforce_collection {
            return None;
        }
        self.collection.as_ref().map(|c| c as &dyn MonsterCollection)
    }

    fn rejected(&self, action: &str, player: Player, monster: MonsterId, reason: RejectReason) -> AppError {
        debug!(
            draft_id = %self.id,
            action,
            player = %player,
            monster = %monster,
            reason = reason.as_str(),
            "Action rejected"
        );
        AppError::rejected(reason)
    }

    /// Commit an accepted state and report the edges it crossed.
    ///
    /// If archiving fails the action still stands; the error only reports
    /// the archive failure.
    fn advance(&mut self, next: DraftState) -> Result<SessionUpdate, AppError> {
        let transitions = derive_transitions(&self.state, &next);
        self.state = next;

        for transition in &transitions {
            match transition {
                DraftTransition::TurnBecame { player } => {
                    debug!(draft_id = %self.id, player = %player, "Turn passed")
                }
                DraftTransition::BanningStarted => {
                    info!(draft_id = %self.id, "Banning phase started")
                }
                DraftTransition::DraftCompleted => {
                    info!(draft_id = %self.id, "Draft completed")
                }
            }
        }

        let archived = if transitions.contains(&DraftTransition::DraftCompleted) {
            self.archive_completed()?
        } else {
            None
        };

        Ok(SessionUpdate {
            transitions,
            phase: self.state.phase(),
            turn: self.state.turn_info(),
            archived,
        })
    }

    fn archive_completed(&self) -> Result<Option<Ulid>, AppError> {
        if !self.config.archive_on_complete {
            return Ok(None);
        }
        let Some(archive) = &self.archive else {
            return Ok(None);
        };

        let record = DraftRecord::from_completed(&self.state, self.recommendations.clone())?;
        let record_id = record.id;
        archive.store(record).map_err(|e| {
            warn!(draft_id = %self.id, error = %e, "Failed to archive draft");
            AppError::from(e)
        })?;
        info!(draft_id = %self.id, record_id = %record_id, "Draft archived");
        Ok(Some(record_id))
    }
}

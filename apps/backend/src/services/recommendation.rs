//! Recommendation collaborator and the gating around it.
//!
//! The engine decides whether player A may receive advice and what the
//! legal pool is; the service only chooses among those options. Proposals
//! outside the pool are dropped before they reach a caller.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DraftConfig;
use crate::domain::{
    available_for, ban_targets, DraftSnapshot, DraftState, MonsterCollection, MonsterId, Phase,
    Player, RejectReason, TurnInfoView,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;

/// Everything a recommender is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub draft: DraftSnapshot,
    pub phase: Phase,
    pub turn: Option<TurnInfoView>,
    /// Monsters A could legally pick now, or the ban targets while banning.
    pub legal_pool: Vec<MonsterId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub text: String,
    #[serde(default)]
    pub proposed_monster_ids: Vec<MonsterId>,
}

/// Advice source for player A.
///
/// Implementations receive a request the engine has already gated and must
/// not assume any state beyond it.
pub trait RecommendationService: Send + Sync {
    fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendation, DomainError>;
}

/// Whether player A may ask for a recommendation right now.
///
/// True on A's picking turn, and during banning before A has banned when
/// `ban_recommendations` is on.
pub fn may_recommend(state: &DraftState, ban_recommendations: bool) -> bool {
    match state.phase() {
        Phase::Picking => state
            .turn_info()
            .is_some_and(|info| info.current_player == Player::A),
        Phase::Banning => ban_recommendations && state.bans(Player::A).is_empty(),
        Phase::Completed => false,
    }
}

/// Build the request handed to a [`RecommendationService`].
///
/// Fails with [`RejectReason::WrongTurn`] when A may not act.
pub fn recommendation_request(
    state: &DraftState,
    known_monsters: &[MonsterId],
    collection: Option<&dyn MonsterCollection>,
    config: &DraftConfig,
) -> Result<RecommendationRequest, AppError> {
    if !may_recommend(state, config.ban_recommendations) {
        return Err(AppError::rejected(RejectReason::WrongTurn));
    }

    let legal_pool = match state.phase() {
        Phase::Banning => ban_targets(state, Player::A),
        _ => {
            let collection = if config.enforce_collection { collection } else { None };
            available_for(state, Player::A, known_monsters.iter().copied(), collection)
        }
    };

    Ok(RecommendationRequest {
        draft: DraftSnapshot::from(state),
        phase: state.phase(),
        turn: state.turn_info().map(TurnInfoView::from),
        legal_pool,
    })
}

/// Keep only proposals inside the request's legal pool, in order, once each.
pub fn legal_proposals(
    mut recommendation: Recommendation,
    request: &RecommendationRequest,
) -> Recommendation {
    let before = recommendation.proposed_monster_ids.len();
    let mut kept: Vec<MonsterId> = Vec::with_capacity(before);
    for id in recommendation.proposed_monster_ids {
        if request.legal_pool.contains(&id) && !kept.contains(&id) {
            kept.push(id);
        }
    }
    if kept.len() != before {
        debug!(
            proposed = before,
            kept = kept.len(),
            "Dropped recommendation proposals outside the legal pool"
        );
    }
    recommendation.proposed_monster_ids = kept;
    recommendation
}

/// Deterministic recommender: proposes the head of the legal pool.
///
/// Useful offline and in tests; a real deployment plugs in its own service.
#[derive(Debug, Clone, Copy)]
pub struct PoolOrderRecommender {
    max_proposals: usize,
}

impl PoolOrderRecommender {
    pub fn new(max_proposals: usize) -> Self {
        Self { max_proposals }
    }
}

impl Default for PoolOrderRecommender {
    fn default() -> Self {
        Self::new(3)
    }
}

impl RecommendationService for PoolOrderRecommender {
    fn recommend(&self, request: &RecommendationRequest) -> Result<Recommendation, DomainError> {
        let wanted = match (request.phase, request.turn) {
            (Phase::Banning, _) => 1,
            (_, Some(turn)) => turn.picks_remaining,
            _ => 0,
        };
        let proposed: Vec<MonsterId> = request
            .legal_pool
            .iter()
            .copied()
            .take(wanted.min(self.max_proposals))
            .collect();

        let text = match (request.phase, proposed.as_slice()) {
            (_, []) => "No legal options remain.".to_string(),
            (Phase::Banning, ids) => format!("Ban {}.", join_ids(ids)),
            (_, ids) => format!("Pick {}.", join_ids(ids)),
        };

        Ok(Recommendation {
            text,
            proposed_monster_ids: proposed,
        })
    }
}

fn join_ids(ids: &[MonsterId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

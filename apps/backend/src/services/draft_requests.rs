//! Stateless request handling.
//!
//! Callers send the whole draft with every request. The snapshot is
//! validated into engine state, the engine answers, and nothing is kept.
//! Any phase or turn values a client includes are ignored and recomputed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DraftConfig;
use crate::domain::{
    apply_action, view, Action, DraftSnapshot, DraftState, DraftView, MonsterCollection,
    MonsterId, OwnedMonsters, RejectReason, TurnInfoView,
};
use crate::error::AppError;
use crate::services::recommendation::{
    legal_proposals, recommendation_request, Recommendation, RecommendationService,
};

/// A proposed action against a caller-held draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    #[serde(flatten)]
    pub draft: DraftSnapshot,
    pub action: Action,
    /// Operator's collection; only consulted for player A.
    #[serde(default)]
    pub collection: Option<OwnedMonsters>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[serde(flatten)]
    pub draft: DraftSnapshot,
    #[serde(default)]
    pub known_monsters: Vec<MonsterId>,
    #[serde(default)]
    pub collection: Option<OwnedMonsters>,
}

/// Engine verdict on an [`ActionRequest`].
///
/// Rejections are ordinary results here, not errors: the request was well
/// formed and the engine answered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ActionOutcome {
    Accepted { state: DraftView },
    Rejected { reason: RejectReason, message: String },
}

impl ActionOutcome {
    fn rejected(reason: RejectReason) -> Self {
        ActionOutcome::Rejected {
            reason,
            message: reason.message().to_string(),
        }
    }
}

/// One request line for the command-line driver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum DraftRequest {
    TurnInfo(DraftSnapshot),
    View(DraftSnapshot),
    Submit(ActionRequest),
    Recommend(RecommendRequest),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DraftResponse {
    TurnInfo { turn: Option<TurnInfoView> },
    View(DraftView),
    Action(ActionOutcome),
    Recommendation(Recommendation),
}

fn load(draft: DraftSnapshot) -> Result<DraftState, AppError> {
    Ok(draft.into_state()?)
}

/// Turn resolver output for a snapshot; `None` once picking is over.
pub fn turn_info(draft: DraftSnapshot) -> Result<Option<TurnInfoView>, AppError> {
    Ok(load(draft)?.turn_info().map(TurnInfoView::from))
}

pub fn describe(draft: DraftSnapshot) -> Result<DraftView, AppError> {
    Ok(view(&load(draft)?))
}

/// Validate and apply one action.
///
/// Malformed snapshots are errors; legal-but-refused actions come back as
/// [`ActionOutcome::Rejected`].
pub fn submit(request: ActionRequest, config: &DraftConfig) -> Result<ActionOutcome, AppError> {
    let state = load(request.draft)?;
    let collection = if config.enforce_collection {
        request.collection.as_ref().map(|c| c as &dyn MonsterCollection)
    } else {
        None
    };

    match apply_action(&state, request.action, collection) {
        Ok(next) => Ok(ActionOutcome::Accepted { state: view(&next) }),
        Err(reason) => {
            debug!(
                player = %request.action.player(),
                monster = %request.action.monster(),
                reason = reason.as_str(),
                "Action rejected"
            );
            Ok(ActionOutcome::rejected(reason))
        }
    }
}

/// Gate, then ask `service` for advice to player A.
pub fn recommend(
    request: RecommendRequest,
    config: &DraftConfig,
    service: &dyn RecommendationService,
) -> Result<Recommendation, AppError> {
    let state = load(request.draft)?;
    let collection = request
        .collection
        .as_ref()
        .map(|c| c as &dyn MonsterCollection);
    let rec_request = recommendation_request(&state, &request.known_monsters, collection, config)?;
    let recommendation = service.recommend(&rec_request)?;
    Ok(legal_proposals(recommendation, &rec_request))
}

/// Dispatch one [`DraftRequest`].
pub fn handle(
    request: DraftRequest,
    config: &DraftConfig,
    service: &dyn RecommendationService,
) -> Result<DraftResponse, AppError> {
    match request {
        DraftRequest::TurnInfo(draft) => Ok(DraftResponse::TurnInfo {
            turn: turn_info(draft)?,
        }),
        DraftRequest::View(draft) => Ok(DraftResponse::View(describe(draft)?)),
        DraftRequest::Submit(req) => Ok(DraftResponse::Action(submit(req, config)?)),
        DraftRequest::Recommend(req) => Ok(DraftResponse::Recommendation(recommend(
            req, config, service,
        )?)),
    }
}

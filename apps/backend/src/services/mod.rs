pub mod archive;
pub mod draft_requests;
pub mod draft_session;
pub mod recommendation;

pub use archive::{DraftArchive, DraftRecord, InMemoryArchive, RecordedRecommendation};
pub use draft_requests::{ActionOutcome, ActionRequest, DraftRequest, DraftResponse, RecommendRequest};
pub use draft_session::{DraftSession, SessionUpdate};
pub use recommendation::{
    may_recommend, PoolOrderRecommender, Recommendation, RecommendationRequest,
    RecommendationService,
};

//! Domain layer: pure draft logic types and helpers.

pub mod phase;
pub mod pick_order;
pub mod pools;
pub mod rules;
pub mod snapshot;
pub mod state;
pub mod turns;
pub mod validation;

#[cfg(test)]
mod tests_integration;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_validation;

// Re-exports for ergonomics
pub use phase::{derive_phase, derive_transitions, DraftTransition, Phase};
pub use pick_order::{is_valid_pick_order, turns_for, Turn};
pub use pools::{available_for, ban_targets, MonsterCollection, OwnedMonsters};
pub use snapshot::{view, DraftSnapshot, DraftView, TurnInfoView};
pub use state::{DraftState, MonsterId, Player};
pub use turns::{expected_picker, resolve, resolve_for, CurrentTurnInfo};
pub use validation::{
    apply_action, apply_ban, apply_pick, validate_action, validate_ban, validate_pick, Action,
    RejectReason,
};

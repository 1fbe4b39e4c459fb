use serde_json::json;

use crate::domain::test_state_helpers::{banning_state, completed_state, ids, state_after_picks};
use crate::domain::{view, DraftSnapshot, DraftState, MonsterId, Phase, Player};
use crate::errors::domain::{DomainError, ValidationKind};

fn snapshot(first: Player, a: &[u32], b: &[u32], a_ban: &[u32], b_ban: &[u32]) -> DraftSnapshot {
    DraftSnapshot {
        first_player: first,
        player_a_picks: ids(a),
        player_b_picks: ids(b),
        player_a_bans: ids(a_ban),
        player_b_bans: ids(b_ban),
    }
}

#[test]
fn reachable_states_round_trip_through_snapshot() {
    for first in Player::ALL {
        for total in 0..=10 {
            let state = state_after_picks(first, total);
            let snap = DraftSnapshot::from(&state);
            assert!(snap.consistency_errors().is_empty(), "first={first} total={total}");
            assert_eq!(snap.into_state().unwrap(), state);
        }
        let done = completed_state(first);
        assert_eq!(DraftSnapshot::from(&done).into_state().unwrap(), done);
    }
}

#[test]
fn unreachable_pick_split_is_reported() {
    // A opens, so B cannot hold the only pick.
    let snap = snapshot(Player::A, &[], &[101], &[], &[]);
    let errors = snap.consistency_errors();
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("not reachable"), "{errors:?}");

    // The same split is fine when B opens.
    assert!(snapshot(Player::B, &[], &[101], &[], &[])
        .consistency_errors()
        .is_empty());
}

#[test]
fn duplicate_picks_are_reported() {
    let snap = snapshot(Player::A, &[1], &[1, 2], &[], &[]);
    let errors = snap.consistency_errors();
    assert!(errors.iter().any(|e| e.contains("picked more than once")), "{errors:?}");
}

#[test]
fn oversized_lists_are_reported() {
    let snap = snapshot(
        Player::A,
        &[1, 2, 3, 4, 5, 6],
        &[101, 102, 103, 104, 105],
        &[101, 102],
        &[],
    );
    let errors = snap.consistency_errors();
    assert!(errors.iter().any(|e| e.contains("player A has 6 picks")), "{errors:?}");
    assert!(errors.iter().any(|e| e.contains("player A has 2 bans")), "{errors:?}");
}

#[test]
fn bans_must_target_opposing_picks() {
    let snap = snapshot(
        Player::A,
        &[1, 2, 3, 4, 5],
        &[101, 102, 103, 104, 105],
        &[1],
        &[999],
    );
    let errors = snap.consistency_errors();
    assert!(errors.iter().any(|e| e.contains("player A banned 1")), "{errors:?}");
    assert!(errors.iter().any(|e| e.contains("player B banned 999")), "{errors:?}");
}

#[test]
fn bans_before_full_teams_are_reported() {
    let state = state_after_picks(Player::A, 4);
    let mut snap = DraftSnapshot::from(&state);
    snap.player_a_bans = vec![state.picks(Player::B)[0]];
    let errors = snap.consistency_errors();
    assert_eq!(errors, vec!["bans recorded before picking is complete".to_string()]);
}

#[test]
fn into_state_surfaces_inconsistent_draft() {
    let snap = snapshot(Player::A, &[1], &[1, 2], &[], &[]);
    match snap.into_state() {
        Err(DomainError::Validation(ValidationKind::InconsistentDraft, detail)) => {
            assert!(detail.contains("picked more than once"));
        }
        other => panic!("expected InconsistentDraft, got {other:?}"),
    }
}

#[test]
fn snapshot_wire_shape_is_camel_case_with_defaults() {
    let snap: DraftSnapshot = serde_json::from_value(json!({
        "firstPlayer": "B",
        "playerBPicks": [7]
    }))
    .unwrap();
    assert_eq!(snap.first_player, Player::B);
    assert_eq!(snap.player_b_picks, vec![MonsterId(7)]);
    assert!(snap.player_a_picks.is_empty());
    assert!(snap.player_a_bans.is_empty());

    let value = serde_json::to_value(DraftSnapshot::new(Player::A)).unwrap();
    assert_eq!(
        value,
        json!({
            "firstPlayer": "A",
            "playerAPicks": [],
            "playerBPicks": [],
            "playerABans": [],
            "playerBBans": []
        })
    );
}

#[test]
fn client_supplied_phase_is_ignored() {
    let snap: DraftSnapshot = serde_json::from_value(json!({
        "firstPlayer": "A",
        "playerAPicks": [1],
        "currentPhase": "completed",
        "currentTurn": 6
    }))
    .unwrap();
    let state = snap.into_state().unwrap();
    assert_eq!(state.phase(), Phase::Picking);
    assert_eq!(state.turn_info().unwrap().turn, 2);
}

#[test]
fn view_of_fresh_draft() {
    let value = serde_json::to_value(view(&DraftState::new(Player::A))).unwrap();
    assert_eq!(value["phase"], "picking");
    assert_eq!(value["firstPlayer"], "A");
    assert_eq!(
        value["turn"],
        json!({
            "turn": 1,
            "currentPlayer": "A",
            "picksRemaining": 1,
            "picksRemainingForPlayer": 5
        })
    );
    assert_eq!(value["finalTeamA"], json!([]));
}

#[test]
fn view_of_banning_and_completed_drafts() {
    let banning = view(&banning_state(Player::B));
    assert_eq!(banning.phase, Phase::Banning);
    assert_eq!(banning.turn, None);
    assert_eq!(banning.final_team_a, ids(&[1, 2, 3, 4, 5]));

    let done = view(&completed_state(Player::A));
    assert_eq!(done.phase, Phase::Completed);
    // A banned 101 from B, B banned 1 from A.
    assert_eq!(done.final_team_a, ids(&[2, 3, 4, 5]));
    assert_eq!(done.final_team_b, ids(&[102, 103, 104, 105]));

    let value = serde_json::to_value(&done).unwrap();
    assert_eq!(value["turn"], serde_json::Value::Null);
    assert_eq!(value["playerABans"], json!([101]));
}

use std::collections::HashSet;

use crate::domain::test_state_helpers::{
    banning_state, completed_state, ids, state_after_picks,
};
use crate::domain::{
    apply_action, apply_ban, apply_pick, validate_ban, validate_pick, Action, DraftState,
    MonsterId, OwnedMonsters, Phase, Player, RejectReason,
};

#[test]
fn first_pick_belongs_to_first_player() {
    let state = DraftState::new(Player::B);
    assert_eq!(
        validate_pick(&state, Player::A, MonsterId(1), None),
        Err(RejectReason::WrongTurn)
    );
    assert_eq!(validate_pick(&state, Player::B, MonsterId(1), None), Ok(()));
}

#[test]
fn out_of_turn_pick_is_rejected() {
    // A first, A has picked once: B's turn.
    let state = state_after_picks(Player::A, 1);
    assert_eq!(
        validate_pick(&state, Player::A, MonsterId(50), None),
        Err(RejectReason::WrongTurn)
    );
    assert_eq!(validate_pick(&state, Player::B, MonsterId(50), None), Ok(()));
}

#[test]
fn duplicate_pick_is_rejected_across_teams() {
    let state = state_after_picks(Player::A, 1); // A holds 1
    assert_eq!(
        validate_pick(&state, Player::B, MonsterId(1), None),
        Err(RejectReason::Duplicate)
    );
}

#[test]
fn full_team_rejects_further_picks() {
    // A first, B already holds five: turn 4 still points at B.
    let state = DraftState::from_parts(
        Player::A,
        vec![],
        ids(&[101, 102, 103, 104, 105]),
        vec![],
        vec![],
    );
    assert_eq!(state.phase(), Phase::Picking);
    assert_eq!(
        validate_pick(&state, Player::B, MonsterId(50), None),
        Err(RejectReason::Full)
    );
}

#[test]
fn exhausted_turn_rejects_pick() {
    // Ten picks consumed with A short of a full team.
    let state = DraftState::from_parts(
        Player::A,
        ids(&[1, 2, 3, 4]),
        ids(&[101, 102, 103, 104, 105, 106]),
        vec![],
        vec![],
    );
    assert_eq!(state.phase(), Phase::Picking);
    assert_eq!(
        validate_pick(&state, Player::A, MonsterId(50), None),
        Err(RejectReason::TurnExhausted)
    );
}

#[test]
fn collection_restricts_only_player_a() {
    let owned: OwnedMonsters = ids(&[1, 2, 3]).into_iter().collect();

    let state = DraftState::new(Player::A);
    assert_eq!(
        validate_pick(&state, Player::A, MonsterId(9), Some(&owned)),
        Err(RejectReason::NotOwned)
    );
    assert_eq!(validate_pick(&state, Player::A, MonsterId(2), Some(&owned)), Ok(()));
    // No collection supplied: no restriction.
    assert_eq!(validate_pick(&state, Player::A, MonsterId(9), None), Ok(()));

    let state = DraftState::new(Player::B);
    assert_eq!(validate_pick(&state, Player::B, MonsterId(9), Some(&owned)), Ok(()));
}

#[test]
fn duplicate_takes_precedence_over_ownership() {
    let owned: OwnedMonsters = ids(&[1]).into_iter().collect();
    // B first and B picks 101; then A's turn.
    let state = state_after_picks(Player::B, 1);
    assert_eq!(
        validate_pick(&state, Player::A, MonsterId(101), Some(&owned)),
        Err(RejectReason::Duplicate)
    );
}

#[test]
fn scenario_banning_rejects_picks() {
    let state = banning_state(Player::A);
    assert_eq!(state.phase(), Phase::Banning);
    for player in Player::ALL {
        assert_eq!(
            validate_pick(&state, player, MonsterId(999), None),
            Err(RejectReason::WrongPhase)
        );
    }
}

#[test]
fn scenario_ban_outside_opponent_picks_is_invalid_target() {
    let state = banning_state(Player::A);
    // A's own pick.
    assert_eq!(
        validate_ban(&state, Player::A, MonsterId(1)),
        Err(RejectReason::InvalidTarget)
    );
    // Unknown monster.
    assert_eq!(
        validate_ban(&state, Player::A, MonsterId(999)),
        Err(RejectReason::InvalidTarget)
    );
    // Regardless of phase or ban count.
    let picking = state_after_picks(Player::A, 4);
    assert_eq!(
        validate_ban(&picking, Player::A, MonsterId(999)),
        Err(RejectReason::InvalidTarget)
    );
    let after_ban = apply_ban(&state, Player::A, MonsterId(101)).unwrap();
    assert_eq!(
        validate_ban(&after_ban, Player::A, MonsterId(1)),
        Err(RejectReason::InvalidTarget)
    );
}

#[test]
fn ban_during_picking_is_wrong_phase() {
    let state = state_after_picks(Player::A, 4); // B holds 101, 102
    assert_eq!(
        validate_ban(&state, Player::A, MonsterId(101)),
        Err(RejectReason::WrongPhase)
    );
}

#[test]
fn bans_are_order_independent() {
    let state = banning_state(Player::A);

    let a_then_b = apply_ban(&state, Player::A, MonsterId(103)).unwrap();
    assert_eq!(a_then_b.phase(), Phase::Banning);
    let a_then_b = apply_ban(&a_then_b, Player::B, MonsterId(2)).unwrap();

    let b_then_a = apply_ban(&state, Player::B, MonsterId(2)).unwrap();
    assert_eq!(b_then_a.phase(), Phase::Banning);
    let b_then_a = apply_ban(&b_then_a, Player::A, MonsterId(103)).unwrap();

    assert_eq!(a_then_b, b_then_a);
    assert_eq!(a_then_b.phase(), Phase::Completed);
}

#[test]
fn second_ban_by_same_player_is_rejected() {
    let state = banning_state(Player::B);
    let state = apply_ban(&state, Player::B, MonsterId(1)).unwrap();
    assert_eq!(
        validate_ban(&state, Player::B, MonsterId(2)),
        Err(RejectReason::AlreadyBanned)
    );
}

#[test]
fn scenario_completed_draft_rejects_further_bans() {
    let state = completed_state(Player::A);
    assert_eq!(state.phase(), Phase::Completed);
    for player in Player::ALL {
        let target = state.picks(player.opponent())[2];
        let err = validate_ban(&state, player, target).unwrap_err();
        assert!(
            matches!(err, RejectReason::WrongPhase | RejectReason::AlreadyBanned),
            "player={player} got {err:?}"
        );
        assert_eq!(
            validate_pick(&state, player, MonsterId(999), None),
            Err(RejectReason::WrongPhase)
        );
    }
}

#[test]
fn apply_leaves_input_untouched() {
    let state = DraftState::new(Player::A);
    let next = apply_pick(&state, Player::A, MonsterId(7), None).unwrap();
    assert_eq!(state.total_picks(), 0);
    assert_eq!(next.picks(Player::A), &[MonsterId(7)]);

    let rejected = apply_pick(&next, Player::A, MonsterId(8), None);
    assert_eq!(rejected, Err(RejectReason::WrongTurn));
    assert_eq!(next.total_picks(), 1);
}

#[test]
fn action_dispatch_matches_direct_calls() {
    let state = banning_state(Player::A);
    let via_action = apply_action(
        &state,
        Action::Ban {
            player: Player::A,
            monster: MonsterId(104),
        },
        None,
    );
    assert_eq!(via_action, apply_ban(&state, Player::A, MonsterId(104)));

    let pick = Action::Pick {
        player: Player::A,
        monster: MonsterId(3),
    };
    assert_eq!(apply_action(&state, pick, None), Err(RejectReason::WrongPhase));
}

#[test]
fn action_wire_shape() {
    let action: Action =
        serde_json::from_str(r#"{"kind":"pick","player":"B","monsterId":42}"#).unwrap();
    assert_eq!(
        action,
        Action::Pick {
            player: Player::B,
            monster: MonsterId(42)
        }
    );
    assert_eq!(action.player(), Player::B);
    assert_eq!(action.monster(), MonsterId(42));
}

#[test]
fn reject_reasons_serialize_as_codes() {
    let strings: HashSet<String> = RejectReason::ALL
        .iter()
        .map(|r| serde_json::to_string(r).unwrap())
        .collect();
    assert_eq!(strings.len(), RejectReason::ALL.len());
    assert_eq!(
        serde_json::to_string(&RejectReason::TurnExhausted).unwrap(),
        "\"TURN_EXHAUSTED\""
    );
    for reason in RejectReason::ALL {
        assert_eq!(format!("\"{}\"", reason.as_str()), serde_json::to_string(&reason).unwrap());
    }
}

// Whole-draft walkthroughs driven only through the public domain API.

use crate::domain::test_state_helpers::ids;
use crate::domain::{
    apply_ban, apply_pick, available_for, ban_targets, derive_transitions, view, DraftSnapshot,
    DraftState, DraftTransition, MonsterId, OwnedMonsters, Phase, Player, RejectReason,
};

/// Scripted picks for B-first: B1 A2 B2 A2 B2 A1.
const B_FIRST_SCRIPT: [(Player, u32); 10] = [
    (Player::B, 50),
    (Player::A, 1),
    (Player::A, 2),
    (Player::B, 51),
    (Player::B, 52),
    (Player::A, 3),
    (Player::A, 4),
    (Player::B, 53),
    (Player::B, 54),
    (Player::A, 5),
];

#[test]
fn full_draft_b_first_with_collection() {
    let owned: OwnedMonsters = ids(&[1, 2, 3, 4, 5, 6]).into_iter().collect();
    let mut state = DraftState::new(Player::B);
    let mut banning_seen = false;

    for (player, id) in B_FIRST_SCRIPT {
        // The wrong side is always refused mid-picking.
        assert_eq!(
            apply_pick(&state, player.opponent(), MonsterId(99), Some(&owned)),
            Err(RejectReason::WrongTurn)
        );
        let next = apply_pick(&state, player, MonsterId(id), Some(&owned))
            .unwrap_or_else(|r| panic!("{player} picking {id}: {r}"));
        banning_seen |= derive_transitions(&state, &next).contains(&DraftTransition::BanningStarted);
        state = next;
    }

    assert!(banning_seen);
    assert_eq!(state.phase(), Phase::Banning);
    assert_eq!(state.turn_info(), None);
    assert_eq!(ban_targets(&state, Player::A), ids(&[50, 51, 52, 53, 54]));
    assert!(available_for(&state, Player::A, ids(&[1, 6, 7]), Some(&owned)) == ids(&[6]));

    let state = apply_ban(&state, Player::B, MonsterId(3)).unwrap();
    assert_eq!(
        apply_ban(&state, Player::B, MonsterId(4)),
        Err(RejectReason::AlreadyBanned)
    );
    let done = apply_ban(&state, Player::A, MonsterId(52)).unwrap();
    assert!(derive_transitions(&state, &done).contains(&DraftTransition::DraftCompleted));

    let summary = view(&done);
    assert_eq!(summary.phase, Phase::Completed);
    assert_eq!(summary.final_team_a, ids(&[1, 2, 4, 5]));
    assert_eq!(summary.final_team_b, ids(&[50, 51, 53, 54]));

    // A stateless caller rebuilding from the wire gets the same draft.
    let wire = serde_json::to_string(&DraftSnapshot::from(&done)).unwrap();
    let rebuilt: DraftSnapshot = serde_json::from_str(&wire).unwrap();
    assert_eq!(rebuilt.into_state().unwrap(), done);
}

#[test]
fn unowned_pick_for_a_is_refused_but_b_is_free() {
    let owned: OwnedMonsters = ids(&[1]).into_iter().collect();
    let state = DraftState::new(Player::A);
    assert_eq!(
        apply_pick(&state, Player::A, MonsterId(2), Some(&owned)),
        Err(RejectReason::NotOwned)
    );
    let state = apply_pick(&state, Player::A, MonsterId(1), Some(&owned)).unwrap();
    let state = apply_pick(&state, Player::B, MonsterId(2), Some(&owned)).unwrap();
    assert_eq!(state.picks(Player::B), &[MonsterId(2)]);
}

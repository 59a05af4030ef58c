//! End-to-end room sessions.

use numvault_engine::{
    Advance, BorrowOutcome, BorrowPhase, BorrowRejection, Digit, Level, Room, RoomEvent, Verdict,
};

use crate::common::{BUILTIN_CURRICULUM, enter, expected_answer, room_with, vault_452};

#[test]
fn worked_example_452_minus_138() {
    let mut room = room_with(vec![vault_452()]);
    assert_eq!(room.live_minuend(), Some([4, 5, 2].as_slice()));

    assert!(room.borrow_from(1).is_started());
    assert_eq!(room.live_minuend(), Some([4, 4, 12].as_slice()));

    room.reset_current();
    assert!(room.borrow_from(0).is_started());
    assert_eq!(room.live_minuend(), Some([3, 15, 2].as_slice()));
    room.settle_borrow();

    enter(&mut room, &[3, 1, 4]);
    assert_eq!(room.verify(), Verdict::Pass);
    assert!(room.is_solved());
}

#[test]
fn reset_restores_fresh_attempt() {
    let mut room = room_with(vec![vault_452()]);
    assert!(room.borrow_from(1).is_started());
    enter(&mut room, &[9, 9, 9]);
    room.verify();
    room.take_events();

    room.reset_current();
    assert_eq!(room.live_minuend(), Some([4, 5, 2].as_slice()));
    assert_eq!(room.borrow_phase(), Some(BorrowPhase::Idle));
    assert!(room.answer().digits().iter().all(|&d| d == Digit::ZERO));
    assert_eq!(room.last_verdict(), None);
    assert_eq!(room.level_index(), 0);

    let events = room.take_events();
    assert!(matches!(events[0], RoomEvent::BorrowCancelled(e) if e.from() == 1));
    assert!(matches!(events[1], RoomEvent::LevelLoaded { index: 0, .. }));
}

#[test]
fn number_input_levels_have_no_vault() {
    let mut room = room_with(vec![
        Level::number_input("pv-305", "Build 305", &[3, 0, 5]).unwrap(),
    ]);
    assert_eq!(room.live_minuend(), None);
    assert_eq!(room.borrow_phase(), None);
    assert!(!room.can_borrow_from(0));
    assert_eq!(
        room.borrow_from(0),
        BorrowOutcome::Rejected(BorrowRejection::NotAVault)
    );
}

#[test]
fn advancing_resizes_the_answer() {
    let mut room = room_with(vec![
        Level::number_input("pv-42", "Build 42", &[4, 2]).unwrap(),
        Level::vertical_subtraction("vault-5004", &[5, 0, 0, 4], &[2, 3, 8, 6]).unwrap(),
    ]);
    assert_eq!(room.answer().len(), 2);

    enter(&mut room, &[4, 2]);
    assert_eq!(room.verify(), Verdict::Pass);
    assert_eq!(room.advance(), Advance::Next { index: 1 });
    assert_eq!(room.answer().len(), 4);
    assert_eq!(room.live_minuend(), Some([5, 0, 0, 4].as_slice()));
    assert!(!room.is_solved());
}

#[test]
fn advance_past_the_end_keeps_index() {
    let mut room = room_with(vec![vault_452()]);
    assert_eq!(room.advance(), Advance::Complete);
    assert_eq!(room.level_index(), 0);
    assert!(room.is_complete());
    assert_eq!(room.take_events().last(), Some(&RoomEvent::CurriculumComplete));
}

#[test]
fn streak_tracks_first_checks() {
    let mut room = room_with(vec![
        Level::number_input("a", "Build 1", &[1]).unwrap(),
        Level::number_input("b", "Build 2", &[2]).unwrap(),
        Level::number_input("c", "Build 3", &[3]).unwrap(),
    ]);

    enter(&mut room, &[1]);
    room.verify();
    room.advance();

    enter(&mut room, &[7]);
    room.verify();
    enter(&mut room, &[2]);
    room.verify();
    // Re-checking a solved level doesn't count again.
    room.verify();
    room.advance();

    enter(&mut room, &[3]);
    room.verify();

    let stats = room.stats();
    assert_eq!(stats.attempts(), 4);
    assert_eq!(stats.solved(), 3);
    assert_eq!(stats.streak(), 2);
    assert_eq!(stats.best_streak(), 2);
}

/// Play the shipped curriculum start to finish with correct answers.
#[test]
fn builtin_curriculum_is_solvable() {
    let curriculum = numvault_config::parse_curriculum(BUILTIN_CURRICULUM).unwrap();
    let count = curriculum.len();
    let mut room = Room::new(curriculum);

    for index in 0..count {
        assert_eq!(room.level_index(), index);
        let answer = expected_answer(room.level());
        enter(&mut room, &answer);
        assert_eq!(room.verify(), Verdict::Pass, "level {}", room.level().id());

        let expected = if index + 1 == count {
            Advance::Complete
        } else {
            Advance::Next { index: index + 1 }
        };
        assert_eq!(room.advance(), expected);
    }

    assert!(room.is_complete());
    assert_eq!(room.stats().best_streak(), u32::try_from(count).unwrap());
}

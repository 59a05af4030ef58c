//! Borrow engine behavior through the public API.

use numvault_engine::{BorrowEngine, BorrowOutcome, BorrowPhase, BorrowRejection};
use numvault_types::{numeral_value, positional_value};

use crate::common::digits;

/// Borrow from every column in turn, settling after each, until nothing
/// can lend. Value must never move.
#[test]
fn value_is_conserved_over_long_sequences() {
    for minuend in [
        vec![4, 5, 2],
        vec![3, 0, 2],
        vec![9, 9, 9, 9],
        vec![1, 0, 0, 0, 0],
        vec![7, 0, 4, 0, 1, 0, 3],
    ] {
        let minuend = digits(&minuend);
        let original = numeral_value(&minuend);
        let mut engine = BorrowEngine::new(&minuend);

        for round in 0..40 {
            let column = round % minuend.len();
            if engine.borrow_from(column).is_started() {
                assert!(engine.is_transitioning());
                assert_eq!(positional_value(engine.live()), original);
                engine.settle();
            }
            assert_eq!(positional_value(engine.live()), original);
            assert_eq!(engine.value(), original);
        }
    }
}

#[test]
fn rejected_borrows_leave_state_untouched() {
    let mut engine = BorrowEngine::new(&digits(&[4, 0, 2]));
    let before = engine.live().to_vec();

    assert_eq!(
        engine.borrow_from(2),
        BorrowOutcome::Rejected(BorrowRejection::NoLowerPlace)
    );
    assert_eq!(
        engine.borrow_from(1),
        BorrowOutcome::Rejected(BorrowRejection::EmptyColumn)
    );
    assert_eq!(
        engine.borrow_from(17),
        BorrowOutcome::Rejected(BorrowRejection::NoLowerPlace)
    );
    assert_eq!(engine.live(), before.as_slice());
    assert_eq!(engine.phase(), BorrowPhase::Idle);
}

#[test]
fn second_borrow_in_flight_is_rejected() {
    let mut engine = BorrowEngine::new(&digits(&[4, 5, 2]));
    assert!(engine.borrow_from(0).is_started());
    assert_eq!(
        engine.borrow_from(1),
        BorrowOutcome::Rejected(BorrowRejection::InFlight)
    );
    assert_eq!(engine.live(), &[3, 15, 2]);

    let settled = engine.settle().unwrap();
    assert_eq!((settled.from(), settled.to()), (0, 1));
    assert!(engine.borrow_from(1).is_started());
    assert_eq!(engine.live(), &[3, 14, 12]);
}

#[test]
fn borrowing_across_a_zero_takes_two_steps() {
    let mut engine = BorrowEngine::new(&digits(&[3, 0, 2]));
    assert!(!engine.can_borrow_from(1));

    assert!(engine.borrow_from(0).is_started());
    engine.settle();
    assert_eq!(engine.live(), &[2, 10, 2]);
    assert!(engine.can_borrow_from(1));

    assert!(engine.borrow_from(1).is_started());
    engine.settle();
    assert_eq!(engine.live(), &[2, 9, 12]);
}

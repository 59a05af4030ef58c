//! Verification exactness and independence from the live minuend.

use numvault_engine::{AnswerLedger, Level, MismatchHint, Verdict, diagnose, verify};

use crate::common::{digits, enter, room_with, vault_452};

fn ledger(values: &[u8]) -> AnswerLedger {
    AnswerLedger::from(digits(values))
}

#[test]
fn number_input_is_all_or_nothing() {
    let level = Level::number_input("pv-3050", "Build 3050", &[3, 0, 5, 0]).unwrap();

    assert_eq!(verify(&level, &ledger(&[3, 0, 5, 0])), Verdict::Pass);
    assert_eq!(verify(&level, &ledger(&[3, 5, 0, 0])), Verdict::Fail);
    assert_eq!(verify(&level, &ledger(&[3, 0, 5])), Verdict::Fail);
    assert_eq!(verify(&level, &ledger(&[0, 3, 0, 5, 0])), Verdict::Fail);
}

#[test]
fn default_zeros_are_an_ordinary_answer() {
    let level = Level::vertical_subtraction("even", &[5, 5], &[5, 5]).unwrap();
    assert_eq!(verify(&level, &AnswerLedger::new(2)), Verdict::Pass);
    assert_eq!(verify(&vault_452(), &AnswerLedger::new(3)), Verdict::Fail);
}

#[test]
fn verdict_ignores_borrow_state() {
    // No borrows at all.
    let mut untouched = room_with(vec![vault_452()]);
    enter(&mut untouched, &[3, 1, 4]);
    assert_eq!(untouched.verify(), Verdict::Pass);

    // Borrows left mid-flight.
    let mut in_flight = room_with(vec![vault_452()]);
    assert!(in_flight.borrow_from(0).is_started());
    enter(&mut in_flight, &[3, 1, 4]);
    assert_eq!(in_flight.verify(), Verdict::Pass);

    // Borrows settled in a way no learner would choose.
    let mut odd = room_with(vec![vault_452()]);
    for column in [1, 0, 1, 0] {
        assert!(odd.borrow_from(column).is_started());
        odd.settle_borrow();
    }
    enter(&mut odd, &[3, 1, 5]);
    assert_eq!(odd.verify(), Verdict::Fail);
    enter(&mut odd, &[3, 1, 4]);
    assert_eq!(odd.verify(), Verdict::Pass);
}

#[test]
fn hint_separates_shifted_places_from_wrong_digits() {
    let level = Level::number_input("pv-3050", "Build 3050", &[3, 0, 5, 0]).unwrap();
    assert_eq!(
        diagnose(&level, &ledger(&[3, 5, 0, 0])),
        Some(MismatchHint::PlacesShifted)
    );
    assert_eq!(
        diagnose(&level, &ledger(&[3, 0, 6, 0])),
        Some(MismatchHint::WrongDigits)
    );
    assert_eq!(diagnose(&level, &ledger(&[3, 0, 5, 0])), None);

    assert_eq!(
        diagnose(&vault_452(), &ledger(&[4, 3, 1])),
        Some(MismatchHint::PlacesShifted)
    );
}

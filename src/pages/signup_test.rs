use super::*;
use crate::net::identity::{AccountHandle, ProviderError};
use crate::state::signup::SubmitPhase;

fn valid_form() -> SignupForm {
    SignupForm {
        email: "user@example.com".to_owned(),
        password: "abcdefgh".to_owned(),
        confirm_password: "abcdefgh".to_owned(),
        ..SignupForm::default()
    }
}

// =============================================================
// prepare_submit
// =============================================================

#[test]
fn prepare_submit_blocks_invalid_input_and_stores_errors() {
    let mut form = SignupForm { email: "not an email".to_owned(), ..valid_form() };
    assert_eq!(prepare_submit(&mut form), None);
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert!(form.errors.email.is_some());
    assert!(form.errors.password.is_none());
}

#[test]
fn prepare_submit_ignores_attempts_while_submitting() {
    let mut form = valid_form();
    form.begin_submit();
    assert_eq!(prepare_submit(&mut form), None);
    assert_eq!(form.phase, SubmitPhase::Submitting);
}

#[test]
fn prepare_submit_snapshots_clear_input_and_enters_submitting() {
    let mut form = valid_form();
    let input = prepare_submit(&mut form).unwrap();
    assert_eq!(input.email, "user@example.com");
    assert_eq!(input.password, "abcdefgh");
    assert_eq!(form.phase, SubmitPhase::Submitting);
    assert!(form.errors.is_clear());
}

#[test]
fn prepare_submit_accepts_mismatched_password_fields() {
    // Confirm is only length-checked; it is not compared against password.
    let mut form = SignupForm { confirm_password: "zzzzzzzz".to_owned(), ..valid_form() };
    assert!(prepare_submit(&mut form).is_some());
}

// =============================================================
// apply_submit_outcome
// =============================================================

#[test]
fn successful_outcome_settles_and_leaves_for_the_entry_route() {
    let mut form = valid_form();
    form.begin_submit();
    let outcome = Ok(AccountHandle {
        uid: "u-1".to_owned(),
        email: "user@example.com".to_owned(),
    });
    assert_eq!(apply_submit_outcome(&mut form, &outcome), Some("/"));
    assert_eq!(form.phase, SubmitPhase::Succeeded);
}

#[test]
fn rejected_outcome_stays_on_page_with_input_kept() {
    let mut form = valid_form();
    form.begin_submit();
    let outcome = Err(ProviderError::EmailInUse);
    assert_eq!(apply_submit_outcome(&mut form, &outcome), None);
    assert_eq!(form.phase, SubmitPhase::Failed);
    assert!(!form.submitting());
    assert_eq!(form.email, "user@example.com");
    assert_eq!(form.password, "abcdefgh");
    assert_eq!(form.confirm_password, "abcdefgh");
}

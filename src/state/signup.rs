//! Signup form state: input buffers, visibility flags, and submission phase.
//!
//! DESIGN
//! ======
//! One plain record per page instance, owned behind a single `RwSignal` by
//! `SignupPage`. Transitions are ordinary methods so the submission
//! lifecycle tests natively, without a reactive runtime.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::util::validation::{self, FieldError};

/// One submission attempt's input, snapshotted from the form buffers and
/// discarded once the provider call resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupInput {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Per-field outcome of validating one submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
    pub confirm_password: Option<FieldError>,
}

impl FieldErrors {
    /// True when no field failed and submission may proceed.
    pub fn is_clear(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.confirm_password.is_none()
    }
}

/// Which password input an operation addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordKind {
    Password,
    Confirm,
}

/// Submission lifecycle for the signup form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    /// Waiting for input; submission has not started.
    #[default]
    Idle,
    /// A provider call is in flight; further submits are ignored.
    Submitting,
    /// The provider created the account; the page navigates away.
    Succeeded,
    /// The provider rejected the attempt. Rendered the same as `Idle`, with
    /// every entered value retained for an immediate retry.
    Failed,
}

/// Signup form state for one page instance.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// Plain-text rendering for the password field; masked until toggled.
    pub show_password: bool,
    /// Plain-text rendering for the confirm field; masked until toggled.
    pub show_confirm_password: bool,
    /// Where the current submission attempt stands.
    pub phase: SubmitPhase,
    /// Outcome of the latest validation run, rendered inline.
    pub errors: FieldErrors,
}

impl SignupForm {
    /// Snapshot the input buffers for one submission attempt.
    pub fn input(&self) -> SignupInput {
        SignupInput {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        }
    }

    /// Whether `kind` currently renders as plain text.
    pub fn visible(&self, kind: PasswordKind) -> bool {
        match kind {
            PasswordKind::Password => self.show_password,
            PasswordKind::Confirm => self.show_confirm_password,
        }
    }

    /// Flip the visibility flag for `kind`; the other flag is untouched.
    pub fn toggle_visibility(&mut self, kind: PasswordKind) {
        match kind {
            PasswordKind::Password => self.show_password = !self.show_password,
            PasswordKind::Confirm => self.show_confirm_password = !self.show_confirm_password,
        }
    }

    /// True while a provider call is in flight and submits are ignored.
    pub fn submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Enter `Submitting` for a validated attempt.
    pub fn begin_submit(&mut self) {
        self.phase = SubmitPhase::Submitting;
    }

    /// Settle the in-flight attempt. Buffers, flags, and errors are left
    /// untouched either way.
    pub fn settle_submit(&mut self, succeeded: bool) {
        self.phase = if succeeded {
            SubmitPhase::Succeeded
        } else {
            SubmitPhase::Failed
        };
    }
}

/// Validate one submission attempt, each field independently.
///
/// The two password buffers are length-checked only; they are not compared
/// with each other.
pub fn validate(input: &SignupInput) -> FieldErrors {
    FieldErrors {
        email: validation::validate_email(&input.email),
        password: validation::validate_password(&input.password),
        confirm_password: validation::validate_password(&input.confirm_password),
    }
}

//! Signup page: collects account-creation input, validates it per field, and
//! delegates the actual account to the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! The submission lifecycle is Idle -> Submitting -> Succeeded | Failed.
//! Success acknowledges with a blocking alert and leaves for the entry
//! route. A provider rejection is logged only: the phase settles at
//! `Failed` and the populated form stays on screen for another attempt.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::password_field::PasswordField;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::identity::{AccountHandle, ProviderError};
use crate::state::signup::{PasswordKind, SignupForm, SignupInput, validate};
use crate::util::nav;

/// Signup page with email, password, and confirm-password fields plus a
/// required terms-acceptance checkbox.
#[component]
pub fn SignupPage() -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = form.try_update(prepare_submit).flatten() else {
            return;
        };
        submit_account(form, input);
    };

    view! {
        <section class="signup-page">
            <div class="signup-card">
                <h1 class="signup-card__title">"Create an account"</h1>
                <form class="signup-form" on:submit=on_submit>
                    <div class="form-field">
                        <label class="form-field__label" for="email">"Your email"</label>
                        <input
                            class="form-field__input"
                            class:form-field__input--invalid=move || form.get().errors.email.is_some()
                            type="email"
                            id="email"
                            placeholder="name@example.com"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required=true
                        />
                        <Show when=move || form.get().errors.email.is_some()>
                            <p class="form-field__error">"Valid email is required"</p>
                        </Show>
                    </div>
                    <PasswordField
                        id="password"
                        label="Password"
                        hint="Password must be at least 8 characters"
                        value=Signal::derive(move || form.get().password)
                        visible=Signal::derive(move || form.get().visible(PasswordKind::Password))
                        invalid=Signal::derive(move || form.get().errors.password.is_some())
                        on_input=Callback::new(move |value: String| form.update(|f| f.password = value))
                        on_toggle=Callback::new(move |_| {
                            form.update(|f| f.toggle_visibility(PasswordKind::Password));
                        })
                    />
                    <PasswordField
                        id="confirm-password"
                        label="Confirm password"
                        hint="Confirm password must be at least 8 characters"
                        value=Signal::derive(move || form.get().confirm_password)
                        visible=Signal::derive(move || form.get().visible(PasswordKind::Confirm))
                        invalid=Signal::derive(move || form.get().errors.confirm_password.is_some())
                        on_input=Callback::new(move |value: String| {
                            form.update(|f| f.confirm_password = value);
                        })
                        on_toggle=Callback::new(move |_| {
                            form.update(|f| f.toggle_visibility(PasswordKind::Confirm));
                        })
                    />
                    <div class="signup-form__terms">
                        <input class="signup-form__terms-checkbox" type="checkbox" id="terms" required=true/>
                        <label class="signup-form__terms-label" for="terms">
                            "I accept the "
                            <a class="signup-form__terms-link" href="#">"Terms and Conditions"</a>
                        </label>
                    </div>
                    <button class="btn signup-form__submit" type="submit" disabled=move || form.get().submitting()>
                        "Create an account"
                    </button>
                    <p class="signup-form__footer">
                        "Already have an account? "
                        <a class="signup-form__footer-link" href=nav::ROOT_PATH>"Login here"</a>
                    </p>
                </form>
            </div>
        </section>
    }
}

/// Advance the form for one submit attempt.
///
/// Ignored while a call is in flight. Otherwise the buffers are snapshotted
/// and validated, the per-field outcome is stored for inline rendering, and
/// a fully valid snapshot moves the form into `Submitting` and is returned
/// for the provider call.
fn prepare_submit(form: &mut SignupForm) -> Option<SignupInput> {
    if form.submitting() {
        return None;
    }
    let input = form.input();
    form.errors = validate(&input);
    if !form.errors.is_clear() {
        return None;
    }
    form.begin_submit();
    Some(input)
}

/// Settle the form once the provider call finishes and decide the next
/// route. Success leaves for the entry route; rejection keeps the populated
/// form on screen with no visible error.
#[cfg(any(test, feature = "hydrate"))]
fn apply_submit_outcome(
    form: &mut SignupForm,
    outcome: &Result<AccountHandle, ProviderError>,
) -> Option<&'static str> {
    form.settle_submit(outcome.is_ok());
    if outcome.is_ok() {
        Some(nav::ROOT_PATH)
    } else {
        None
    }
}

/// Spawn the single provider call for a prepared submission. One attempt per
/// submit: no retry and no cancellation once in flight.
fn submit_account(form: RwSignal<SignupForm>, input: SignupInput) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = crate::net::identity::create_account(&input.email, &input.password).await;
        if let Err(err) = &outcome {
            leptos::logging::error!("account creation failed: {err}");
        }
        if let Some(path) = form.try_update(|f| apply_submit_outcome(f, &outcome)).flatten() {
            crate::util::notify::alert("Signup successful!");
            nav::redirect(path);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (form, input);
    }
}

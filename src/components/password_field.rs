//! Labelled password input with a visibility toggle.
//!
//! DESIGN
//! ======
//! The field holds no state of its own: value, visibility, and validity
//! arrive as signals from the owning page, and edits flow back through
//! callbacks. The signup form renders two of these.

#[cfg(test)]
#[path = "password_field_test.rs"]
mod password_field_test;

use leptos::prelude::*;

/// A labelled password input that can be toggled to plain text, with an
/// inline error hint shown while the field is invalid.
#[component]
pub fn PasswordField(
    id: &'static str,
    label: &'static str,
    hint: &'static str,
    value: Signal<String>,
    visible: Signal<bool>,
    invalid: Signal<bool>,
    on_input: Callback<String>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-field form-field--password">
            <label class="form-field__label" for=id>{label}</label>
            <input
                class="form-field__input"
                class:form-field__input--invalid=move || invalid.get()
                type=move || input_type(visible.get())
                id=id
                placeholder="••••••••"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                required=true
            />
            <button
                class="form-field__toggle"
                type="button"
                title="Toggle password visibility"
                on:click=move |_| on_toggle.run(())
            >
                {move || toggle_label(visible.get())}
            </button>
            <Show when=move || invalid.get()>
                <p class="form-field__error">{hint}</p>
            </Show>
        </div>
    }
}

/// `type` attribute for the input under the given visibility flag.
fn input_type(visible: bool) -> &'static str {
    if visible { "text" } else { "password" }
}

/// Text for the toggle control, naming the action it performs.
fn toggle_label(visible: bool) -> &'static str {
    if visible { "Hide" } else { "Show" }
}

//! Landing page with a static welcome panel and a logout action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::util::nav;

/// Where the logout control sends the user.
fn logout_destination() -> &'static str {
    nav::ROOT_PATH
}

/// Home page: static welcome content plus a logout button. Logout requests a
/// full-document navigation back to the entry route; clicking it again just
/// repeats the request.
#[component]
pub fn HomePage() -> impl IntoView {
    let on_logout = move |_| nav::redirect(logout_destination());

    view! {
        <section class="home-page">
            <div class="home-card">
                <h1 class="home-card__title">"Welcome User!"</h1>
                <button class="btn home-card__logout" type="button" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </section>
    }
}

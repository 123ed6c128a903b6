//! Login page: username plus six-digit PIN.
//!
//! DESIGN
//! ======
//! The PIN is validated for shape locally before any network call, then
//! compared against the stored credential row fetched by username. A
//! missing user and a wrong PIN produce the same error text so the form
//! does not confirm which usernames exist.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::AuthUser;
use crate::state::auth::AuthState;

/// Shape-check the form fields before any fetch.
fn validate_login_input(username: &str, pin: &str) -> Result<(), &'static str> {
    if username.trim().is_empty() || pin.is_empty() {
        return Err("Enter both username and PIN.");
    }
    if pin.len() != 6 || !pin.chars().all(|c| c.is_ascii_digit()) {
        return Err("PIN must be exactly 6 digits.");
    }
    Ok(())
}

/// Compare the fetched credential row against the entered PIN.
///
/// `None` (unknown username) and a PIN mismatch are indistinguishable to
/// the caller on purpose.
#[cfg(any(test, feature = "hydrate"))]
fn login_outcome(fetched: Option<AuthUser>, pin: &str) -> Result<AuthUser, &'static str> {
    match fetched {
        Some(user) if user.pin.matches(pin) => Ok(user),
        _ => Err("Invalid username or PIN."),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let pin = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already logged in: skip the form.
    let navigate_through = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate_through("/profile", NavigateOptions::default());
        }
    });

    let navigate_success = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let pin_value = pin.get();
        if let Err(message) = validate_login_input(&username_value, &pin_value) {
            error.set(message.to_owned());
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate_success = navigate_success.clone();
            leptos::task::spawn_local(async move {
                let fetched = crate::net::api::fetch_auth_user(&username_value).await;
                match login_outcome(fetched, &pin_value) {
                    Ok(user) => {
                        crate::util::session::save_session(&user);
                        auth.update(|a| a.set_user(user));
                        navigate_success("/profile", NavigateOptions::default());
                    }
                    Err(message) => {
                        error.set(message.to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate_success, username_value, pin_value);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Hello Friends"</h1>
                <p class="login-card__subtitle">"Sign in with your username and PIN"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input login-input--pin"
                        type="password"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="6-digit PIN"
                        prop:value=move || pin.get()
                        on:input=move |ev| pin.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}

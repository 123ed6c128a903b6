//! Full-page direct-mail inbox.
//!
//! The same inbox surface as the home modal, without the modal chrome.
//! Guests see their conversation with the admin; the admin identity gets
//! the dual roster/conversation view.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::message_modal::MessageInbox;
use crate::state::auth::AuthState;

#[component]
pub fn MessagesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    view! {
        <Show when=move || !auth.get().loading && auth.get().user.is_some()>
            <div class="messages-page">
                <Header/>
                <main class="messages-page__main">
                    <h2>"Messages"</h2>
                    <MessageInbox/>
                </main>
            </div>
        </Show>
    }
}

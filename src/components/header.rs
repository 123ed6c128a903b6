//! Top navigation header with the notification bell and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every authenticated route. Owns the notification poll so
//! the bell badge stays fresh regardless of which page is open.

use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::notification_modal::NotificationModal;
use crate::state::auth::AuthState;
use crate::state::modal::{ModalKind, ModalsState};
use crate::state::notifications::NotificationsState;

/// Notification poll interval.
#[cfg(feature = "hydrate")]
const NOTIFICATION_POLL_SECS: u64 = 60;

#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modals = expect_context::<RwSignal<ModalsState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    // Fetch once when the identity lands, then poll.
    let fetched_for = RwSignal::new(None::<String>);
    Effect::new(move || {
        let Some(user_id) = auth.get().user_id() else {
            return;
        };
        if fetched_for.get_untracked().as_deref() == Some(user_id.as_str()) {
            return;
        }
        fetched_for.set(Some(user_id.clone()));
        refresh_notifications(&user_id, notifications);
    });

    #[cfg(feature = "hydrate")]
    {
        let guard = crate::util::poll::spawn_poll(
            std::time::Duration::from_secs(NOTIFICATION_POLL_SECS),
            move || {
                if let Some(user_id) = auth.get_untracked().user_id() {
                    refresh_notifications(&user_id, notifications);
                }
            },
        );
        on_cleanup(move || guard.cancel());
    }

    let unread = move || notifications.get().unread_count();

    let on_bell = move |_| modals.update(|m| m.toggle_show(ModalKind::Notification));

    let on_logout = move |_| {
        crate::util::session::clear_session();
        auth.update(AuthState::clear);
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <header class="header">
            <span class="header__brand">"Hello Friends"</span>
            <nav class="header__nav">
                <a class="header__link" href="/">"Home"</a>
                <a class="header__link" href="/chat">"Chat"</a>
                <a class="header__link" href="/messages">"Messages"</a>
                <a class="header__link" href="/profile">"Profile"</a>
            </nav>
            <span class="header__spacer"></span>
            <button class="header__bell" on:click=on_bell title="Notifications">
                "🔔"
                <Show when=move || { unread() > 0 }>
                    <span class="header__badge">{unread}</span>
                </Show>
            </button>
            <span class="header__self">
                {move || auth.get().user.map(|u| u.username).unwrap_or_default()}
            </span>
            <button class="header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
        // Notification modal mounts with the header so the bell works on
        // every authenticated route.
        <Show when=move || modals.get().flags(ModalKind::Notification).open>
            <Modal kind=ModalKind::Notification>
                <NotificationModal/>
            </Modal>
        </Show>
    }
}

/// Re-fetch the notification list and replace it wholesale.
fn refresh_notifications(user_id: &str, notifications: RwSignal<NotificationsState>) {
    let user_id = user_id.to_owned();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let items = crate::net::api::fetch_notifications(&user_id).await;
        notifications.update(|n| n.replace(items));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, notifications);
    }
}

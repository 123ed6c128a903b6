//! Notification list modal with per-item and bulk mark-read.
//!
//! ERROR HANDLING
//! ==============
//! Local read flags flip only after the service acknowledges the write,
//! so a failed PATCH leaves the badge count honest.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::notifications::NotificationsState;

#[component]
pub fn NotificationModal() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    let on_mark_read = move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::mark_notification_read(&id).await {
                let read_at = crate::net::api::now_iso();
                notifications.update(|n| n.mark_read(&id, &read_at));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let on_mark_all = move |_| {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::mark_all_notifications_read(&user_id).await {
                let read_at = crate::net::api::now_iso();
                notifications.update(|n| n.mark_all_read(&read_at));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    view! {
        <div class="notification-modal">
            <div class="notification-modal__actions">
                <button
                    class="btn"
                    on:click=on_mark_all
                    disabled=move || notifications.get().unread_count() == 0
                >
                    "Mark all read"
                </button>
            </div>
            <Show
                when=move || !notifications.get().items.is_empty()
                fallback=move || view! { <p class="notification-modal__empty">"No notifications."</p> }
            >
                <ul class="notification-modal__list">
                    {move || {
                        notifications
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let id = item.id.clone();
                                view! {
                                    <li
                                        class="notification-modal__item"
                                        class=("notification-modal__item--unread", {
                                            let is_read = item.is_read;
                                            move || !is_read
                                        })
                                    >
                                        <span class="notification-modal__body">{item.body}</span>
                                        <span class="notification-modal__time">{item.created_at}</span>
                                        <Show when={
                                            let is_read = item.is_read;
                                            move || !is_read
                                        }>
                                            <button
                                                class="btn btn--small"
                                                on:click={
                                                    let id = id.clone();
                                                    move |_| on_mark_read(id.clone())
                                                }
                                            >
                                                "Mark read"
                                            </button>
                                        </Show>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </Show>
        </div>
    }
}

//! Chat page: room list, add-chatroom panel, and the message pane.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the chatroom inventory and the unread-count poll. Room-scoped
//! concerns (history fetch, realtime subscription, send form) live in
//! `components::message_box`.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::add_chatroom::AddChatroomPanel;
use crate::components::chat_list::ChatroomList;
use crate::components::header::Header;
use crate::components::message_box::MessageBox;
use crate::net::types::{Chatroom, User};
use crate::state::auth::AuthState;
use crate::state::chatroom::ChatroomState;

/// Unread-count poll interval.
#[cfg(feature = "hydrate")]
const UNREAD_POLL_SECS: u64 = 30;

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chatroom = expect_context::<RwSignal<ChatroomState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    let chatrooms = RwSignal::new(Vec::<Chatroom>::new());
    let friends = RwSignal::new(Vec::<User>::new());

    let load_rooms = move || {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let rooms = crate::net::api::fetch_chatrooms(&user_id).await;
            chatrooms.set(rooms);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    let refresh_unread = move || {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let counts = crate::net::api::fetch_unread_counts(&user_id).await;
            chatroom.update(|c| c.replace_unread_counts(&counts));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    // One-time load once the identity is restored.
    let loaded = RwSignal::new(false);
    Effect::new(move || {
        let Some(user) = auth.get().user else {
            return;
        };
        if loaded.get_untracked() {
            return;
        }
        loaded.set(true);
        load_rooms();
        refresh_unread();

        let group = user.friend_group.clone();
        let username = user.username.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let users = crate::net::api::fetch_users_by_group(&group, &username).await;
            friends.set(users);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (group, username);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        let guard = crate::util::poll::spawn_poll(
            std::time::Duration::from_secs(UNREAD_POLL_SECS),
            refresh_unread,
        );
        on_cleanup(move || guard.cancel());
    }

    // Leaving the page clears the selection so a revisit starts fresh.
    on_cleanup(move || chatroom.update(ChatroomState::clear_selection));

    view! {
        <Show when=move || !auth.get().loading && auth.get().user.is_some()>
            <div class="chat-page">
                <Header/>
                <div class="chat-page__layout">
                    <aside class="chat-page__sidebar">
                        <ChatroomList chatrooms=chatrooms.into()/>
                        <Show when=move || chatroom.get().showing_add>
                            <AddChatroomPanel
                                friends=friends.into()
                                on_created=Callback::new(move |()| load_rooms())
                            />
                        </Show>
                    </aside>
                    <main class="chat-page__main">
                        <MessageBox/>
                    </main>
                </div>
            </div>
        </Show>
    }
}

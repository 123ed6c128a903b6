//! Chatroom list with unread badges and the add-chatroom toggle.

use leptos::prelude::*;

use crate::net::types::Chatroom;
use crate::state::auth::AuthState;
use crate::state::chatroom::ChatroomState;

/// The user's chatrooms. Selecting a room zeroes its badge locally and
/// advances the service-side last-read timestamp.
#[component]
pub fn ChatroomList(chatrooms: Signal<Vec<Chatroom>>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chatroom = expect_context::<RwSignal<ChatroomState>>();

    let on_select = move |id: String| {
        chatroom.update(|c| c.select(id.clone()));
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !crate::net::api::enter_chatroom(&id, &user_id).await {
                leptos::logging::warn!("could not mark chatroom {id} read");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, user_id);
        }
    };

    view! {
        <div class="chat-list">
            <div class="chat-list__header">
                <span>"Chats"</span>
                <button
                    class="btn btn--small"
                    title="New chat"
                    on:click=move |_| chatroom.update(|c| c.showing_add = !c.showing_add)
                >
                    "+"
                </button>
            </div>
            <ul class="chat-list__items">
                {move || {
                    let state = chatroom.get();
                    chatrooms
                        .get()
                        .into_iter()
                        .map(|room| {
                            let unread = state.unread_count(&room.id);
                            let selected = state.selected.as_deref() == Some(room.id.as_str());
                            let id = room.id.clone();
                            let title = room.title.clone().unwrap_or_else(|| "Direct message".to_owned());
                            view! {
                                <li
                                    class="chat-list__item"
                                    class=("chat-list__item--selected", move || selected)
                                    on:click=move |_| on_select(id.clone())
                                >
                                    <span class="chat-list__title">{title}</span>
                                    <Show when=move || { unread > 0 }>
                                        <span class="chat-list__badge">{unread}</span>
                                    </Show>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

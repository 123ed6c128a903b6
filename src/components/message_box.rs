//! Message pane for the selected chatroom.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the per-room lifecycle: opening a room fetches its history and
//! subscribes to the room's broadcast topic; switching rooms or leaving
//! the page cancels the previous subscription before the next one starts.

use leptos::prelude::*;

use crate::components::chat_message_form::ChatMessageForm;
use crate::net::realtime::RealtimeGuard;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::chatroom::ChatroomState;

#[component]
pub fn MessageBox() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chatroom = expect_context::<RwSignal<ChatroomState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let subscription = StoredValue::new(None::<RealtimeGuard>);

    // Room change: drop the old subscription, reload, resubscribe.
    Effect::new(move || {
        let selected = chatroom.get().selected;

        if let Some(previous) = subscription.get_value() {
            previous.cancel();
            subscription.set_value(None);
        }
        chat.update(ChatState::clear);

        let Some(room_id) = selected else {
            return;
        };

        chat.update(|c| c.loading = true);
        #[cfg(feature = "hydrate")]
        {
            let fetch_room = room_id.clone();
            leptos::task::spawn_local(async move {
                let messages = crate::net::api::fetch_chat_messages(&fetch_room).await;
                chat.update(|c| c.replace(messages));
            });
            subscription.set_value(Some(crate::net::realtime::subscribe(&room_id, chat)));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = room_id;
        }
    });

    on_cleanup(move || {
        if let Some(guard) = subscription.get_value() {
            guard.cancel();
        }
    });

    let viewer_id = move || auth.get().user_id();

    view! {
        <div class="message-box">
            <Show
                when=move || chatroom.get().selected.is_some()
                fallback=move || view! { <p class="message-box__hint">"Pick a chat to start talking."</p> }
            >
                <Show
                    when=move || !chat.get().loading
                    fallback=move || view! { <p class="message-box__loading">"Loading messages..."</p> }
                >
                    <ul class="message-box__list">
                        {move || {
                            let viewer = viewer_id();
                            chat.get()
                                .messages
                                .into_iter()
                                .map(|message| {
                                    let mine = viewer.as_deref() == Some(message.author.id.as_str());
                                    view! {
                                        <li
                                            class="message-box__item"
                                            class=("message-box__item--sent", move || mine)
                                        >
                                            <span class="message-box__author">{message.author.username}</span>
                                            <span class="message-box__body">{message.body}</span>
                                            <span class="message-box__time">{message.created_at}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </Show>
                <ChatMessageForm/>
            </Show>
        </div>
    }
}

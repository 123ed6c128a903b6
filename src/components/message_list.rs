//! Read-only list of direct-mail messages in one conversation.

use leptos::prelude::*;

use crate::net::types::DirectMessage;

/// Chronological conversation view; the viewer's own messages render on
/// the sent side.
#[component]
pub fn DirectMessageList(
    messages: Signal<Vec<DirectMessage>>,
    viewer_id: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !messages.get().is_empty()
            fallback=move || view! { <p class="message-list__empty">"No messages yet."</p> }
        >
            <ul class="message-list">
                {move || {
                    let viewer = viewer_id.get();
                    messages
                        .get()
                        .into_iter()
                        .map(|message| {
                            let mine = viewer.as_deref() == Some(message.author.id.as_str());
                            view! {
                                <li
                                    class="message-list__item"
                                    class=("message-list__item--sent", move || mine)
                                >
                                    <span class="message-list__author">{message.author.username}</span>
                                    <span class="message-list__body">{message.body}</span>
                                    <span class="message-list__time">{message.created_at}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </Show>
    }
}

//! Chat send form with the post-send cooldown.
//!
//! DESIGN
//! ======
//! A send is two steps: persist the row, then broadcast the joined row on
//! the room's topic. The 10 second cooldown starts only when both steps
//! succeed; a persisted-but-unbroadcast message keeps the input and shows
//! an inline error so the author knows peers did not hear it live.

#[cfg(test)]
#[path = "chat_message_form_test.rs"]
mod chat_message_form_test;

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::chatroom::ChatroomState;
use crate::util::message::validate_message;

/// Seconds a sender must wait between successful sends.
#[cfg(feature = "hydrate")]
const SEND_COOLDOWN_SECS: u32 = 10;

/// Label for the send button given cooldown and in-flight state.
fn send_label(cooldown: u32, submitting: bool) -> String {
    if submitting {
        "Sending...".to_owned()
    } else if cooldown > 0 {
        format!("Wait {cooldown}s")
    } else {
        "Send".to_owned()
    }
}

#[component]
pub fn ChatMessageForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chatroom = expect_context::<RwSignal<ChatroomState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let body = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let cooldown = RwSignal::new(0_u32);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if chatroom.get_untracked().submitting || cooldown.get_untracked() > 0 {
            return;
        }
        let Some(room_id) = chatroom.get_untracked().selected else {
            return;
        };
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        let text = match validate_message(&body.get_untracked()) {
            Ok(text) => text,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };

        error.set(String::new());
        chatroom.update(|c| c.submitting = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            // The form may have unmounted during the await, disposing its
            // local signals; writes after this point must tolerate that.
            match send_message(chat, &room_id, &user_id, &text).await {
                Ok(()) => {
                    let _ = body.try_set(String::new());
                    start_cooldown(cooldown);
                }
                Err(e) => {
                    leptos::logging::warn!("chat send failed: {e}");
                    let _ = error.try_set(e);
                }
            }
            chatroom.update(|c| c.submitting = false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (room_id, user_id, text, chat);
            chatroom.update(|c| c.submitting = false);
        }
    };

    view! {
        <form class="chat-form" on:submit=on_submit>
            <input
                class="chat-form__input"
                type="text"
                placeholder="Say something..."
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
            />
            <button
                class="btn btn--primary"
                type="submit"
                disabled=move || { chatroom.get().submitting || cooldown.get() > 0 }
            >
                {move || send_label(cooldown.get(), chatroom.get().submitting)}
            </button>
            <Show when=move || !error.get().is_empty()>
                <p class="chat-form__error">{move || error.get()}</p>
            </Show>
        </form>
    }
}

/// Persist the message, re-fetch the joined row, append it locally, and
/// broadcast it to the room's topic.
#[cfg(feature = "hydrate")]
async fn send_message(
    chat: RwSignal<ChatState>,
    room_id: &str,
    user_id: &str,
    text: &str,
) -> Result<(), String> {
    let id = crate::net::api::insert_chat(room_id, user_id, text)
        .await
        .ok_or_else(|| "Message could not be sent.".to_owned())?;
    let Some(message) = crate::net::api::fetch_chat_by_id(&id).await else {
        return Err("Message saved but could not be loaded.".to_owned());
    };
    chat.update(|c| c.push_unique(message.clone()));

    crate::net::realtime::publish(room_id, &message)
        .await
        .map_err(|_| "Message saved but not broadcast. Try again shortly.".to_owned())
}

/// Count the cooldown down once per second so the button label ticks.
///
/// The countdown task outlives the event handler that spawned it, so
/// every signal access goes through [`cooldown_tick`], which stops the
/// loop once the form unmounts and the signal is disposed.
#[cfg(feature = "hydrate")]
fn start_cooldown(cooldown: RwSignal<u32>) {
    if cooldown.try_set(SEND_COOLDOWN_SECS).is_some() {
        return;
    }
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
            if !cooldown_tick(cooldown) {
                break;
            }
        }
    });
}

/// One countdown step. Returns `false` when the countdown has finished
/// or the signal's owner has been disposed, ending the loop either way.
#[cfg(any(test, feature = "hydrate"))]
fn cooldown_tick(cooldown: RwSignal<u32>) -> bool {
    let Some(remaining) = cooldown.try_get_untracked() else {
        return false;
    };
    if remaining == 0 {
        return false;
    }
    cooldown
        .try_update(|c| {
            *c = c.saturating_sub(1);
            *c > 0
        })
        .unwrap_or(false)
}

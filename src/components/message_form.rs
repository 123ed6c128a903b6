//! Compose form for direct-mail messages.
//!
//! DESIGN
//! ======
//! The recipient is a prop, not form state: guests always mail the admin
//! inbox (no recipient given), while the admin replies to whichever user
//! is selected in the dual view. On success the parent re-fetches the
//! conversation so both sides stay service-authoritative.

use leptos::prelude::*;

use crate::util::message::validate_message;

#[component]
pub fn DirectMessageForm(
    author_id: Signal<Option<String>>,
    recipient_id: Signal<Option<String>>,
    on_sent: Callback<()>,
) -> impl IntoView {
    let body = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let Some(author) = author_id.get_untracked() else {
            return;
        };
        let text = match validate_message(&body.get_untracked()) {
            Ok(text) => text,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let recipient = recipient_id.get_untracked();
        error.set(String::new());
        sending.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::insert_direct_message(&author, &text, recipient.as_deref()).await {
                Some(_) => {
                    body.set(String::new());
                    on_sent.run(());
                }
                None => error.set("Message could not be sent.".to_owned()),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (author, text, recipient);
            sending.set(false);
        }
    };

    view! {
        <form class="message-form" on:submit=on_submit>
            <textarea
                class="message-form__input"
                placeholder="Write a message..."
                prop:value=move || body.get()
                on:input=move |ev| body.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send" }}
            </button>
            <Show when=move || !error.get().is_empty()>
                <p class="message-form__error">{move || error.get()}</p>
            </Show>
        </form>
    }
}

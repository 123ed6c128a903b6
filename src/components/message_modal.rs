//! Direct-mail inbox surface, rendered in the home modal and on the
//! messages page.
//!
//! DESIGN
//! ======
//! Two inboxes share this surface. Guests see a single conversation with
//! the admin and can only mail the admin. The admin identity instead gets
//! a dual view: the full user roster with message counts on one side and
//! the selected user's conversation on the other, filtered locally from
//! one superset fetch per poll.

use leptos::prelude::*;

use crate::components::message_form::DirectMessageForm;
use crate::components::message_list::DirectMessageList;
use crate::components::user_list::AdminUserList;
use crate::net::types::DirectMessage;
use crate::state::auth::AuthState;
use crate::state::inbox::AdminInboxState;

/// Inbox poll interval. Direct mail is low-traffic; a slow poll is enough.
#[cfg(feature = "hydrate")]
const INBOX_POLL_SECS: u64 = 180;

/// Inbox surface that picks the guest or admin view for the current user.
#[component]
pub fn MessageInbox() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let is_admin = move || {
        auth.get()
            .user_id()
            .is_some_and(|id| crate::net::config::is_admin(&id))
    };

    view! {
        <Show when=is_admin fallback=move || view! { <GuestInbox/> }>
            <AdminInbox/>
        </Show>
    }
}

/// One conversation with the admin inbox; sends route there implicitly.
#[component]
fn GuestInbox() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let messages = RwSignal::new(Vec::<DirectMessage>::new());

    let refresh = move || {
        let Some(user_id) = auth.get_untracked().user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = crate::net::api::fetch_direct_messages(&user_id).await;
            messages.set(items);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user_id;
        }
    };

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if auth.get().user_id().is_none() || fetched.get_untracked() {
            return;
        }
        fetched.set(true);
        refresh();
    });

    #[cfg(feature = "hydrate")]
    {
        let guard =
            crate::util::poll::spawn_poll(std::time::Duration::from_secs(INBOX_POLL_SECS), refresh);
        on_cleanup(move || guard.cancel());
    }

    let viewer_id = Signal::derive(move || auth.get().user_id());

    view! {
        <div class="inbox inbox--guest">
            <DirectMessageList messages=messages.into() viewer_id=viewer_id/>
            <DirectMessageForm
                author_id=viewer_id
                recipient_id=Signal::derive(|| None)
                on_sent=Callback::new(move |()| refresh())
            />
        </div>
    }
}

/// Admin dual view: user roster plus the selected user's conversation.
#[component]
fn AdminInbox() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let inbox = RwSignal::new(AdminInboxState::default());

    let refresh = move || {
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let users = crate::net::api::fetch_users_by_group("0", &user.username).await;
            let messages = crate::net::api::fetch_all_direct_messages().await;
            inbox.update(|i| {
                i.users = users;
                i.replace_all_messages(messages);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = user;
        }
    };

    let fetched = RwSignal::new(false);
    Effect::new(move || {
        if auth.get().user_id().is_none() || fetched.get_untracked() {
            return;
        }
        fetched.set(true);
        refresh();
    });

    #[cfg(feature = "hydrate")]
    {
        let guard =
            crate::util::poll::spawn_poll(std::time::Duration::from_secs(INBOX_POLL_SECS), refresh);
        on_cleanup(move || guard.cancel());
    }

    let viewer_id = Signal::derive(move || auth.get().user_id());
    let conversation = Signal::derive(move || inbox.get().messages);
    let recipient_id = Signal::derive(move || inbox.get().selected.map(|u| u.id));

    view! {
        <div class="inbox inbox--admin">
            <div class="inbox__roster">
                <AdminUserList inbox=inbox/>
            </div>
            <div class="inbox__conversation">
                <Show
                    when=move || inbox.get().selected.is_some()
                    fallback=move || view! { <p class="inbox__hint">"Select a user to view their messages."</p> }
                >
                    <DirectMessageList messages=conversation viewer_id=viewer_id/>
                    <DirectMessageForm
                        author_id=viewer_id
                        recipient_id=recipient_id
                        on_sent=Callback::new(move |()| refresh())
                    />
                </Show>
            </div>
        </div>
    }
}

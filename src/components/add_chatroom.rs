//! Add-chatroom panel: pick friends, name the room, create or reuse.
//!
//! DESIGN
//! ======
//! One friend selected means a direct-message pairing: pairings are
//! unique, so an existing room is reopened instead of duplicated. Two or
//! more friends means a group: groups may repeat a member set but never a
//! title, so a title collision is rejected outright.

#[cfg(test)]
#[path = "add_chatroom_test.rs"]
mod add_chatroom_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::auth::AuthState;
use crate::state::chatroom::ChatroomState;

/// What the create flow should do given the existing-room lookup result.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
enum AddDecision {
    /// Direct pairing already exists; open it.
    OpenExisting(String),
    /// A group with this exact title already exists; refuse.
    DuplicateTitle,
    CreateNew,
}

#[cfg(any(test, feature = "hydrate"))]
fn decide(is_group: bool, existing: Option<String>) -> AddDecision {
    match existing {
        Some(id) if !is_group => AddDecision::OpenExisting(id),
        Some(_) => AddDecision::DuplicateTitle,
        None => AddDecision::CreateNew,
    }
}

/// Toggle a friend in or out of the selection.
fn toggle_selection(selected: &mut Vec<String>, user_id: &str) {
    if let Some(position) = selected.iter().position(|id| id == user_id) {
        selected.remove(position);
    } else {
        selected.push(user_id.to_owned());
    }
}

/// Default group title: every member's username, sorted, comma-joined.
fn default_group_title(own_username: &str, selected: &[&User]) -> String {
    let mut names: Vec<&str> = selected.iter().map(|u| u.username.as_str()).collect();
    names.push(own_username);
    names.sort_unstable();
    names.join(", ")
}

#[component]
pub fn AddChatroomPanel(friends: Signal<Vec<User>>, on_created: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let chatroom = expect_context::<RwSignal<ChatroomState>>();

    let selected = RwSignal::new(Vec::<String>::new());
    let title_input = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());

    let on_create = move |_| {
        if chatroom.get_untracked().submitting {
            return;
        }
        let Some(user) = auth.get_untracked().user else {
            return;
        };
        let selected_ids = selected.get_untracked();
        if selected_ids.is_empty() {
            error.set("Pick at least one friend.".to_owned());
            return;
        }

        let friend_rows = friends.get_untracked();
        let picked: Vec<&User> = friend_rows
            .iter()
            .filter(|f| selected_ids.contains(&f.id))
            .collect();
        let is_group = picked.len() > 1;
        let title = if is_group {
            let typed = title_input.get_untracked().trim().to_owned();
            Some(if typed.is_empty() { default_group_title(&user.username, &picked) } else { typed })
        } else {
            None
        };

        let mut member_ids: Vec<String> = selected_ids;
        member_ids.push(user.id.clone());

        error.set(String::new());
        chatroom.update(|c| c.submitting = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let existing =
                crate::net::api::find_existing_chatroom(&member_ids, title.as_deref()).await;
            match decide(is_group, existing) {
                AddDecision::OpenExisting(id) => {
                    chatroom.update(|c| {
                        c.submitting = false;
                        c.showing_add = false;
                        c.select(id);
                    });
                    selected.set(Vec::new());
                    title_input.set(String::new());
                }
                AddDecision::DuplicateTitle => {
                    error.set("A group with this title already exists.".to_owned());
                    chatroom.update(|c| c.submitting = false);
                }
                AddDecision::CreateNew => match create_room(title.as_deref(), &member_ids).await {
                    Ok(id) => {
                        chatroom.update(|c| {
                            c.submitting = false;
                            c.showing_add = false;
                            c.select(id);
                        });
                        selected.set(Vec::new());
                        title_input.set(String::new());
                        on_created.run(());
                    }
                    Err(e) => {
                        leptos::logging::warn!("chatroom create failed: {e}");
                        error.set("Chat could not be created.".to_owned());
                        chatroom.update(|c| c.submitting = false);
                    }
                },
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (is_group, member_ids, title);
            chatroom.update(|c| c.submitting = false);
        }
    };

    view! {
        <div class="add-chatroom">
            <h3>"New chat"</h3>
            <ul class="add-chatroom__friends">
                {move || {
                    friends
                        .get()
                        .into_iter()
                        .map(|friend| {
                            let id = friend.id.clone();
                            let checked_id = friend.id.clone();
                            view! {
                                <li class="add-chatroom__friend">
                                    <label>
                                        <input
                                            type="checkbox"
                                            prop:checked=move || selected.get().contains(&checked_id)
                                            on:change=move |_| {
                                                selected.update(|s| toggle_selection(s, &id));
                                            }
                                        />
                                        {friend.username}
                                    </label>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
            <Show when=move || { selected.get().len() > 1 }>
                <input
                    class="add-chatroom__title"
                    type="text"
                    placeholder="Group name (optional)"
                    prop:value=move || title_input.get()
                    on:input=move |ev| title_input.set(event_target_value(&ev))
                />
            </Show>
            <button
                class="btn btn--primary"
                on:click=on_create
                disabled=move || chatroom.get().submitting
            >
                "Create"
            </button>
            <Show when=move || !error.get().is_empty()>
                <p class="add-chatroom__error">{move || error.get()}</p>
            </Show>
        </div>
    }
}

/// Create the room row, then its member rows.
#[cfg(feature = "hydrate")]
async fn create_room(title: Option<&str>, member_ids: &[String]) -> Result<String, String> {
    let id = crate::net::api::insert_chatroom(title)
        .await
        .ok_or_else(|| "chatroom insert failed".to_owned())?;
    crate::net::api::insert_chatroom_members(&id, member_ids).await?;
    Ok(id)
}

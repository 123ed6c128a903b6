//! Admin-side user roster for the direct-mail dual view.

use leptos::prelude::*;

use crate::state::inbox::AdminInboxState;

/// Every user with their total message count; clicking toggles the
/// selected conversation.
#[component]
pub fn AdminUserList(inbox: RwSignal<AdminInboxState>) -> impl IntoView {
    view! {
        <ul class="user-list">
            {move || {
                let state = inbox.get();
                let selected_id = state.selected.as_ref().map(|u| u.id.clone());
                state
                    .users
                    .iter()
                    .map(|user| {
                        let count = state.message_count(&user.id);
                        let is_selected = selected_id.as_deref() == Some(user.id.as_str());
                        let user = user.clone();
                        let user_click = user.clone();
                        view! {
                            <li
                                class="user-list__item"
                                class=("user-list__item--selected", move || is_selected)
                                on:click=move |_| inbox.update(|i| i.toggle_user(&user_click))
                            >
                                <span class="user-list__name">{user.username}</span>
                                <span class="user-list__count">{count}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </ul>
    }
}

//! Profile page showing the logged-in identity.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    // Render from the credential-free projection; `from` is the only
    // extra column worth showing.
    let display = move || auth.get().user.map(|u| (u.display(), u.from));

    view! {
        <Show when=move || !auth.get().loading && auth.get().user.is_some()>
            <div class="profile-page">
                <Header/>
                <main class="profile-page__card">
                    {move || {
                        display()
                            .map(|(user, from)| {
                                view! {
                                    <div class="profile-page__identity">
                                        <Show when={
                                            let has_pic = !user.profile_pic.is_empty();
                                            move || has_pic
                                        }>
                                            <img
                                                class="profile-page__avatar"
                                                src=user.profile_pic.clone()
                                                alt="Profile picture"
                                            />
                                        </Show>
                                        <h2>{user.username.clone()}</h2>
                                        <p class="profile-page__from">"From: " {from}</p>
                                        <p class="profile-page__group">
                                            "Friend group: "
                                            {if user.friend_group == "0" {
                                                "everyone".to_owned()
                                            } else {
                                                user.friend_group.clone()
                                            }}
                                        </p>
                                    </div>
                                }
                            })
                    }}
                </main>
            </div>
        </Show>
    }
}

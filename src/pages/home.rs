//! Home page with the four feature-modal launchers.
//!
//! Tracker and Account are placeholder surfaces; their modals carry the
//! shared chrome but no feature body yet.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::components::message_modal::MessageInbox;
use crate::components::modal::Modal;
use crate::state::auth::AuthState;
use crate::state::modal::{ModalKind, ModalsState};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let modals = expect_context::<RwSignal<ModalsState>>();
    let navigate = use_navigate();

    crate::util::auth::install_unauth_redirect(auth, navigate);

    let open = move |kind: ModalKind| modals.update(|m| m.open(kind));
    let is_open = move |kind: ModalKind| modals.get().flags(kind).open;

    view! {
        <Show when=move || !auth.get().loading && auth.get().user.is_some()>
            <div class="home-page">
                <Header/>
                <div class="home-page__launchers">
                    {ModalKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button class="home-page__launcher" on:click=move |_| open(kind)>
                                    {kind.title()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <Show when=move || is_open(ModalKind::Message)>
                    <Modal kind=ModalKind::Message>
                        <MessageInbox/>
                    </Modal>
                </Show>
                <Show when=move || is_open(ModalKind::Tracker)>
                    <Modal kind=ModalKind::Tracker>
                        <p class="modal__placeholder">"Tracker is coming soon."</p>
                    </Modal>
                </Show>
                <Show when=move || is_open(ModalKind::Account)>
                    <Modal kind=ModalKind::Account>
                        <p class="modal__placeholder">"Account settings are coming soon."</p>
                    </Modal>
                </Show>
            </div>
        </Show>
    }
}

//! Shared chrome for the home-screen feature modals.
//!
//! DESIGN
//! ======
//! The chrome owns the title bar and the minimize/close controls; the
//! parent decides whether the modal is mounted at all (wrapping it in a
//! `Show` on the open flag), so a closed modal holds no subscriptions or
//! poll loops.

use leptos::prelude::*;

use crate::state::modal::{ModalKind, ModalsState};

/// Title bar plus body for one feature modal. Minimizing collapses the
/// body; closing resets the minimized flag via [`ModalsState::close`].
#[component]
pub fn Modal(kind: ModalKind, children: Children) -> impl IntoView {
    let modals = expect_context::<RwSignal<ModalsState>>();

    let minimized = move || modals.get().flags(kind).minimized;

    view! {
        <div
            class="modal"
            class=("modal--minimized", minimized)
            role="dialog"
            aria-label=kind.title()
        >
            <div class="modal__titlebar">
                <span class="modal__title">{kind.title()}</span>
                <button
                    class="modal__control"
                    title="Minimize"
                    on:click=move |_| modals.update(|m| m.toggle_minimize(kind))
                >
                    {move || if minimized() { "▢" } else { "–" }}
                </button>
                <button
                    class="modal__control"
                    title="Close"
                    on:click=move |_| modals.update(|m| m.close(kind))
                >
                    "✕"
                </button>
            </div>
            // Body stays mounted while minimized so its state survives.
            <div class="modal__body" style:display=move || if minimized() { "none" } else { "" }>
                {children()}
            </div>
        </div>
    }
}

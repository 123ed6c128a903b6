//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    chat::ChatPage, home::HomePage, login::LoginPage, messages::MessagesPage, profile::ProfilePage,
};
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::chatroom::ChatroomState;
use crate::state::modal::ModalsState;
use crate::state::notifications::NotificationsState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, restores the stored session, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let modals = RwSignal::new(ModalsState::default());
    let chatroom = RwSignal::new(ChatroomState::default());
    let chat = RwSignal::new(ChatState::default());
    let notifications = RwSignal::new(NotificationsState::default());

    provide_context(auth);
    provide_context(modals);
    provide_context(chatroom);
    provide_context(chat);
    provide_context(notifications);

    // Session restore runs exactly once, before any route guard fires.
    Effect::new(move || {
        if !auth.get_untracked().loading {
            return;
        }
        auth.update(|a| a.restore(crate::util::session::load_session()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hello-friends.css"/>
        <Title text="Hello Friends"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=StaticSegment("messages") view=MessagesPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
            </Routes>
        </Router>
    }
}

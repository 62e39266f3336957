//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{callback::CallbackPage, chat::ChatPage, home::HomePage};
use crate::state::auth::{self, AuthState};
use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;
use crate::state::ui::UiState;

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
/// Provides all shared state contexts, installs the session reconciler, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth_session = RwSignal::new(AuthState::default());
    let conversations = RwSignal::new(ConversationsState::default());
    let chat = RwSignal::new(ChatState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth_session);
    provide_context(conversations);
    provide_context(chat);
    provide_context(ui);

    // Reconcile the persisted auth snapshot against the live provider
    // session once at the root; pages only observe the settled signal.
    auth::install_session_reconciler(auth_session);

    view! {
        <Stylesheet id="leptos" href="/pkg/novachat.css"/>
        <Title text="AI Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("chat") view=ChatPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("callback")) view=CallbackPage/>
            </Routes>
        </Router>
    }
}

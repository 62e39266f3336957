//! Chat page wiring the session, conversation, and message controllers.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It owns no business state:
//! readiness gating (auth -> list -> messages) happens through the state
//! modules' guarded operations, and every mount-sensitive trigger here is
//! protected by a session-scoped one-shot so remounts repeat no network
//! effects.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::chat_window::ChatWindow;
use crate::components::conversation_list::ConversationList;
use crate::components::delete_dialog::DeleteConversationDialog;
use crate::config::OidcConfig;
use crate::net::types::Conversation;
use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::conversations::ConversationsState;
use crate::state::ui::UiState;
use crate::state::{auth as auth_session, chat as message_exchange, conversations as lifecycle};

/// Title for a manually created conversation, stamped with the local date
/// when one is available.
#[must_use]
pub fn new_chat_title(date_label: &str) -> String {
    if date_label.is_empty() {
        "New Chat".to_owned()
    } else {
        format!("New Chat {date_label}")
    }
}

fn local_date_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_locale_date_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Chat page: sidebar with the conversation list, main message column.
#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let chat = expect_context::<RwSignal<ChatState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    // Back to the sign-in landing once auth settles without a session.
    crate::util::auth::install_unauth_redirect(auth, use_navigate());

    // Initial list load, once per authenticated session regardless of how
    // many times this effect observes the session.
    Effect::new(move || {
        if auth.get().is_authenticated {
            lifecycle::load_conversations(auth, conversations, chat);
        }
    });

    lifecycle::install_auto_create(auth, conversations);

    // Selection drives the message pane: reload on change, clear when no
    // conversation is current.
    let last_loaded = RwSignal::new(None::<i64>);
    Effect::new(move || {
        let current_id = conversations.with(|s| s.current.as_ref().map(|c| c.id));
        if last_loaded.get_untracked() == current_id {
            return;
        }
        last_loaded.set(current_id);
        match current_id {
            Some(id) => message_exchange::load_messages(auth, conversations, chat, id),
            None => chat.update(ChatState::clear_messages),
        }
    });

    let on_select = Callback::new(move |conversation: Conversation| {
        conversations.update(|s| s.select(conversation));
    });

    let on_send = Callback::new(move |text: String| {
        message_exchange::send_message(auth, conversations, chat, text);
    });

    let delete_target = RwSignal::new(None::<i64>);
    let on_delete_request = Callback::new(move |id: i64| delete_target.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_target.set(None));

    let on_new_chat = move |_| {
        lifecycle::create_conversation(auth, conversations, new_chat_title(&local_date_label()));
    };

    let on_logout = move |_| {
        auth_session::teardown_session(auth);
        conversations.update(ConversationsState::reset_for_logout);
        chat.update(ChatState::reset_for_logout);
        crate::net::oidc::signout_redirect(&OidcConfig::default());
    };

    let profile_email = move || {
        auth.get()
            .profile
            .map(|p| p.email)
            .unwrap_or_default()
    };

    let current_title = move || {
        conversations
            .get()
            .current
            .map_or_else(|| "New conversation".to_owned(), |c| c.title)
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=move || {
                view! {
                    <div class="chat-page chat-page--loading">
                        <div class="spinner" aria-label="Loading"></div>
                    </div>
                }
            }
        >
            <Show
                when=move || auth.get().is_authenticated
                fallback=move || {
                    view! {
                        <div class="chat-page chat-page--unauthenticated">
                            <h1>"Authentication Required"</h1>
                            <p>"Redirecting to sign-in..."</p>
                        </div>
                    }
                }
            >
                <div class="chat-page">
                    <Show when=move || ui.get().sidebar_open>
                        <div class="chat-page__overlay" on:click=move |_| ui.update(|u| u.sidebar_open = false)></div>
                    </Show>

                    <aside class="sidebar" class:sidebar--open=move || ui.get().sidebar_open>
                        <div class="sidebar__header">
                            <button
                                class="btn sidebar__new-chat"
                                disabled=move || conversations.get().create_pending
                                on:click=on_new_chat
                            >
                                "+ New chat"
                            </button>
                        </div>
                        <div class="sidebar__list">
                            <ConversationList on_select=on_select on_delete_request=on_delete_request/>
                        </div>
                        <div class="sidebar__footer">
                            <span class="sidebar__email">{profile_email}</span>
                            <button class="btn sidebar__logout" on:click=on_logout title="Logout">
                                "Logout"
                            </button>
                        </div>
                    </aside>

                    <div class="chat-page__main">
                        <header class="chat-page__topbar">
                            <button
                                class="btn chat-page__sidebar-toggle"
                                on:click=move |_| ui.update(UiState::toggle_sidebar)
                                title="Toggle sidebar"
                            >
                                {move || if ui.get().sidebar_open { "‹" } else { "›" }}
                            </button>
                            <h1 class="chat-page__title">{current_title}</h1>
                            <span class="chat-page__model">"Nova Pro"</span>
                        </header>

                        <Show when=move || conversations.get().error.is_some()>
                            <div class="chat-page__error">
                                <p>{move || conversations.get().error.unwrap_or_default()}</p>
                            </div>
                        </Show>

                        <ChatWindow on_send=on_send/>
                    </div>

                    <Show when=move || delete_target.get().is_some()>
                        <DeleteConversationDialog conversation_id=delete_target on_cancel=on_delete_cancel/>
                    </Show>
                </div>
            </Show>
        </Show>
    }
}

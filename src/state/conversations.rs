//! Conversation-list state and lifecycle orchestration.
//!
//! DESIGN
//! ======
//! The list and the `current` pointer are owned here exclusively; the
//! message pane reacts to `current` changing but never mutates it. All
//! transition decisions are pure methods on [`ConversationsState`] so the
//! idempotence guards are testable without a browser; the async wrappers
//! below only thread network results back through them.

#[cfg(test)]
#[path = "conversations_test.rs"]
mod conversations_test;

use crate::error::ClientError;
use crate::net::types::{Conversation, ConversationStatus};

/// Title used by the one-shot auto-created conversation.
pub const WELCOME_CHAT_TITLE: &str = "Welcome Chat";

/// Conversation list, current pointer, and the session-scoped guard flags.
#[derive(Clone, Debug, Default)]
pub struct ConversationsState {
    /// Server-ordered working set, most recent first. May contain rows the
    /// server has since soft-deleted until the next reload.
    pub items: Vec<Conversation>,
    /// The conversation the message view is bound to, if any. Always a
    /// member of `items` once a load has completed.
    pub current: Option<Conversation>,
    /// One-in-flight guard for list fetches.
    pub loading: bool,
    /// Monotonic per-session flag: the initial load has been triggered.
    pub loaded_once: bool,
    /// One-in-flight guard for creates.
    pub create_pending: bool,
    /// Monotonic per-session flag: auto-creation has fired.
    pub auto_created: bool,
    /// Page-level error string, replaced by each new failure.
    pub error: Option<String>,
}

impl ConversationsState {
    /// The ACTIVE working set in list order.
    #[must_use]
    pub fn active(&self) -> Vec<Conversation> {
        self.items
            .iter()
            .filter(|c| c.status == ConversationStatus::Active)
            .cloned()
            .collect()
    }

    /// Arm the initial list load. Keyed on `loaded_once`, not on the
    /// result, so any number of mount points can call this and exactly one
    /// fetch goes out per session.
    pub fn begin_initial_load(&mut self) -> bool {
        if self.loaded_once {
            return false;
        }
        self.loaded_once = true;
        self.loading = true;
        true
    }

    /// Arm an explicit reload (the post-delete refresh path). Bypasses
    /// `loaded_once` but still one-in-flight.
    pub fn begin_refresh(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Apply a settled list fetch. Failure leaves the previous list
    /// untouched. Returns true when a dangling `current` was cleared and
    /// the message pane must be emptied.
    pub fn finish_load(&mut self, result: Result<Vec<Conversation>, String>) -> bool {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
                let dangling = self
                    .current
                    .as_ref()
                    .is_some_and(|current| !self.items.iter().any(|c| c.id == current.id));
                if dangling {
                    self.current = None;
                }
                dangling
            }
            Err(cause) => {
                self.error = Some(ClientError::ConversationLoadFailed(cause).to_string());
                false
            }
        }
    }

    /// Arm a create request. No-op when one is already in flight.
    pub fn begin_create(&mut self) -> bool {
        if self.create_pending {
            return false;
        }
        self.create_pending = true;
        true
    }

    /// Apply a settled create. Success inserts at the head (most recent
    /// first) and makes the new conversation current.
    pub fn finish_create(&mut self, result: Result<Conversation, String>) {
        self.create_pending = false;
        match result {
            Ok(conversation) => {
                self.items.insert(0, conversation.clone());
                self.current = Some(conversation);
                self.error = None;
            }
            Err(cause) => {
                self.error = Some(ClientError::ConversationCreateFailed(cause).to_string());
            }
        }
    }

    /// Point the message view at `conversation`. Pure local change, no
    /// network. Callers must only pass members of the rendered list;
    /// anything else is a contract violation with undefined results.
    pub fn select(&mut self, conversation: Conversation) {
        self.current = Some(conversation);
    }

    /// Apply a resolved server-side delete. The list itself is not
    /// filtered here: the server owns the ACTIVE filter and the caller
    /// triggers a refresh, so the row may stay visible until that reload.
    /// Returns true when the deleted conversation was current (the pointer
    /// is cleared and the message pane must be emptied).
    pub fn resolve_delete(&mut self, conversation_id: i64) -> bool {
        let was_current = self.current.as_ref().is_some_and(|c| c.id == conversation_id);
        if was_current {
            self.current = None;
        }
        was_current
    }

    /// Record a failed delete, leaving list and pointer untouched.
    pub fn record_delete_failure(&mut self, cause: String) {
        self.error = Some(ClientError::ConversationDeleteFailed(cause).to_string());
    }

    /// Auto-creation precondition: authenticated, the initial load has
    /// settled, nothing to show, nothing selected, and the one-shot has
    /// not fired this session.
    #[must_use]
    pub fn should_auto_create(&self, authenticated: bool) -> bool {
        authenticated
            && self.loaded_once
            && !self.loading
            && self.items.is_empty()
            && self.current.is_none()
            && !self.auto_created
    }

    /// Arm the auto-create one-shot. The flag is monotonic for the whole
    /// session: a later delete that empties the list must not re-trigger
    /// creation.
    pub fn begin_auto_create(&mut self, authenticated: bool) -> bool {
        if !self.should_auto_create(authenticated) {
            return false;
        }
        self.auto_created = true;
        true
    }

    /// Full reset on session teardown; the next login starts the guards
    /// from scratch.
    pub fn reset_for_logout(&mut self) {
        *self = Self::default();
    }
}

#[cfg(feature = "hydrate")]
fn bearer_token(auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>) -> Option<String> {
    use leptos::prelude::GetUntracked;

    let live = auth.get_untracked();
    if !live.is_authenticated {
        return None;
    }
    live.access_token
}

/// Trigger the once-per-session conversation list load. Safe to call from
/// any number of mount points; only the first armed call fetches.
pub fn load_conversations(
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    conversations: leptos::prelude::RwSignal<ConversationsState>,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let Some(token) = bearer_token(auth) else {
            return;
        };
        let started = conversations
            .try_update(ConversationsState::begin_initial_load)
            .unwrap_or(false);
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let api = crate::config::ApiConfig::default();
            let result = crate::net::api::fetch_conversations(&api, &token).await;
            apply_load_result(conversations, chat, result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, conversations, chat);
    }
}

/// Trigger an explicit authoritative reload (the post-delete refresh).
pub fn refresh_conversations(
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    conversations: leptos::prelude::RwSignal<ConversationsState>,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let Some(token) = bearer_token(auth) else {
            return;
        };
        let started = conversations.try_update(ConversationsState::begin_refresh).unwrap_or(false);
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let api = crate::config::ApiConfig::default();
            let result = crate::net::api::fetch_conversations(&api, &token).await;
            apply_load_result(conversations, chat, result);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, conversations, chat);
    }
}

#[cfg(feature = "hydrate")]
fn apply_load_result(
    conversations: leptos::prelude::RwSignal<ConversationsState>,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    result: Result<Vec<Conversation>, String>,
) {
    use leptos::prelude::*;

    let current_cleared = conversations
        .try_update(|s| s.finish_load(result))
        .unwrap_or(false);
    if current_cleared {
        chat.update(crate::state::chat::ChatState::clear_messages);
    }
}

/// Create a conversation and make it current. No-op while a create is in
/// flight.
pub fn create_conversation(
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    conversations: leptos::prelude::RwSignal<ConversationsState>,
    title: String,
) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let Some(token) = bearer_token(auth) else {
            return;
        };
        let started = conversations.try_update(ConversationsState::begin_create).unwrap_or(false);
        if !started {
            return;
        }
        leptos::task::spawn_local(async move {
            let api = crate::config::ApiConfig::default();
            let result = crate::net::api::create_conversation(&api, &token, &title).await;
            conversations.update(|s| s.finish_create(result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, conversations, title);
    }
}

/// Delete a conversation server-side, then trigger the authoritative
/// refresh. The local list is never filtered optimistically; until the
/// refresh lands the row may still be rendered, but it is never current
/// once the delete has resolved.
pub fn delete_conversation(
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    conversations: leptos::prelude::RwSignal<ConversationsState>,
    chat: leptos::prelude::RwSignal<crate::state::chat::ChatState>,
    conversation_id: i64,
) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let Some(token) = bearer_token(auth) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let api = crate::config::ApiConfig::default();
            match crate::net::api::delete_conversation(&api, &token, conversation_id).await {
                Ok(()) => {
                    let was_current = conversations
                        .try_update(|s| s.resolve_delete(conversation_id))
                        .unwrap_or(false);
                    if was_current {
                        chat.update(crate::state::chat::ChatState::clear_messages);
                    }
                    refresh_conversations(auth, conversations, chat);
                }
                Err(cause) => conversations.update(|s| s.record_delete_failure(cause)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, conversations, chat, conversation_id);
    }
}

/// Install the one-shot auto-create effect: when the session is
/// authenticated and the settled list is empty, create the welcome
/// conversation exactly once.
pub fn install_auto_create(
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    conversations: leptos::prelude::RwSignal<ConversationsState>,
) {
    use leptos::prelude::*;

    Effect::new(move || {
        let authenticated = auth.get().is_authenticated;
        let ready = conversations.with(|s| s.should_auto_create(authenticated));
        if !ready {
            return;
        }
        // Arm without notifying: this effect tracks the state it mutates.
        let fired = conversations
            .try_update_untracked(|s| s.begin_auto_create(authenticated))
            .unwrap_or(false);
        if fired {
            create_conversation(auth, conversations, WELCOME_CHAT_TITLE.to_owned());
        }
    });
}

//! Message-exchange state for the active conversation.
//!
//! DESIGN
//! ======
//! One send may be in flight at a time (`Idle -> Sending -> Idle`); a second
//! request is rejected, not queued. The conversation id captured at send
//! time keys the stale-response guard: results that arrive after the user
//! switched conversations are discarded wholesale rather than aborted
//! mid-flight. History loads use the same captured-id discipline.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::error::ClientError;
use crate::net::types::{Message, SendMessageResponse};

/// Message sequence plus in-flight exchange state.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Append-only, chronological sequence for the current conversation.
    /// The pending assistant bubble is a view projection of `sending` and
    /// never stored here.
    pub messages: Vec<Message>,
    /// True while a send exchange is in flight.
    pub sending: bool,
    /// Conversation id captured when the in-flight send started.
    pub sending_conversation_id: Option<i64>,
    /// True while a history load is in flight.
    pub loading: bool,
    /// Chat-scoped error string; send failures land here, never on the
    /// conversation list.
    pub error: Option<String>,
}

impl ChatState {
    /// Accept or reject a send. Returns the trimmed content when accepted;
    /// `None` (with no state change) when a send is already in flight or
    /// the text trims to empty.
    pub fn begin_send(&mut self, conversation_id: i64, text: &str) -> Option<String> {
        if self.sending {
            return None;
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        self.sending = true;
        self.sending_conversation_id = Some(conversation_id);
        self.error = None;
        Some(trimmed.to_owned())
    }

    /// Apply a settled send exchange. The result only lands when the
    /// conversation it targeted is still current; otherwise it is
    /// discarded. Success appends the persisted user message and the
    /// assistant reply; failure appends nothing.
    pub fn finish_send(
        &mut self,
        sent_conversation_id: i64,
        current_conversation_id: Option<i64>,
        result: Result<SendMessageResponse, String>,
    ) {
        self.sending = false;
        self.sending_conversation_id = None;
        if current_conversation_id != Some(sent_conversation_id) {
            return;
        }
        match result {
            Ok(exchange) => {
                self.messages.push(exchange.user_message);
                self.messages.push(exchange.assistant_message);
            }
            Err(cause) => {
                self.error = Some(ClientError::MessageSendFailed(cause).to_string());
            }
        }
    }

    /// Start a wholesale history reload for a newly selected conversation.
    pub fn begin_history_load(&mut self) {
        self.messages.clear();
        self.loading = true;
        self.error = None;
    }

    /// Apply a settled history load, keyed by the conversation id the
    /// request targeted. Stale results (selection moved on) are discarded
    /// without touching the replacement load's state.
    pub fn finish_history_load(
        &mut self,
        requested_conversation_id: i64,
        current_conversation_id: Option<i64>,
        result: Result<Vec<Message>, String>,
    ) {
        if current_conversation_id != Some(requested_conversation_id) {
            return;
        }
        self.loading = false;
        match result {
            Ok(messages) => self.messages = messages,
            Err(cause) => {
                self.error = Some(ClientError::MessageHistoryLoadFailed(cause).to_string());
            }
        }
    }

    /// Empty the pane when no conversation is current.
    pub fn clear_messages(&mut self) {
        self.messages.clear();
        self.loading = false;
        self.error = None;
    }

    /// Full reset on session teardown.
    pub fn reset_for_logout(&mut self) {
        *self = Self::default();
    }
}

/// Send `text` on the current conversation. Rejected without state change
/// while another send is in flight or when the text trims to empty.
pub fn send_message(
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    conversations: leptos::prelude::RwSignal<crate::state::conversations::ConversationsState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    text: String,
) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let live = auth.get_untracked();
        if !live.is_authenticated {
            return;
        }
        let Some(token) = live.access_token else {
            return;
        };
        let Some(conversation_id) = conversations.get_untracked().current.map(|c| c.id) else {
            return;
        };
        let Some(content) = chat
            .try_update(|c| c.begin_send(conversation_id, &text))
            .flatten()
        else {
            return;
        };
        leptos::task::spawn_local(async move {
            let api = crate::config::ApiConfig::default();
            let result = crate::net::api::send_message(&api, &token, conversation_id, &content).await;
            let now_current = conversations.get_untracked().current.map(|c| c.id);
            chat.update(|c| c.finish_send(conversation_id, now_current, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, conversations, chat, text);
    }
}

/// Reload the message history for `conversation_id` (selection changed or a
/// conversation was just created).
pub fn load_messages(
    auth: leptos::prelude::RwSignal<crate::state::auth::AuthState>,
    conversations: leptos::prelude::RwSignal<crate::state::conversations::ConversationsState>,
    chat: leptos::prelude::RwSignal<ChatState>,
    conversation_id: i64,
) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let live = auth.get_untracked();
        if !live.is_authenticated {
            return;
        }
        let Some(token) = live.access_token else {
            return;
        };
        chat.update(ChatState::begin_history_load);
        leptos::task::spawn_local(async move {
            let api = crate::config::ApiConfig::default();
            let result = crate::net::api::fetch_messages(&api, &token, conversation_id).await;
            let now_current = conversations.get_untracked().current.map(|c| c.id);
            chat.update(|c| c.finish_history_load(conversation_id, now_current, result));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, conversations, chat, conversation_id);
    }
}

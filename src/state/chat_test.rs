use super::*;
use crate::net::types::MessageRole;

fn message(id: i64, role: MessageRole, content: &str) -> Message {
    Message {
        id,
        role,
        content: content.to_owned(),
        created_at: "2025-06-01T10:00:00Z".to_owned(),
        tokens: None,
        processing_time_ms: None,
        model_version: None,
    }
}

fn exchange(user_id: i64, assistant_id: i64) -> SendMessageResponse {
    SendMessageResponse {
        user_message: message(user_id, MessageRole::User, "question"),
        assistant_message: message(assistant_id, MessageRole::Assistant, "answer"),
    }
}

// =============================================================
// Send acceptance
// =============================================================

#[test]
fn begin_send_trims_and_accepts() {
    let mut state = ChatState::default();
    let accepted = state.begin_send(1, "  hello  ");
    assert_eq!(accepted.as_deref(), Some("hello"));
    assert!(state.sending);
    assert_eq!(state.sending_conversation_id, Some(1));
}

#[test]
fn begin_send_rejects_blank_text_without_state_change() {
    let mut state = ChatState::default();
    assert!(state.begin_send(1, "   ").is_none());
    assert!(!state.sending);
    assert!(state.sending_conversation_id.is_none());
}

#[test]
fn begin_send_clears_previous_error() {
    let mut state = ChatState {
        error: Some("Failed to send message: old".to_owned()),
        ..ChatState::default()
    };
    assert!(state.begin_send(1, "retry").is_some());
    assert!(state.error.is_none());
}

// =============================================================
// Send exclusivity
// =============================================================

#[test]
fn second_send_while_in_flight_is_a_no_op() {
    let mut state = ChatState::default();
    state.messages.push(message(1, MessageRole::User, "earlier"));
    assert!(state.begin_send(1, "first").is_some());

    let before = state.messages.len();
    assert!(state.begin_send(1, "second").is_none());
    assert_eq!(state.messages.len(), before);
    assert_eq!(state.sending_conversation_id, Some(1));
}

#[test]
fn send_allowed_again_after_the_exchange_settles() {
    let mut state = ChatState::default();
    state.begin_send(1, "first");
    state.finish_send(1, Some(1), Ok(exchange(10, 11)));
    assert!(!state.sending);
    assert!(state.begin_send(1, "second").is_some());
}

// =============================================================
// Exchange results
// =============================================================

#[test]
fn successful_send_appends_user_then_assistant() {
    let mut state = ChatState::default();
    state.begin_send(1, "question");
    state.finish_send(1, Some(1), Ok(exchange(10, 11)));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[0].role, MessageRole::User);
    assert_eq!(state.messages[1].role, MessageRole::Assistant);
    assert_eq!(state.messages[1].id, 11);
    assert!(state.error.is_none());
}

#[test]
fn failed_send_leaves_no_ghost_message() {
    let mut state = ChatState::default();
    state.messages.push(message(1, MessageRole::User, "one"));
    state.messages.push(message(2, MessageRole::Assistant, "two"));

    state.begin_send(1, "doomed");
    state.finish_send(1, Some(1), Err("HTTP 500".to_owned()));

    assert_eq!(state.messages.len(), 2);
    assert!(!state.sending);
    assert_eq!(state.error.as_deref(), Some("Failed to send message: HTTP 500"));
}

#[test]
fn stale_send_result_is_discarded_after_switching_conversations() {
    let mut state = ChatState::default();
    state.begin_send(1, "question for A");

    // Selection moved to conversation 2 and its history replaced the pane.
    state.messages = vec![message(20, MessageRole::User, "b history")];

    state.finish_send(1, Some(2), Ok(exchange(10, 11)));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].id, 20);
    // The exchange settled either way.
    assert!(!state.sending);
}

#[test]
fn stale_send_error_is_also_discarded() {
    let mut state = ChatState::default();
    state.begin_send(1, "question for A");
    state.finish_send(1, Some(2), Err("HTTP 500".to_owned()));
    assert!(state.error.is_none());
    assert!(!state.sending);
}

#[test]
fn stale_send_result_discarded_when_current_cleared() {
    let mut state = ChatState::default();
    state.begin_send(1, "question");
    state.clear_messages();
    state.finish_send(1, None, Ok(exchange(10, 11)));
    assert!(state.messages.is_empty());
}

// =============================================================
// History loads
// =============================================================

#[test]
fn history_load_clears_the_pane_before_fetching() {
    let mut state = ChatState::default();
    state.messages.push(message(1, MessageRole::User, "old"));
    state.begin_history_load();
    assert!(state.messages.is_empty());
    assert!(state.loading);
}

#[test]
fn history_load_replaces_wholesale() {
    let mut state = ChatState::default();
    state.begin_history_load();
    state.finish_history_load(
        2,
        Some(2),
        Ok(vec![
            message(5, MessageRole::User, "q"),
            message(6, MessageRole::Assistant, "a"),
        ]),
    );
    assert!(!state.loading);
    assert_eq!(state.messages.len(), 2);
}

#[test]
fn stale_history_result_does_not_clobber_newer_selection() {
    let mut state = ChatState::default();
    // Load for conversation 1 starts, then the user selects conversation 2
    // and its load starts too.
    state.begin_history_load();
    state.begin_history_load();

    // Conversation 1's result arrives late and is discarded.
    state.finish_history_load(1, Some(2), Ok(vec![message(5, MessageRole::User, "a history")]));
    assert!(state.loading);
    assert!(state.messages.is_empty());

    // Conversation 2's result lands normally.
    state.finish_history_load(2, Some(2), Ok(vec![message(9, MessageRole::User, "b history")]));
    assert!(!state.loading);
    assert_eq!(state.messages[0].id, 9);
}

#[test]
fn failed_history_load_reports_chat_scoped_error() {
    let mut state = ChatState::default();
    state.begin_history_load();
    state.finish_history_load(1, Some(1), Err("HTTP 500".to_owned()));
    assert_eq!(state.error.as_deref(), Some("Failed to load messages: HTTP 500"));
    assert!(state.messages.is_empty());
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn clear_messages_empties_pane_and_error() {
    let mut state = ChatState::default();
    state.messages.push(message(1, MessageRole::User, "m"));
    state.error = Some("Failed to send message: x".to_owned());
    state.clear_messages();
    assert!(state.messages.is_empty());
    assert!(state.error.is_none());
}

#[test]
fn reset_for_logout_clears_in_flight_state() {
    let mut state = ChatState::default();
    state.begin_send(1, "question");
    state.reset_for_logout();
    assert!(!state.sending);
    assert!(state.sending_conversation_id.is_none());
    assert!(state.messages.is_empty());
}

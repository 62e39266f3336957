use super::*;

#[test]
fn conversation_errors_render_cause() {
    let err = ClientError::ConversationLoadFailed("HTTP 500".to_owned());
    assert_eq!(err.to_string(), "Failed to load conversations: HTTP 500");
}

#[test]
fn send_error_renders_cause() {
    let err = ClientError::MessageSendFailed("timed out".to_owned());
    assert_eq!(err.to_string(), "Failed to send message: timed out");
}

#[test]
fn reconciliation_timeout_has_no_cause_slot() {
    let err = ClientError::AuthReconciliationTimeout;
    assert!(err.to_string().contains("grace period"));
}

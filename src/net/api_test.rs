use super::*;

#[test]
fn conversations_endpoint_formats_expected_path() {
    assert_eq!(
        conversations_endpoint("http://localhost:8080"),
        "http://localhost:8080/api/conversations"
    );
}

#[test]
fn conversation_endpoint_includes_id() {
    assert_eq!(
        conversation_endpoint("http://localhost:8080", 42),
        "http://localhost:8080/api/conversations/42"
    );
}

#[test]
fn messages_endpoint_nests_under_conversation() {
    assert_eq!(
        messages_endpoint("http://localhost:8080", 7),
        "http://localhost:8080/api/conversations/7/messages"
    );
}

#[test]
fn bearer_header_prefixes_token() {
    assert_eq!(bearer_header("abc123"), "Bearer abc123");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("send message", 502), "send message failed: 502");
}

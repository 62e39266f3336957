use super::*;

#[test]
fn validate_message_input_trims_surrounding_whitespace() {
    assert_eq!(validate_message_input("  hello  "), Some("hello".to_owned()));
}

#[test]
fn validate_message_input_rejects_blank_text() {
    assert_eq!(validate_message_input(""), None);
    assert_eq!(validate_message_input("   \n\t"), None);
}

#[test]
fn validate_message_input_preserves_interior_whitespace() {
    assert_eq!(
        validate_message_input(" two  words \n"),
        Some("two  words".to_owned())
    );
}

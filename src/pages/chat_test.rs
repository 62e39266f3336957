use super::*;

#[test]
fn new_chat_title_includes_date_label() {
    assert_eq!(new_chat_title("6/1/2025"), "New Chat 6/1/2025");
}

#[test]
fn new_chat_title_without_label_stays_plain() {
    assert_eq!(new_chat_title(""), "New Chat");
}

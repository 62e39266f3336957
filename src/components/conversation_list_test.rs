use super::*;
use crate::net::types::ConversationStatus;

fn active(id: i64) -> Conversation {
    Conversation {
        id,
        title: format!("chat {id}"),
        status: ConversationStatus::Active,
        created_at: "2025-06-01T10:00:00Z".to_owned(),
    }
}

#[test]
fn visible_conversations_collapsed_shows_head_slice() {
    let all: Vec<_> = (1..=8).map(active).collect();
    let rows = visible_conversations(&all, false);
    assert_eq!(rows.len(), COLLAPSED_ROWS);
    assert_eq!(rows[0].id, 1);
    assert_eq!(rows[COLLAPSED_ROWS - 1].id, 5);
}

#[test]
fn visible_conversations_expanded_shows_everything() {
    let all: Vec<_> = (1..=8).map(active).collect();
    assert_eq!(visible_conversations(&all, true).len(), 8);
}

#[test]
fn visible_conversations_short_list_ignores_expansion() {
    let all: Vec<_> = (1..=3).map(active).collect();
    assert_eq!(visible_conversations(&all, false).len(), 3);
}

#[test]
fn hidden_count_reports_overflow_only_when_collapsed() {
    assert_eq!(hidden_count(8, false), 3);
    assert_eq!(hidden_count(8, true), 0);
    assert_eq!(hidden_count(4, false), 0);
}

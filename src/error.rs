//! Controller-boundary error taxonomy.
//!
//! DESIGN
//! ======
//! Network helpers return `Result<T, String>`; controllers wrap causes into
//! these variants so the page level always renders one settled,
//! human-readable string. Nothing here is ever propagated as a panic or an
//! unhandled rejection past a controller boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failures surfaced by the session and conversation orchestration layer.
///
/// `AuthReconciliationTimeout` is silent infrastructure: it is logged, never
/// rendered. The rest replace the current page- or chat-level error string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    #[error("session could not be restored before the grace period elapsed")]
    AuthReconciliationTimeout,
    #[error("Failed to load conversations: {0}")]
    ConversationLoadFailed(String),
    #[error("Failed to create conversation: {0}")]
    ConversationCreateFailed(String),
    #[error("Failed to delete conversation: {0}")]
    ConversationDeleteFailed(String),
    #[error("Failed to load messages: {0}")]
    MessageHistoryLoadFailed(String),
    #[error("Failed to send message: {0}")]
    MessageSendFailed(String),
}

//! Shared wire DTOs for the conversation/message backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde round-trips stay
//! lossless and the state layer can hold server entities directly. Numeric
//! ids tolerate integer-compatible floats because the backend serializes
//! through a JSON layer that does not distinguish the two.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel message id for the in-flight assistant bubble.
///
/// The pending bubble is a view projection of the Sending state, never an
/// element of the stored sequence.
pub const PENDING_MESSAGE_ID: i64 = -1;

/// Lifecycle status of a conversation. Deletion is a soft status flip; the
/// rendered list is filtered to `Active`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversationStatus {
    #[default]
    Active,
    Deleted,
}

/// A conversation as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    /// Server-assigned unique identifier.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// User-visible title.
    pub title: String,
    /// Soft-delete status; `Deleted` rows may still appear until a reload.
    pub status: ConversationStatus,
    /// Creation timestamp, ISO 8601.
    pub created_at: String,
}

/// Author role of a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single chat message within a conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Server-assigned identifier, or [`PENDING_MESSAGE_ID`] for the
    /// transient in-flight bubble.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Who authored the message.
    pub role: MessageRole,
    /// Message body as plain text.
    pub content: String,
    /// Creation timestamp, ISO 8601.
    pub created_at: String,
    /// Token count reported by the model, if any.
    #[serde(default)]
    pub tokens: Option<i64>,
    /// Backend processing time in milliseconds, assistant messages only.
    #[serde(default)]
    pub processing_time_ms: Option<i64>,
    /// Model identifier that produced an assistant message.
    #[serde(default)]
    pub model_version: Option<String>,
}

impl Message {
    /// Build the transient pending-assistant bubble for the given instant.
    #[must_use]
    pub fn pending(created_at: String) -> Self {
        Self {
            id: PENDING_MESSAGE_ID,
            role: MessageRole::Assistant,
            content: String::new(),
            created_at,
            tokens: None,
            processing_time_ms: None,
            model_version: None,
        }
    }
}

/// Successful send-message exchange: the backend persists the user's message
/// and returns it together with the assistant reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    /// The caller's message as persisted (server-assigned id and timestamp).
    pub user_message: Message,
    /// The assistant's reply.
    pub assistant_message: Message,
}

/// OIDC profile claims carried by the live session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Verified email claim.
    pub email: String,
    /// Optional given-name claim.
    #[serde(default)]
    pub given_name: Option<String>,
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

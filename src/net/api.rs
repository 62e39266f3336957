//! REST API helpers for the conversation/message backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the session's
//! bearer token attached. Server-side (SSR): stubs returning errors since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics; the state layer wraps
//! failure strings into the page-level error taxonomy.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Conversation, Message, SendMessageResponse};
use crate::config::ApiConfig;

#[cfg(any(test, feature = "hydrate"))]
fn conversations_endpoint(base_url: &str) -> String {
    format!("{base_url}/api/conversations")
}

#[cfg(any(test, feature = "hydrate"))]
fn conversation_endpoint(base_url: &str, conversation_id: i64) -> String {
    format!("{base_url}/api/conversations/{conversation_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(base_url: &str, conversation_id: i64) -> String {
    format!("{base_url}/api/conversations/{conversation_id}/messages")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(access_token: &str) -> String {
    format!("Bearer {access_token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Fetch the full conversation list for the authenticated user.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_conversations(api: &ApiConfig, access_token: &str) -> Result<Vec<Conversation>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&conversations_endpoint(&api.base_url))
            .header("Authorization", &bearer_header(access_token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("list conversations", resp.status()));
        }
        resp.json::<Vec<Conversation>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, access_token);
        Err("not available on server".to_owned())
    }
}

/// Create a conversation with the given title.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn create_conversation(api: &ApiConfig, access_token: &str, title: &str) -> Result<Conversation, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "title": title });
        let resp = gloo_net::http::Request::post(&conversations_endpoint(&api.base_url))
            .header("Authorization", &bearer_header(access_token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create conversation", resp.status()));
        }
        resp.json::<Conversation>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, access_token, title);
        Err("not available on server".to_owned())
    }
}

/// Soft-delete a conversation server-side. The local list is refreshed by a
/// caller-triggered reload, not mutated here.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn delete_conversation(api: &ApiConfig, access_token: &str, conversation_id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&conversation_endpoint(&api.base_url, conversation_id))
            .header("Authorization", &bearer_header(access_token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete conversation", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, access_token, conversation_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch a conversation's full message history.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_messages(api: &ApiConfig, access_token: &str, conversation_id: i64) -> Result<Vec<Message>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&messages_endpoint(&api.base_url, conversation_id))
            .header("Authorization", &bearer_header(access_token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("list messages", resp.status()));
        }
        resp.json::<Vec<Message>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, access_token, conversation_id);
        Err("not available on server".to_owned())
    }
}

/// Send a message and await the assistant's reply. The backend persists the
/// user message and returns it alongside the reply.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn send_message(
    api: &ApiConfig,
    access_token: &str,
    conversation_id: i64,
    content: &str,
) -> Result<SendMessageResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "content": content });
        let resp = gloo_net::http::Request::post(&messages_endpoint(&api.base_url, conversation_id))
            .header("Authorization", &bearer_header(access_token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("send message", resp.status()));
        }
        resp.json::<SendMessageResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (api, access_token, conversation_id, content);
        Err("not available on server".to_owned())
    }
}

//! A single message row with role styling and metadata.

use leptos::prelude::*;

use crate::net::types::{Message, MessageRole};
use crate::util::format::{format_clock_time, format_processing_time, format_token_count};

/// One message in the conversation column. `pending` renders the in-flight
/// assistant bubble instead of content.
#[component]
pub fn MessageBubble(message: Message, #[prop(optional)] pending: bool) -> impl IntoView {
    let is_assistant = message.role == MessageRole::Assistant;
    let avatar = if is_assistant { "AI" } else { "You" };
    let clock = format_clock_time(&message.created_at);
    let tokens = message.tokens.map(format_token_count);
    let processing = message
        .processing_time_ms
        .filter(|_| is_assistant)
        .map(format_processing_time);
    let model_version = message.model_version.clone();
    let content = message.content.clone();

    view! {
        <div class="message-bubble" class:message-bubble--assistant=is_assistant>
            <div class="message-bubble__avatar">{avatar}</div>
            <div class="message-bubble__body">
                {if pending {
                    view! {
                        <div class="message-bubble__pending">
                            <span class="message-bubble__dots" aria-hidden="true"></span>
                            <span class="message-bubble__pending-label">"AI is thinking..."</span>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="message-bubble__text">
                            <div class="message-bubble__content">{content}</div>
                            <div class="message-bubble__meta">
                                <span class="message-bubble__time">{clock}</span>
                                {tokens
                                    .map(|t| {
                                        view! {
                                            <span class="message-bubble__tokens">{format!("{t} tokens")}</span>
                                        }
                                    })}
                                {processing
                                    .map(|p| view! { <span class="message-bubble__latency">{p}</span> })}
                                {model_version
                                    .map(|m| view! { <span class="message-bubble__model">{m}</span> })}
                            </div>
                        </div>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}

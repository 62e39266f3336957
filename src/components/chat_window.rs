//! Message column: history, pending bubble, error strip, and composer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Projects `state::chat` read-only. The pending assistant bubble is
//! derived from the Sending flag here, so it is always the last row,
//! disappears the moment the exchange settles, and never enters the stored
//! sequence.

use leptos::prelude::*;

use crate::components::chat_input::ChatInput;
use crate::components::message_bubble::MessageBubble;
use crate::net::types::Message;
use crate::state::chat::ChatState;

fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// The main chat column for the current conversation.
#[component]
pub fn ChatWindow(on_send: Callback<String>) -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest row in view as history grows or the pending bubble
    // appears.
    Effect::new(move || {
        let state = chat.get();
        let _ = state.messages.len();
        let _ = state.sending;

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let sending = move || chat.get().sending;

    view! {
        <div class="chat-window">
            <div class="chat-window__messages" node_ref=messages_ref>
                {move || {
                    let state = chat.get();
                    if state.messages.is_empty() && !state.sending {
                        let label = if state.loading {
                            "Loading messages..."
                        } else {
                            "How can I help you today?"
                        };
                        return view! {
                            <div class="chat-window__empty">
                                <h2>{label}</h2>
                            </div>
                        }
                            .into_any();
                    }

                    state
                        .messages
                        .iter()
                        .map(|message| {
                            view! { <MessageBubble message=message.clone()/> }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}

                <Show when=sending>
                    <MessageBubble message=Message::pending(now_iso()) pending=true/>
                </Show>
            </div>

            <Show when=move || chat.get().error.is_some()>
                <div class="chat-window__error">
                    <p>{move || chat.get().error.unwrap_or_default()}</p>
                </div>
            </Show>

            <div class="chat-window__composer">
                <ChatInput on_send=on_send disabled=Signal::derive(sending)/>
            </div>
        </div>
    }
}

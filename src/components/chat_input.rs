//! Message composer with trim validation and send-on-Enter.

#[cfg(test)]
#[path = "chat_input_test.rs"]
mod chat_input_test;

use leptos::prelude::*;

/// Trim `text` for sending. `None` when nothing remains.
#[must_use]
pub fn validate_message_input(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Composer input. Disabled while a send is in flight; the accepted text is
/// handed up through `on_send` and the field cleared.
#[component]
pub fn ChatInput(on_send: Callback<String>, disabled: Signal<bool>) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let do_send = move || {
        if disabled.get_untracked() {
            return;
        }
        let Some(text) = validate_message_input(&draft.get_untracked()) else {
            return;
        };
        draft.set(String::new());
        on_send.run(text);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || !disabled.get() && validate_message_input(&draft.get()).is_some();

    view! {
        <div class="chat-input">
            <textarea
                class="chat-input__field"
                rows="1"
                placeholder="Message Nova..."
                prop:value=move || draft.get()
                disabled=move || disabled.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button
                class="btn btn--primary chat-input__send"
                disabled=move || !can_send()
                on:click=move |_| do_send()
            >
                "Send"
            </button>
        </div>
    }
}

//! Confirmation dialog gating conversation deletion.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::chat::ChatState;
use crate::state::conversations::{self, ConversationsState};

/// Modal dialog confirming a destructive delete. Cancelling (button or
/// backdrop click) leaves all state untouched; confirming issues the
/// server-side delete followed by the authoritative list refresh.
#[component]
pub fn DeleteConversationDialog(
    conversation_id: RwSignal<Option<i64>>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let conversations_state = expect_context::<RwSignal<ConversationsState>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let submit = Callback::new(move |()| {
        let Some(id) = conversation_id.get_untracked() else {
            return;
        };
        conversations::delete_conversation(auth, conversations_state, chat, id);
        on_cancel.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Conversation"</h2>
                <p class="dialog__danger">
                    "Are you sure you want to delete this conversation? This action cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

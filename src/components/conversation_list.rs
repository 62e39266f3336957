//! Sidebar conversation list with select and delete affordances.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the ACTIVE working set owned by `state::conversations`. Rows are
//! collapsed to a short head slice until expanded; selection and delete
//! requests flow back up as callbacks so this component owns no lifecycle
//! decisions.

#[cfg(test)]
#[path = "conversation_list_test.rs"]
mod conversation_list_test;

use leptos::prelude::*;

use crate::net::types::Conversation;
use crate::state::conversations::ConversationsState;

/// Rows shown while the list is collapsed.
pub const COLLAPSED_ROWS: usize = 5;

/// The slice of the ACTIVE set that is visible for the given expansion
/// state.
#[must_use]
pub fn visible_conversations(active: &[Conversation], expanded: bool) -> Vec<Conversation> {
    if expanded || active.len() <= COLLAPSED_ROWS {
        active.to_vec()
    } else {
        active[..COLLAPSED_ROWS].to_vec()
    }
}

/// Number of rows hidden behind the "more" affordance.
#[must_use]
pub fn hidden_count(active_len: usize, expanded: bool) -> usize {
    if expanded {
        0
    } else {
        active_len.saturating_sub(COLLAPSED_ROWS)
    }
}

/// Conversation list panel for the sidebar.
#[component]
pub fn ConversationList(
    on_select: Callback<Conversation>,
    on_delete_request: Callback<i64>,
) -> impl IntoView {
    let conversations = expect_context::<RwSignal<ConversationsState>>();
    let expanded = RwSignal::new(false);

    view! {
        <div class="conversation-list">
            <div class="conversation-list__header">
                <h3 class="conversation-list__title">"Recent"</h3>
                <Show when=move || { conversations.with(|s| s.active().len()) > COLLAPSED_ROWS }>
                    <button
                        class="btn conversation-list__expand"
                        on:click=move |_| expanded.update(|e| *e = !*e)
                    >
                        {move || if expanded.get() { "Less" } else { "More" }}
                    </button>
                </Show>
            </div>

            {move || {
                let state = conversations.get();
                let active = state.active();
                if active.is_empty() {
                    return view! {
                        <p class="conversation-list__empty">"No conversations yet"</p>
                    }
                        .into_any();
                }

                let current_id = state.current.as_ref().map(|c| c.id);
                let busy = state.loading;
                let rows = visible_conversations(&active, expanded.get());
                let hidden = hidden_count(active.len(), expanded.get());

                view! {
                    <div class="conversation-list__rows">
                        {rows
                            .into_iter()
                            .map(|conversation| {
                                let selected = current_id == Some(conversation.id);
                                let id = conversation.id;
                                let title = conversation.title.clone();
                                let select_target = conversation.clone();
                                view! {
                                    <div
                                        class="conversation-list__row"
                                        class:conversation-list__row--selected=selected
                                        on:click=move |_| on_select.run(select_target.clone())
                                    >
                                        <span class="conversation-list__row-title">{title}</span>
                                        <Show when=move || !busy>
                                            <button
                                                class="btn conversation-list__delete"
                                                title="Delete conversation"
                                                on:click=move |ev| {
                                                    ev.stop_propagation();
                                                    on_delete_request.run(id);
                                                }
                                            >
                                                "🗑"
                                            </button>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                        <Show when=move || { hidden > 0 }>
                            <button
                                class="conversation-list__show-more"
                                on:click=move |_| expanded.set(true)
                            >
                                {format!("Show {hidden} more...")}
                            </button>
                        </Show>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}

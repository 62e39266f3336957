//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render chat chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers. Orchestration
//! decisions stay in `state`; these modules only project it.

pub mod chat_input;
pub mod chat_window;
pub mod conversation_list;
pub mod delete_dialog;
pub mod message_bubble;

//! Shared reactive state modules.
//!
//! ARCHITECTURE
//! ============
//! Each module owns one mutable resource: `auth` the session projection and
//! its persisted snapshot, `conversations` the list plus `current` pointer,
//! `chat` the message sequence, `ui` presentation chrome. Cross-module
//! effects happen only through the public operations here or by observing
//! the signals read-only.

pub mod auth;
pub mod chat;
pub mod conversations;
pub mod ui;

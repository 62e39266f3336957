//! Networking modules for the backend and identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles conversation/message REST calls, `oidc` drives the
//! identity-provider redirect flow, and `types` defines the shared wire
//! schema.

pub mod api;
pub mod oidc;
pub mod types;

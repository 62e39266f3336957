//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// True once auth has settled with no live session.
#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.is_authenticated
}

/// Redirect to `/` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if should_redirect_unauth(&state) {
            navigate("/", NavigateOptions::default());
        }
    });
}

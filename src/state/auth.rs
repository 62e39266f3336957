//! Auth-session state and startup reconciliation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The live identity-provider session and a persisted localStorage snapshot
//! must converge at boot. The live value always wins once it settles; the
//! snapshot only buys a bounded grace window for silent restoration before
//! it is discarded. Other controllers treat the settled session as
//! read-only.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Profile;

/// localStorage key holding the persisted auth snapshot.
pub const AUTH_SNAPSHOT_KEY: &str = "auth-storage";

/// Grace window (ms) for silent session restoration before a persisted
/// authenticated claim is discarded.
pub const AUTH_GRACE_MS: u64 = 3_000;

/// Live identity-provider session projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    /// Whether the provider currently reports an authenticated session.
    pub is_authenticated: bool,
    /// True until the provider finishes its initial (or silent-renew)
    /// resolution.
    pub loading: bool,
    /// Bearer token attached to backend requests.
    pub access_token: Option<String>,
    /// Profile claims, when authenticated.
    pub profile: Option<Profile>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            loading: true,
            access_token: None,
            profile: None,
        }
    }
}

impl AuthState {
    /// Session state for a completed sign-in.
    #[must_use]
    pub fn authenticated(access_token: String, profile: Profile) -> Self {
        Self {
            is_authenticated: true,
            loading: false,
            access_token: Some(access_token),
            profile: Some(profile),
        }
    }

    /// Session state for a settled signed-out provider.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            loading: false,
            access_token: None,
            profile: None,
        }
    }
}

/// Persisted auth snapshot as stored in browser-durable storage.
///
/// The wrapper object mirrors the storage slot's wire shape
/// `{"state": {"isAuthenticated": bool, "access_token": string}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSnapshot {
    pub state: SnapshotState,
}

/// Inner payload of the persisted snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotState {
    #[serde(rename = "isAuthenticated")]
    pub is_authenticated: bool,
    pub access_token: String,
}

impl AuthSnapshot {
    /// Snapshot mirroring a live authenticated session.
    #[must_use]
    pub fn from_live(live: &AuthState) -> Self {
        Self {
            state: SnapshotState {
                is_authenticated: live.is_authenticated,
                access_token: live.access_token.clone().unwrap_or_default(),
            },
        }
    }

    /// Whether this snapshot claims a previously authenticated session.
    #[must_use]
    pub fn claims_authenticated(&self) -> bool {
        self.state.is_authenticated
    }
}

/// Outcome of comparing the live session against the persisted snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReconcileAction {
    /// Live session is authenticated and authoritative; the snapshot is
    /// overwritten to mirror it.
    MirrorLive,
    /// The provider has not settled yet; decide again on the next change.
    Wait,
    /// Live settled unauthenticated while the snapshot claims prior auth;
    /// give the provider one bounded grace window before erasing it.
    AwaitGrace,
    /// Nothing left to reconcile.
    Settle,
}

/// Decision table for one reconciliation step. Pure so the full matrix is
/// testable without a browser.
///
/// The grace window opens as soon as the snapshot claims an authentication
/// the live session has not yet confirmed; a provider still resolving is
/// exactly what the window is for.
#[must_use]
pub fn reconcile_action(live: &AuthState, snapshot: Option<&AuthSnapshot>) -> ReconcileAction {
    if live.is_authenticated {
        return ReconcileAction::MirrorLive;
    }
    if snapshot.is_some_and(AuthSnapshot::claims_authenticated) {
        return ReconcileAction::AwaitGrace;
    }
    if live.loading {
        return ReconcileAction::Wait;
    }
    ReconcileAction::Settle
}

/// Install the startup reconciler: an effect that re-evaluates the decision
/// table whenever the live session changes, plus the cancellable grace
/// timer. Safe to call on every mount; side effects after the first stable
/// resolution are limited to keeping the snapshot mirroring an
/// authenticated live session.
pub fn install_session_reconciler(auth: leptos::prelude::RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        use leptos::prelude::*;

        use crate::util::persistence;

        let settled = RwSignal::new(false);
        let grace_armed = RwSignal::new(false);
        let alive = Arc::new(AtomicBool::new(true));

        let alive_cleanup = alive.clone();
        on_cleanup(move || alive_cleanup.store(false, Ordering::Relaxed));

        attempt_silent_restore(auth);

        Effect::new(move || {
            let live = auth.get();
            let snapshot: Option<AuthSnapshot> = persistence::load_json(AUTH_SNAPSHOT_KEY);
            match reconcile_action(&live, snapshot.as_ref()) {
                ReconcileAction::MirrorLive => {
                    let mirrored = AuthSnapshot::from_live(&live);
                    if snapshot.as_ref() != Some(&mirrored) {
                        persistence::save_json(AUTH_SNAPSHOT_KEY, &mirrored);
                    }
                    settled.set(true);
                }
                ReconcileAction::Wait => {}
                ReconcileAction::AwaitGrace => {
                    if settled.get_untracked() || grace_armed.get_untracked() {
                        return;
                    }
                    grace_armed.set(true);
                    let alive_task = alive.clone();
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(AUTH_GRACE_MS)).await;
                        if !alive_task.load(Ordering::Relaxed) {
                            return;
                        }
                        if auth.get_untracked().is_authenticated {
                            return;
                        }
                        persistence::remove(AUTH_SNAPSHOT_KEY);
                        log::info!("auth: {}", crate::error::ClientError::AuthReconciliationTimeout);
                        settled.set(true);
                    });
                }
                ReconcileAction::Settle => settled.set(true),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}

/// Probe the provider with the persisted token so the live session settles
/// one way or the other. A valid token restores the session silently; a
/// rejected one settles unauthenticated and the grace path takes over. The
/// callback route may authenticate concurrently, so a session that already
/// settled authenticated is never downgraded here.
#[cfg(feature = "hydrate")]
fn attempt_silent_restore(auth: leptos::prelude::RwSignal<AuthState>) {
    use leptos::prelude::*;

    let snapshot: Option<AuthSnapshot> = crate::util::persistence::load_json(AUTH_SNAPSHOT_KEY);
    let token = snapshot
        .filter(AuthSnapshot::claims_authenticated)
        .map(|s| s.state.access_token)
        .filter(|t| !t.is_empty());
    let Some(token) = token else {
        auth.set(AuthState::unauthenticated());
        return;
    };

    leptos::task::spawn_local(async move {
        let cfg = crate::config::OidcConfig::default();
        let restored = crate::net::oidc::fetch_userinfo(&cfg, &token).await;
        if auth.get_untracked().is_authenticated {
            return;
        }
        match restored {
            Ok(profile) => {
                crate::net::oidc::log_session_event(crate::net::oidc::SessionEvent::Loaded);
                auth.set(AuthState::authenticated(token, profile));
            }
            Err(_) => {
                crate::net::oidc::log_session_event(crate::net::oidc::SessionEvent::SilentRenewError);
                auth.set(AuthState::unauthenticated());
            }
        }
    });
}

/// Tear down the local session on logout: erase the snapshot and reset the
/// live projection to a settled signed-out state. The provider redirect is
/// the caller's next step.
pub fn teardown_session(auth: leptos::prelude::RwSignal<AuthState>) {
    use leptos::prelude::Set;

    crate::util::persistence::remove(AUTH_SNAPSHOT_KEY);
    auth.set(AuthState::unauthenticated());
    crate::net::oidc::log_session_event(crate::net::oidc::SessionEvent::Unloaded);
}

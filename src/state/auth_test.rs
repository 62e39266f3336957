use super::*;

fn snapshot(claims_auth: bool) -> AuthSnapshot {
    AuthSnapshot {
        state: SnapshotState {
            is_authenticated: claims_auth,
            access_token: if claims_auth { "tok".to_owned() } else { String::new() },
        },
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_loading_and_unauthenticated() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_authenticated);
    assert!(state.access_token.is_none());
    assert!(state.profile.is_none());
}

#[test]
fn authenticated_constructor_carries_token_and_profile() {
    let profile = crate::net::types::Profile {
        email: "a@example.com".to_owned(),
        given_name: Some("Ann".to_owned()),
    };
    let state = AuthState::authenticated("tok".to_owned(), profile);
    assert!(state.is_authenticated);
    assert!(!state.loading);
    assert_eq!(state.access_token.as_deref(), Some("tok"));
}

// =============================================================
// Snapshot wire shape
// =============================================================

#[test]
fn snapshot_serializes_nested_state_shape() {
    let json = serde_json::to_value(snapshot(true)).expect("serialize");
    assert_eq!(json["state"]["isAuthenticated"], true);
    assert_eq!(json["state"]["access_token"], "tok");
}

#[test]
fn snapshot_round_trips() {
    let original = snapshot(true);
    let raw = serde_json::to_string(&original).expect("serialize");
    let back: AuthSnapshot = serde_json::from_str(&raw).expect("deserialize");
    assert_eq!(back, original);
}

#[test]
fn malformed_snapshot_fails_to_parse() {
    assert!(serde_json::from_str::<AuthSnapshot>("{\"state\":42}").is_err());
    assert!(serde_json::from_str::<AuthSnapshot>("not json").is_err());
}

#[test]
fn from_live_mirrors_authenticated_session() {
    let live = AuthState::authenticated(
        "tok".to_owned(),
        crate::net::types::Profile {
            email: "a@example.com".to_owned(),
            given_name: None,
        },
    );
    let mirrored = AuthSnapshot::from_live(&live);
    assert!(mirrored.claims_authenticated());
    assert_eq!(mirrored.state.access_token, "tok");
}

// =============================================================
// Reconcile decision table
// =============================================================

#[test]
fn live_authenticated_always_mirrors() {
    let live = AuthState {
        is_authenticated: true,
        loading: false,
        access_token: Some("tok".to_owned()),
        profile: None,
    };
    assert_eq!(reconcile_action(&live, None), ReconcileAction::MirrorLive);
    assert_eq!(
        reconcile_action(&live, Some(&snapshot(false))),
        ReconcileAction::MirrorLive
    );
}

#[test]
fn provider_still_loading_without_claim_waits() {
    let live = AuthState::default();
    assert_eq!(reconcile_action(&live, None), ReconcileAction::Wait);
    assert_eq!(reconcile_action(&live, Some(&snapshot(false))), ReconcileAction::Wait);
}

#[test]
fn unconfirmed_authenticated_claim_enters_grace() {
    // The window opens whether the provider is still resolving or has
    // settled unauthenticated; only its confirmation closes it early.
    let live = AuthState::default();
    assert_eq!(
        reconcile_action(&live, Some(&snapshot(true))),
        ReconcileAction::AwaitGrace
    );
    let live = AuthState::unauthenticated();
    assert_eq!(
        reconcile_action(&live, Some(&snapshot(true))),
        ReconcileAction::AwaitGrace
    );
}

#[test]
fn settled_unauth_without_claim_settles() {
    let live = AuthState::unauthenticated();
    assert_eq!(reconcile_action(&live, None), ReconcileAction::Settle);
    assert_eq!(reconcile_action(&live, Some(&snapshot(false))), ReconcileAction::Settle);
}

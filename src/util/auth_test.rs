use super::*;

#[test]
fn should_redirect_unauth_when_settled_and_unauthenticated() {
    let state = AuthState {
        loading: false,
        ..AuthState::default()
    };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = AuthState {
        is_authenticated: true,
        loading: false,
        access_token: Some("tok".to_owned()),
        profile: None,
    };
    assert!(!should_redirect_unauth(&state));
}

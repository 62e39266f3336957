use super::*;

fn test_config() -> OidcConfig {
    OidcConfig {
        authority: "https://issuer.example.com/pool".to_owned(),
        domain: "https://auth.example.com".to_owned(),
        client_id: "client123".to_owned(),
        redirect_uri: "http://localhost:3000/auth/callback".to_owned(),
        post_logout_redirect_uri: "http://localhost:3000".to_owned(),
        scope: "email openid profile".to_owned(),
    }
}

// =============================================================
// Endpoint construction
// =============================================================

#[test]
fn authorize_url_carries_code_flow_params() {
    let url = authorize_url(&test_config());
    assert!(url.starts_with("https://auth.example.com/oauth2/authorize?"));
    assert!(url.contains("client_id=client123"));
    assert!(url.contains("response_type=code"));
    assert!(url.contains("scope=email+openid+profile"));
    assert!(url.contains("redirect_uri=http://localhost:3000/auth/callback"));
}

#[test]
fn token_and_userinfo_endpoints_live_on_auth_domain() {
    let cfg = test_config();
    assert_eq!(token_endpoint(&cfg), "https://auth.example.com/oauth2/token");
    assert_eq!(userinfo_endpoint(&cfg), "https://auth.example.com/oauth2/userInfo");
}

#[test]
fn logout_url_targets_post_logout_redirect() {
    let url = logout_url(&test_config());
    assert!(url.starts_with("https://auth.example.com/logout?"));
    assert!(url.contains("logout_uri=http://localhost:3000"));
}

#[test]
fn token_request_body_is_form_encoded_code_grant() {
    let body = token_request_body(&test_config(), "authcode42");
    assert!(body.starts_with("grant_type=authorization_code&"));
    assert!(body.contains("client_id=client123"));
    assert!(body.contains("code=authcode42"));
}

// =============================================================
// Callback query parsing
// =============================================================

#[test]
fn code_from_query_reads_code_param() {
    assert_eq!(code_from_query("?code=abc&state=xyz"), Some("abc".to_owned()));
    assert_eq!(code_from_query("code=abc"), Some("abc".to_owned()));
}

#[test]
fn code_from_query_rejects_missing_or_empty_code() {
    assert_eq!(code_from_query("?state=xyz"), None);
    assert_eq!(code_from_query("?code="), None);
    assert_eq!(code_from_query(""), None);
}

// =============================================================
// Session events
// =============================================================

#[test]
fn session_events_have_distinct_labels() {
    let labels = [
        SessionEvent::Loaded.as_str(),
        SessionEvent::Unloaded.as_str(),
        SessionEvent::TokenExpiring.as_str(),
        SessionEvent::TokenExpired.as_str(),
        SessionEvent::SilentRenewError.as_str(),
    ];
    for (i, a) in labels.iter().enumerate() {
        for b in labels.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

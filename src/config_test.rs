use super::*;

#[test]
fn oidc_config_default_has_authority_and_client() {
    let cfg = OidcConfig::default();
    assert!(cfg.authority.starts_with("https://"));
    assert!(cfg.domain.starts_with("https://"));
    assert!(!cfg.client_id.is_empty());
}

#[test]
fn oidc_config_default_scope_includes_openid() {
    let cfg = OidcConfig::default();
    assert!(cfg.scope.split(' ').any(|s| s == "openid"));
}

#[test]
fn oidc_config_default_redirect_targets_callback_route() {
    let cfg = OidcConfig::default();
    assert!(cfg.redirect_uri.ends_with("/auth/callback"));
}

#[test]
fn api_config_default_base_url_has_no_trailing_slash() {
    let cfg = ApiConfig::default();
    assert!(!cfg.base_url.ends_with('/'));
}

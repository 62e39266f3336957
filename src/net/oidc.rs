//! OIDC identity-provider client (authorization-code flow).
//!
//! SYSTEM CONTEXT
//! ==============
//! The hosted provider serves the authorize/token/userinfo endpoints from
//! its auth domain. This module builds those URLs, drives the redirect
//! hops, and completes the callback code exchange. Session-lifecycle
//! events are advisory logging hooks only; the reconciliation contract
//! lives in `state::auth`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "oidc_test.rs"]
mod oidc_test;

use super::types::Profile;
use crate::config::OidcConfig;

/// Advisory session-lifecycle notifications, logged and otherwise ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// A user session became available.
    Loaded,
    /// The user session was removed.
    Unloaded,
    /// The access token is approaching expiry.
    TokenExpiring,
    /// The access token has expired.
    TokenExpired,
    /// A background token renewal attempt failed.
    SilentRenewError,
}

impl SessionEvent {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loaded => "user loaded",
            Self::Unloaded => "user unloaded",
            Self::TokenExpiring => "access token expiring",
            Self::TokenExpired => "access token expired",
            Self::SilentRenewError => "silent renew error",
        }
    }
}

/// Log a session-lifecycle event. Carries no correctness obligation.
pub fn log_session_event(event: SessionEvent) {
    #[cfg(feature = "hydrate")]
    {
        match event {
            SessionEvent::TokenExpired | SessionEvent::SilentRenewError => {
                log::warn!("oidc: {}", event.as_str());
            }
            _ => log::info!("oidc: {}", event.as_str()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = event;
    }
}

/// Build the hosted authorize URL for the code flow.
#[must_use]
pub fn authorize_url(cfg: &OidcConfig) -> String {
    format!(
        "{}/oauth2/authorize?client_id={}&response_type=code&scope={}&redirect_uri={}",
        cfg.domain,
        cfg.client_id,
        cfg.scope.replace(' ', "+"),
        cfg.redirect_uri
    )
}

/// Build the token endpoint URL.
#[must_use]
pub fn token_endpoint(cfg: &OidcConfig) -> String {
    format!("{}/oauth2/token", cfg.domain)
}

/// Build the userinfo endpoint URL.
#[must_use]
pub fn userinfo_endpoint(cfg: &OidcConfig) -> String {
    format!("{}/oauth2/userInfo", cfg.domain)
}

/// Build the hosted logout URL, which ends the provider session and sends
/// the browser back to the configured post-logout target.
#[must_use]
pub fn logout_url(cfg: &OidcConfig) -> String {
    format!(
        "{}/logout?client_id={}&logout_uri={}",
        cfg.domain, cfg.client_id, cfg.post_logout_redirect_uri
    )
}

/// Build the form-encoded token exchange body for an authorization code.
#[must_use]
pub fn token_request_body(cfg: &OidcConfig, code: &str) -> String {
    format!(
        "grant_type=authorization_code&client_id={}&code={code}&redirect_uri={}",
        cfg.client_id, cfg.redirect_uri
    )
}

/// Extract the `code` parameter from a callback query string (with or
/// without the leading `?`). Returns `None` when absent or empty.
#[must_use]
pub fn code_from_query(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "code")
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Send the browser to the provider's sign-in page.
pub fn signin_redirect(cfg: &OidcConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&authorize_url(cfg));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
    }
}

/// Send the browser to the provider's sign-out page.
pub fn signout_redirect(cfg: &OidcConfig) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&logout_url(cfg));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cfg;
    }
}

/// Read the authorization code from the current location, if present.
#[must_use]
pub fn callback_code_from_location() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let search = web_sys::window()?.location().search().ok()?;
        code_from_query(&search)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the profile claims for an access token. Doubles as the liveness
/// probe for silent session restoration: a valid persisted token proves the
/// provider session is still usable.
///
/// # Errors
///
/// Returns an error string if the request fails or the token is rejected.
pub async fn fetch_userinfo(cfg: &OidcConfig, access_token: &str) -> Result<Profile, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&userinfo_endpoint(cfg))
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            if resp.status() == 401 {
                log_session_event(SessionEvent::TokenExpired);
            }
            return Err(format!("userinfo request failed: {}", resp.status()));
        }
        resp.json::<Profile>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, access_token);
        Err("not available on server".to_owned())
    }
}

/// Complete the callback leg: exchange the code for an access token, then
/// fetch the profile claims. Returns `(access_token, profile)`.
///
/// # Errors
///
/// Returns an error string if either provider round trip fails.
pub async fn complete_signin(cfg: &OidcConfig, code: &str) -> Result<(String, Profile), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&token_endpoint(cfg))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(token_request_body(cfg, code))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("token exchange failed: {}", resp.status()));
        }
        let token: TokenResponse = resp.json().await.map_err(|e| e.to_string())?;

        let profile = fetch_userinfo(cfg, &token.access_token).await?;

        log_session_event(SessionEvent::Loaded);
        Ok((token.access_token, profile))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (cfg, code);
        Err("not available on server".to_owned())
    }
}

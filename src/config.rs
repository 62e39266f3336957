//! Compile-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle cannot read a server environment at runtime, so deploy
//! knobs are baked in at build time via `option_env!` with local-dev
//! defaults, the same knobs the hosted identity provider and backend are
//! provisioned with.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// OIDC identity-provider configuration (authorization-code flow).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OidcConfig {
    /// Issuer URL used for discovery and token validation.
    pub authority: String,
    /// Hosted auth domain serving the authorize/token/userinfo endpoints.
    pub domain: String,
    /// Public client identifier registered with the provider.
    pub client_id: String,
    /// Redirect target for the authorization-code callback.
    pub redirect_uri: String,
    /// Where the provider sends the browser after sign-out.
    pub post_logout_redirect_uri: String,
    /// Space-separated scope claims requested at sign-in.
    pub scope: String,
}

impl Default for OidcConfig {
    fn default() -> Self {
        Self {
            authority: option_env!("NOVACHAT_OIDC_AUTHORITY")
                .unwrap_or("https://cognito-idp.ap-south-1.amazonaws.com/ap-south-1_KAyuLakQ6")
                .to_owned(),
            domain: option_env!("NOVACHAT_OIDC_DOMAIN")
                .unwrap_or("https://ap-south-1q9mjw92rh.auth.ap-south-1.amazoncognito.com")
                .to_owned(),
            client_id: option_env!("NOVACHAT_OIDC_CLIENT_ID")
                .unwrap_or("79go35q1c7n3cgcpjimu7koet6")
                .to_owned(),
            redirect_uri: option_env!("NOVACHAT_REDIRECT_URI")
                .unwrap_or("http://localhost:3000/auth/callback")
                .to_owned(),
            post_logout_redirect_uri: option_env!("NOVACHAT_POST_LOGOUT_REDIRECT_URI")
                .unwrap_or("http://localhost:3000")
                .to_owned(),
            scope: option_env!("NOVACHAT_OIDC_SCOPE")
                .unwrap_or("email openid profile")
                .to_owned(),
        }
    }
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the conversation/message backend, no trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("NOVACHAT_API_URL")
                .unwrap_or("http://localhost:8080")
                .to_owned(),
        }
    }
}

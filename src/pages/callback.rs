//! OIDC redirect-callback page: completes the code exchange and settles the
//! live session.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Callback landing for the authorization-code redirect. Success settles
/// the session authenticated and moves on to `/chat`; any failure settles
/// it unauthenticated and returns to the landing page.
#[component]
pub fn CallbackPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let cfg = crate::config::OidcConfig::default();
            let Some(code) = crate::net::oidc::callback_code_from_location() else {
                auth.set(AuthState::unauthenticated());
                navigate("/", NavigateOptions::default());
                return;
            };
            match crate::net::oidc::complete_signin(&cfg, &code).await {
                Ok((access_token, profile)) => {
                    auth.set(AuthState::authenticated(access_token, profile));
                    navigate("/chat", NavigateOptions::default());
                }
                Err(cause) => {
                    log::warn!("oidc: sign-in completion failed: {cause}");
                    auth.set(AuthState::unauthenticated());
                    navigate("/", NavigateOptions::default());
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = &navigate;
    }

    view! {
        <div class="callback-page">
            <div class="spinner" aria-label="Loading"></div>
            <p>"Completing sign-in..."</p>
        </div>
    }
}

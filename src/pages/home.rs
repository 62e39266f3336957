//! Landing page: sign-in entry point, forwards authenticated sessions to
//! the chat route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::OidcConfig;
use crate::state::auth::AuthState;

/// Landing page with the provider sign-in button. Sessions that settle
/// authenticated are forwarded to `/chat` without a gesture.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.is_authenticated {
            navigate("/chat", NavigateOptions::default());
        }
    });

    let on_signin = move |_| {
        crate::net::oidc::signin_redirect(&OidcConfig::default());
    };

    view! {
        <Show
            when=move || !auth.get().loading
            fallback=move || {
                view! {
                    <div class="home-page">
                        <div class="spinner" aria-label="Loading"></div>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__header">
                    <span class="home-page__brand">"AI Chat"</span>
                    <button class="btn btn--primary" on:click=on_signin>
                        "Sign In"
                    </button>
                </header>
                <main class="home-page__hero">
                    <h1>"Your AI Assistant"</h1>
                    <p class="home-page__tagline">
                        "Ask questions, get creative, and explore the possibilities with the Nova Pro model."
                    </p>
                    <button class="btn btn--primary home-page__cta" on:click=on_signin>
                        "Get Started"
                    </button>
                </main>
            </div>
        </Show>
    }
}

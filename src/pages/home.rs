//! Public landing page.

use leptos::prelude::*;

use crate::state::session::{SessionContext, SessionState};
use crate::util::routes;

/// Landing page. Offers sign-in for visitors and a dashboard link for
/// signed-in users; shows neither until the session has resolved.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();

    let actions = move || match session.state() {
        SessionState::Loading => ().into_any(),
        SessionState::Authenticated(user) => view! {
            <a class="home-hero__cta" href=routes::dashboard_path(user.user_type)>
                {format!("Continue as {}", user.name)}
            </a>
        }
        .into_any(),
        SessionState::Unauthenticated => view! {
            <a class="home-hero__cta" href=routes::LOGIN>"Sign in"</a>
            <a class="home-hero__cta home-hero__cta--secondary" href=routes::REGISTER>"Create an account"</a>
        }
        .into_any(),
    };

    view! {
        <div class="home-hero">
            <h1>"Marketplace"</h1>
            <p class="home-hero__tagline">"Buy and sell with people near you."</p>
            <div class="home-hero__actions">{actions}</div>
        </div>
    }
}

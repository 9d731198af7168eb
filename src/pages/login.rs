//! Login page: email + password exchange against the auth API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{AuthResponse, LoginRequest, UnknownRole, UserProfile};
use crate::state::session::SessionContext;
use crate::util::routes;

pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Start a session from an auth API response and pick where to land.
///
/// An unrecognized role never reaches the session; the visitor lands on the
/// generic home page instead.
///
/// # Errors
///
/// Returns a user-facing message if the session cannot be persisted.
pub fn complete_sign_in(session: &SessionContext, response: AuthResponse) -> Result<&'static str, String> {
    let AuthResponse { token, user } = response;
    match UserProfile::try_from(user) {
        Ok(user) => {
            let landing = routes::dashboard_path(user.user_type);
            session.login(&token, user).map_err(|e| format!("Could not save session: {e}"))?;
            Ok(landing)
        }
        Err(UnknownRole(role)) => Ok(routes::landing_path(&role)),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<SessionContext>();
    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let api_base_url = config.api_base_url.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&api_base_url, &request)
                    .await
                    .and_then(|response| complete_sign_in(&session, response));
                match outcome {
                    Ok(landing) => {
                        password.set(String::new());
                        navigate(landing, crate::util::auth::redirect_options());
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        info.set(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Marketplace"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "New here? "
                    <a href=routes::REGISTER>"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

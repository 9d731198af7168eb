//! Registration page. Buyers and sellers can sign up; admins are provisioned
//! out of band.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::net::types::{RegisterRequest, UserType};
use crate::util::routes;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Roles offered on the sign-up form.
pub const REGISTERABLE_ROLES: [UserType; 2] = [UserType::Buyer, UserType::Seller];

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err("Enter your name.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    let user_type = match role.parse::<UserType>() {
        Ok(user_type) if REGISTERABLE_ROLES.contains(&user_type) => user_type,
        Ok(_) | Err(_) => return Err("Choose buyer or seller."),
    };
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        user_type,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(UserType::Buyer.as_str().to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::state::session::SessionContext>();
    #[cfg(feature = "hydrate")]
    let config = expect_context::<crate::config::ClientConfig>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&name.get(), &email.get(), &password.get(), &role.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let api_base_url = config.api_base_url.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::register(&api_base_url, &request)
                    .await
                    .and_then(|response| crate::pages::login::complete_sign_in(&session, response));
                match outcome {
                    Ok(landing) => {
                        password.set(String::new());
                        navigate(landing, crate::util::auth::redirect_options());
                    }
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
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

    let role_options = REGISTERABLE_ROLES
        .iter()
        .map(|r| view! { <option value=r.as_str()>{r.label()}</option> })
        .collect_view();

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Marketplace"</h1>
                <p class="auth-card__subtitle">"Create an account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="auth-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {role_options}
                    </select>
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href=routes::LOGIN>"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

//! Route guard decisions shared by `PublicRoute` and `PrivateRoute`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards must behave identically wherever they are mounted, so the decision
//! is a pure function of session state and the redirect is installed by one
//! helper. Components only render what the decision says.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::UserType;
use crate::state::session::SessionState;
use crate::util::routes;

/// What a guard does for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration pending: show the waiting indicator, do not navigate.
    Wait,
    /// Render the wrapped route.
    Render,
    /// Replace the current location with this path.
    Redirect(&'static str),
}

/// Decision for auth-only pages (login, register).
#[must_use]
pub fn public_route_decision(state: &SessionState) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Wait;
    }
    match state.user_type() {
        Some(role) => GuardDecision::Redirect(routes::dashboard_path(role)),
        None => GuardDecision::Render,
    }
}

/// Decision for a page reserved to `required`.
#[must_use]
pub fn private_route_decision(state: &SessionState, required: UserType) -> GuardDecision {
    if state.is_loading() {
        return GuardDecision::Wait;
    }
    match state.user_type() {
        None => GuardDecision::Redirect(routes::LOGIN),
        Some(role) if role == required => GuardDecision::Render,
        Some(role) => GuardDecision::Redirect(routes::dashboard_path(role)),
    }
}

/// Navigation options for guard redirects: the blocked page never enters history.
#[must_use]
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `decision` resolves to a redirect.
pub fn install_guard_redirect<F>(decision: Memo<GuardDecision>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = decision.get() {
            navigate(path, redirect_options());
        }
    });
}

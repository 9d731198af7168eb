//! Route guards: `PublicRoute` for auth-only pages, `PrivateRoute` for role areas.
//!
//! SYSTEM CONTEXT
//! ==============
//! Client-side gating only keeps visitors out of the wrong UI; the API must
//! still reject requests from an improperly privileged session.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserType;
use crate::state::session::SessionContext;
use crate::util::auth::{GuardDecision, install_guard_redirect, private_route_decision, public_route_decision};

/// Neutral placeholder shown while the session is unresolved or a redirect is in flight.
#[component]
pub fn SessionPending() -> impl IntoView {
    view! {
        <div class="session-pending" role="status" aria-busy="true">
            <span class="session-pending__spinner"></span>
            <span class="session-pending__label">"Loading..."</span>
        </div>
    }
}

/// Renders `children` only for signed-out visitors; signed-in visitors are
/// sent to their role's dashboard.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let decision = public_decision(expect_context::<SessionContext>());
    install_guard_redirect(decision, use_navigate());
    guarded_view(decision, children)
}

/// Renders `children` only for visitors signed in as `role`.
///
/// Signed-out visitors go to `/login`; other roles go to their own dashboard.
#[component]
pub fn PrivateRoute(role: UserType, children: ChildrenFn) -> impl IntoView {
    let decision = private_decision(expect_context::<SessionContext>(), role);
    install_guard_redirect(decision, use_navigate());
    guarded_view(decision, children)
}

fn public_decision(session: SessionContext) -> Memo<GuardDecision> {
    Memo::new(move |_| public_route_decision(&session.state()))
}

fn private_decision(session: SessionContext, role: UserType) -> Memo<GuardDecision> {
    Memo::new(move |_| private_route_decision(&session.state(), role))
}

/// Only `Render` shows the wrapped route; `Wait` and `Redirect` show [`SessionPending`].
fn shows_children(decision: GuardDecision) -> bool {
    decision == GuardDecision::Render
}

fn guarded_view(decision: Memo<GuardDecision>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || shows_children(decision.get())
            fallback=|| view! { <SessionPending/> }
        >
            {children()}
        </Show>
    }
}

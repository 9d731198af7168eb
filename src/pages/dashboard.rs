//! Role area pages rendered inside a `RoleShell` outlet.
//!
//! Item browsing, wishlists, and order management are separate features; the
//! section pages here only anchor their routes.

use leptos::prelude::*;

use crate::components::nav_shell::menu_for;
use crate::net::types::UserType;
use crate::state::session::SessionContext;

/// Dashboard of a role area: greeting plus shortcuts to the other sections.
#[component]
pub fn RoleDashboard(role: UserType) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let greeting = move || {
        session
            .user()
            .map(|u| format!("Welcome back, {}", u.name))
            .unwrap_or_default()
    };

    let shortcuts = menu_for(role)
        .iter()
        .skip(1)
        .map(|item| {
            view! {
                <a class="dashboard__card" href=item.path>
                    <span class="dashboard__card-icon">{item.icon}</span>
                    <span class="dashboard__card-label">{item.label}</span>
                </a>
            }
        })
        .collect_view();

    view! {
        <section class="dashboard">
            <h2 class="dashboard__title">{format!("{} dashboard", role.label())}</h2>
            <p class="dashboard__greeting">{greeting}</p>
            <div class="dashboard__cards">{shortcuts}</div>
        </section>
    }
}

/// Placeholder body for a role section.
#[component]
pub fn SectionPage(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <section class="section-page">
            <h2 class="section-page__title">{title}</h2>
        </section>
    }
}

/// Fallback for unmatched paths.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <a href=crate::util::routes::HOME>"Back to the marketplace"</a>
        </div>
    }
}

//! Role-scoped navigation shell: top bar, role menu, and nested route outlet.
//!
//! ARCHITECTURE
//! ============
//! Mounted only inside a `PrivateRoute` for the same role, so the shell can
//! assume the session is resolved and matches `role`. Menus are static data;
//! active highlighting is plain path equality.
//!
//! Logging out only clears the session. The enclosing `PrivateRoute` sees the
//! state change and performs the single replace-navigation to `/login`.

#[cfg(test)]
#[path = "nav_shell_test.rs"]
mod nav_shell_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::use_location;

use crate::net::types::UserType;
use crate::state::session::SessionContext;
use crate::state::ui::ShellUiState;
use crate::util::routes;

/// One menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const BUYER_MENU: &[NavItem] = &[
    NavItem { label: "Dashboard", path: routes::BUYER_DASHBOARD, icon: "⌂" },
    NavItem { label: "Browse", path: routes::BUYER_BROWSE, icon: "🔍" },
    NavItem { label: "Wishlist", path: routes::BUYER_WISHLIST, icon: "♡" },
    NavItem { label: "Orders", path: routes::BUYER_ORDERS, icon: "📦" },
];

pub const SELLER_MENU: &[NavItem] = &[
    NavItem { label: "Dashboard", path: routes::SELLER_DASHBOARD, icon: "⌂" },
    NavItem { label: "Add Item", path: routes::SELLER_ADD_ITEM, icon: "＋" },
    NavItem { label: "My Items", path: routes::SELLER_ITEMS, icon: "▤" },
    NavItem { label: "Orders", path: routes::SELLER_ORDERS, icon: "📦" },
];

pub const ADMIN_MENU: &[NavItem] = &[
    NavItem { label: "Dashboard", path: routes::ADMIN_DASHBOARD, icon: "⌂" },
    NavItem { label: "Users", path: routes::ADMIN_USERS, icon: "👥" },
    NavItem { label: "Items", path: routes::ADMIN_ITEMS, icon: "▤" },
];

#[must_use]
pub fn menu_for(role: UserType) -> &'static [NavItem] {
    match role {
        UserType::Buyer => BUYER_MENU,
        UserType::Seller => SELLER_MENU,
        UserType::Admin => ADMIN_MENU,
    }
}

#[must_use]
pub fn is_active(current_path: &str, item: &NavItem) -> bool {
    current_path == item.path
}

/// Layout for one role's area. Nested role routes render into the outlet.
#[component]
pub fn RoleShell(role: UserType) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let pathname = use_location().pathname;
    let ui = RwSignal::new(ShellUiState::default());

    // Close the mobile menu on every navigation.
    Effect::new(move || {
        pathname.track();
        ui.update(ShellUiState::close_mobile_menu);
    });

    let session_name = session.clone();
    let user_name = move || session_name.user().map(|u| u.name).unwrap_or_default();

    let on_logout = move |_ev: leptos::ev::MouseEvent| session.logout();

    let items = menu_for(role)
        .iter()
        .map(|item| {
            let item = *item;
            let active = move || is_active(&pathname.get(), &item);
            view! {
                <li class="nav-shell__item">
                    <a
                        href=item.path
                        class="nav-shell__link"
                        class:nav-shell__link--active=active
                        aria-current=move || active().then_some("page")
                    >
                        <span class="nav-shell__icon">{item.icon}</span>
                        <span class="nav-shell__label">{item.label}</span>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div class=format!("nav-shell nav-shell--{}", role.as_str())>
            <header class="nav-shell__bar">
                <button
                    class="btn nav-shell__menu-toggle"
                    title="Toggle menu"
                    on:click=move |_| ui.update(ShellUiState::toggle_mobile_menu)
                >
                    "☰"
                </button>
                <a href=routes::dashboard_path(role) class="nav-shell__brand">
                    "Marketplace"
                </a>
                <span class="nav-shell__role">{role.label()}</span>
                <span class="nav-shell__spacer"></span>
                <span class="nav-shell__user">{user_name}</span>
                <button class="btn nav-shell__logout" on:click=on_logout>
                    "Log out"
                </button>
            </header>
            <nav class="nav-shell__menu" class:nav-shell__menu--open=move || ui.get().mobile_menu_open>
                <ul class="nav-shell__list">{items}</ul>
            </nav>
            <main class="nav-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::nav_shell::RoleShell;
use crate::components::route_guard::{PrivateRoute, PublicRoute};
use crate::config::ClientConfig;
use crate::net::types::UserType;
use crate::pages::{
    dashboard::{NotFoundPage, RoleDashboard, SectionPage},
    home::HomePage,
    login::LoginPage,
    register::RegisterPage,
};
use crate::state::session::SessionContext;
use crate::util::auth::redirect_options;
use crate::util::routes;
use crate::util::session_store::SessionStore;
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the tab's single `SessionContext` and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env_or_default();
    let session = SessionContext::new(SessionStore::new(BrowserStorage));
    provide_context(config);
    provide_context(session.clone());

    // Effects only run in the browser, so server-rendered HTML always shows
    // the guards' waiting state and hydration resolves it.
    Effect::new(move || session.hydrate());

    view! {
        <Stylesheet id="leptos" href="/pkg/marketplace.css"/>
        <Title text="Marketplace"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <PublicRoute><RegisterPage/></PublicRoute> }
                />

                <ParentRoute
                    path=StaticSegment("buyer")
                    view=|| view! { <PrivateRoute role=UserType::Buyer><RoleShell role=UserType::Buyer/></PrivateRoute> }
                >
                    <Route path=StaticSegment("dashboard") view=|| view! { <RoleDashboard role=UserType::Buyer/> }/>
                    <Route path=StaticSegment("browse") view=|| view! { <SectionPage title="Browse items"/> }/>
                    <Route path=StaticSegment("wishlist") view=|| view! { <SectionPage title="Wishlist"/> }/>
                    <Route path=StaticSegment("orders") view=|| view! { <SectionPage title="My orders"/> }/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path=routes::BUYER_DASHBOARD options=redirect_options()/> }
                    />
                </ParentRoute>

                <ParentRoute
                    path=StaticSegment("seller")
                    view=|| view! { <PrivateRoute role=UserType::Seller><RoleShell role=UserType::Seller/></PrivateRoute> }
                >
                    <Route path=StaticSegment("dashboard") view=|| view! { <RoleDashboard role=UserType::Seller/> }/>
                    <Route path=StaticSegment("add-item") view=|| view! { <SectionPage title="Add an item"/> }/>
                    <Route path=StaticSegment("items") view=|| view! { <SectionPage title="My items"/> }/>
                    <Route path=StaticSegment("orders") view=|| view! { <SectionPage title="Incoming orders"/> }/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path=routes::SELLER_DASHBOARD options=redirect_options()/> }
                    />
                </ParentRoute>

                <ParentRoute
                    path=StaticSegment("admin")
                    view=|| view! { <PrivateRoute role=UserType::Admin><RoleShell role=UserType::Admin/></PrivateRoute> }
                >
                    <Route path=StaticSegment("dashboard") view=|| view! { <RoleDashboard role=UserType::Admin/> }/>
                    <Route path=StaticSegment("users") view=|| view! { <SectionPage title="Users"/> }/>
                    <Route path=StaticSegment("items") view=|| view! { <SectionPage title="Listed items"/> }/>
                    <Route
                        path=StaticSegment("")
                        view=|| view! { <Redirect path=routes::ADMIN_DASHBOARD options=redirect_options()/> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

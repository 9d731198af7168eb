//! Named client routes and the role → landing page mapping.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::{UnknownRole, UserType};

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

pub const BUYER_DASHBOARD: &str = "/buyer/dashboard";
pub const BUYER_BROWSE: &str = "/buyer/browse";
pub const BUYER_WISHLIST: &str = "/buyer/wishlist";
pub const BUYER_ORDERS: &str = "/buyer/orders";

pub const SELLER_DASHBOARD: &str = "/seller/dashboard";
pub const SELLER_ADD_ITEM: &str = "/seller/add-item";
pub const SELLER_ITEMS: &str = "/seller/items";
pub const SELLER_ORDERS: &str = "/seller/orders";

pub const ADMIN_DASHBOARD: &str = "/admin/dashboard";
pub const ADMIN_USERS: &str = "/admin/users";
pub const ADMIN_ITEMS: &str = "/admin/items";

/// Home route of each role's area.
#[must_use]
pub fn dashboard_path(user_type: UserType) -> &'static str {
    match user_type {
        UserType::Buyer => BUYER_DASHBOARD,
        UserType::Seller => SELLER_DASHBOARD,
        UserType::Admin => ADMIN_DASHBOARD,
    }
}

/// Landing page for a role string received from outside the type system.
///
/// Roles are a closed set, so an unknown value is a contract violation
/// upstream: debug builds assert, release builds log and land on [`HOME`].
#[must_use]
pub fn landing_path(raw_role: &str) -> &'static str {
    match raw_role.parse::<UserType>() {
        Ok(user_type) => dashboard_path(user_type),
        Err(UnknownRole(role)) => {
            debug_assert!(false, "unrecognized role {role:?} reached redirect mapping");
            leptos::logging::error!("routing: unrecognized role {role:?}, falling back to {HOME}");
            HOME
        }
    }
}

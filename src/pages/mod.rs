//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages assume their guard already ran: auth pages sit behind `PublicRoute`,
//! role pages behind `PrivateRoute` inside a `RoleShell`.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guards and shells read the session from Leptos context; pages never
//! re-implement access checks.

pub mod nav_shell;
pub mod route_guard;

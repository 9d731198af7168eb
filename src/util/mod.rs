//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser storage and routing policy from page and
//! component code so both can be tested without a DOM.

pub mod auth;
pub mod routes;
pub mod session_store;
pub mod storage;

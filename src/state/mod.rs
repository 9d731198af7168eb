//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only state shared across the whole tree; `ui` holds
//! per-shell chrome state that never outlives its component.

pub mod session;
pub mod ui;

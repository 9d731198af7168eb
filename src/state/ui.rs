//! Local chrome state for the role navigation shells.
//!
//! DESIGN
//! ======
//! Ephemeral presentation state only. Nothing here is persisted or derived
//! from the session.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state owned by a single navigation shell instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShellUiState {
    pub mobile_menu_open: bool,
}

impl ShellUiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Called on every navigation.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

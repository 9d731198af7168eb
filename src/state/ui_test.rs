use super::*;

#[test]
fn shell_ui_state_default_menu_closed() {
    assert!(!ShellUiState::default().mobile_menu_open);
}

#[test]
fn toggle_mobile_menu_flips() {
    let mut state = ShellUiState::default();
    state.toggle_mobile_menu();
    assert!(state.mobile_menu_open);
    state.toggle_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_mobile_menu_closes_open_menu() {
    let mut state = ShellUiState::default();
    state.toggle_mobile_menu();

    state.close_mobile_menu();
    assert!(!state.mobile_menu_open);
}

#[test]
fn close_mobile_menu_on_closed_menu_is_noop() {
    let mut state = ShellUiState::default();
    state.close_mobile_menu();
    assert_eq!(state, ShellUiState::default());
}

use super::*;

#[test]
fn ui_state_default_dark_mode_off() {
    let state = UiState::default();
    assert!(!state.dark_mode);
}

#[test]
fn ui_state_default_nav_closed() {
    let state = UiState::default();
    assert!(!state.nav_open);
    assert!(state.flash.is_none());
}

#[test]
fn take_flash_is_one_shot() {
    let mut state = UiState { flash: Some("Account created.".to_owned()), ..UiState::default() };
    assert_eq!(state.take_flash().as_deref(), Some("Account created."));
    assert_eq!(state.take_flash(), None);
}

use super::*;
use crate::net::types::PinValue;

fn guest() -> AuthUser {
    AuthUser {
        id: "u1".to_owned(),
        username: "guest".to_owned(),
        pin: PinValue::Text("991231".to_owned()),
        from: "x".to_owned(),
        profile_pic: String::new(),
        friend_group: "1".to_owned(),
    }
}

#[test]
fn auth_state_starts_loading_and_logged_out() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert_eq!(state.user_id(), None);
}

#[test]
fn restore_without_session_just_clears_loading() {
    let mut state = AuthState::default();
    state.restore(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
}

#[test]
fn restore_with_session_sets_user() {
    let mut state = AuthState::default();
    state.restore(Some(guest()));
    assert!(!state.loading);
    assert_eq!(state.user_id(), Some("u1".to_owned()));
}

#[test]
fn set_user_then_clear_round_trips() {
    let mut state = AuthState::default();
    state.set_user(guest());
    assert_eq!(state.user_id(), Some("u1".to_owned()));
    state.clear();
    assert!(state.user.is_none());
    // Clearing is a logout, not a restart: restore stays finished.
    assert!(!state.loading);
}

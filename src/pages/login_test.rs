use super::*;
use crate::net::types::PinValue;

fn stored_user(pin: PinValue) -> AuthUser {
    AuthUser {
        id: "1".to_owned(),
        username: "mia".to_owned(),
        pin,
        from: "earth".to_owned(),
        profile_pic: String::new(),
        friend_group: "1".to_owned(),
    }
}

#[test]
fn empty_fields_are_rejected_together() {
    assert_eq!(validate_login_input("", "123456"), Err("Enter both username and PIN."));
    assert_eq!(validate_login_input("mia", ""), Err("Enter both username and PIN."));
    assert_eq!(validate_login_input("  ", "123456"), Err("Enter both username and PIN."));
}

#[test]
fn pin_must_be_six_digits() {
    assert_eq!(validate_login_input("mia", "12345"), Err("PIN must be exactly 6 digits."));
    assert_eq!(validate_login_input("mia", "1234567"), Err("PIN must be exactly 6 digits."));
    assert_eq!(validate_login_input("mia", "12a456"), Err("PIN must be exactly 6 digits."));
    assert_eq!(validate_login_input("mia", "123456"), Ok(()));
}

#[test]
fn leading_zero_pin_passes_shape_check() {
    assert_eq!(validate_login_input("mia", "012345"), Ok(()));
}

#[test]
fn unknown_user_and_wrong_pin_share_one_error() {
    let missing = login_outcome(None, "123456").unwrap_err();
    let wrong = login_outcome(Some(stored_user(PinValue::Text("654321".to_owned()))), "123456")
        .unwrap_err();
    assert_eq!(missing, wrong);
}

#[test]
fn text_pin_requires_exact_match() {
    let user = stored_user(PinValue::Text("123456".to_owned()));
    assert!(login_outcome(Some(user), "123456").is_ok());
}

#[test]
fn numeric_pin_matches_leading_zero_input() {
    let user = stored_user(PinValue::Number(12345));
    let logged_in = login_outcome(Some(user), "012345").unwrap();
    assert_eq!(logged_in.username, "mia");
}

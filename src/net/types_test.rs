use super::*;

// =============================================================
// PinValue comparison
// =============================================================

#[test]
fn numeric_pin_matches_equal_integer_input() {
    let pin = PinValue::Number(991_231);
    assert!(pin.matches("991231"));
}

#[test]
fn numeric_pin_matches_input_with_leading_zero() {
    // 6-digit input "012345" parses to the stored integer 12345.
    let pin = PinValue::Number(12_345);
    assert!(pin.matches("012345"));
}

#[test]
fn numeric_pin_rejects_different_value_and_non_numeric_input() {
    let pin = PinValue::Number(991_231);
    assert!(!pin.matches("991232"));
    assert!(!pin.matches("abc123"));
    assert!(!pin.matches(""));
}

#[test]
fn text_pin_requires_exact_equality() {
    let pin = PinValue::Text("991231".to_owned());
    assert!(pin.matches("991231"));
    assert!(!pin.matches("91231"));
    assert!(!pin.matches("0991231"));
}

// =============================================================
// Row normalization
// =============================================================

#[test]
fn auth_user_row_normalizes_numeric_columns() {
    let row = serde_json::json!({
        "id": 7,
        "username": "guest",
        "password": 991231,
        "from": 1999,
        "profile_pic": "",
        "friend_group": 0
    });
    let user: AuthUser = serde_json::from_value(row).expect("row should deserialize");
    assert_eq!(user.id, "7");
    assert_eq!(user.from, "1999");
    assert_eq!(user.friend_group, "0");
    assert_eq!(user.pin, PinValue::Number(991_231));
}

#[test]
fn auth_user_row_accepts_string_columns() {
    let row = serde_json::json!({
        "id": "u1",
        "username": "guest",
        "password": "991231",
        "from": "seoul",
        "friend_group": "2"
    });
    let user: AuthUser = serde_json::from_value(row).expect("row should deserialize");
    assert_eq!(user.id, "u1");
    assert_eq!(user.pin, PinValue::Text("991231".to_owned()));
    assert_eq!(user.profile_pic, "");
}

#[test]
fn auth_user_row_rejects_non_scalar_id() {
    let row = serde_json::json!({
        "id": ["u1"],
        "username": "guest",
        "password": "991231",
        "from": "x",
        "friend_group": "2"
    });
    assert!(serde_json::from_value::<AuthUser>(row).is_err());
}

#[test]
fn auth_user_display_drops_credential_column() {
    let user = AuthUser {
        id: "u1".to_owned(),
        username: "guest".to_owned(),
        pin: PinValue::Text("991231".to_owned()),
        from: "x".to_owned(),
        profile_pic: "pic.png".to_owned(),
        friend_group: "2".to_owned(),
    };
    let display = user.display();
    assert_eq!(display.id, "u1");
    assert_eq!(display.username, "guest");
    assert_eq!(display.profile_pic, "pic.png");
    assert_eq!(display.friend_group, "2");
}

#[test]
fn chatroom_row_defaults_missing_title_to_none() {
    let room: Chatroom = serde_json::from_value(serde_json::json!({ "id": 3 })).expect("row should deserialize");
    assert_eq!(room.id, "3");
    assert_eq!(room.title, None);
}

#[test]
fn unread_count_row_normalizes_numeric_chatroom_id() {
    let row: UnreadCount =
        serde_json::from_value(serde_json::json!({ "chatroom_id": 12, "unread_count": 4 })).expect("row should deserialize");
    assert_eq!(row.chatroom_id, "12");
    assert_eq!(row.unread_count, 4);
}

#[test]
fn chat_message_row_maps_message_column_to_body() {
    let row = serde_json::json!({
        "id": "m1",
        "chatroom_id": 5,
        "author": { "id": 7, "username": "ann", "profile_pic": "" },
        "message": "hello",
        "created_at": "2026-01-01T00:00:00Z"
    });
    let msg: ChatMessage = serde_json::from_value(row).expect("row should deserialize");
    assert_eq!(msg.chatroom_id, "5");
    assert_eq!(msg.author.id, "7");
    assert_eq!(msg.body, "hello");
}

#[test]
fn notification_row_defaults_read_at_to_none() {
    let row = serde_json::json!({
        "id": "n1",
        "user_id": 7,
        "body": "hi",
        "is_read": false,
        "created_at": "2026-01-01T00:00:00Z"
    });
    let notif: Notification = serde_json::from_value(row).expect("row should deserialize");
    assert!(!notif.is_read);
    assert_eq!(notif.read_at, None);
    assert_eq!(notif.user_id, "7");
}

use super::*;

#[test]
fn table_url_joins_base_and_table() {
    assert_eq!(table_url("user"), format!("{}/rest/v1/user", config::rest_base()));
}

#[test]
fn rpc_url_uses_rpc_prefix() {
    assert!(rpc_url("find_chatroom").ends_with("/rest/v1/rpc/find_chatroom"));
}

#[test]
fn user_by_username_url_filters_by_equality() {
    assert!(user_by_username_url("guest").ends_with("/user?username=eq.guest&select=*"));
}

#[test]
fn users_by_group_url_includes_everyone_group() {
    let url = users_by_group_url("2", "guest");
    assert!(url.contains("or=(friend_group.eq.2,friend_group.eq.0)"));
    assert!(url.contains("username=neq.guest"));
}

#[test]
fn users_by_group_url_group_zero_sees_everyone() {
    let url = users_by_group_url("0", "guest");
    assert!(!url.contains("friend_group"));
    assert!(url.contains("username=neq.guest"));
}

#[test]
fn chat_messages_url_is_scoped_and_ordered() {
    let url = chat_messages_url("12");
    assert!(url.contains("/v_chat?chatroom_id=eq.12"));
    assert!(url.contains("order=created_at.asc"));
}

#[test]
fn direct_messages_url_matches_either_direction() {
    let url = direct_messages_url("u1");
    assert!(url.contains("or=(author_id.eq.u1,recipient_id.eq.u1)"));
}

#[test]
fn unread_notifications_url_targets_unread_rows_only() {
    let url = unread_notifications_url("u1");
    assert!(url.contains("user_id=eq.u1"));
    assert!(url.contains("is_read=eq.false"));
}

#[test]
fn filter_values_are_percent_encoded() {
    let url = user_by_username_url("a&b=c");
    assert!(url.ends_with("/user?username=eq.a%26b%3Dc&select=*"));

    // Commas and parens in a value must not read as or-filter syntax.
    let url = users_by_group_url("2", "sally,(x)");
    assert!(url.contains("username=neq.sally%2C%28x%29"));
    assert!(!url.contains("neq.sally,("));

    let url = direct_messages_url("u 1");
    assert!(url.contains("or=(author_id.eq.u%201,recipient_id.eq.u%201)"));
}

#[test]
fn resolve_recipient_prefers_explicit_recipient() {
    assert_eq!(resolve_recipient(Some("u2"), Some("admin")), Some("u2".to_owned()));
}

#[test]
fn resolve_recipient_defaults_to_admin() {
    assert_eq!(resolve_recipient(None, Some("admin")), Some("admin".to_owned()));
}

#[test]
fn resolve_recipient_without_admin_or_recipient_is_none() {
    assert_eq!(resolve_recipient(None, None), None);
}

#[test]
fn parse_rpc_chatroom_id_handles_scalars_and_null() {
    assert_eq!(parse_rpc_chatroom_id(&serde_json::json!("c1")), Some("c1".to_owned()));
    assert_eq!(parse_rpc_chatroom_id(&serde_json::json!(42)), Some("42".to_owned()));
    assert_eq!(parse_rpc_chatroom_id(&serde_json::Value::Null), None);
}

#[test]
fn inserted_row_accepts_numeric_id() {
    let row: InsertedRow = serde_json::from_value(serde_json::json!({ "id": 9 })).expect("row should deserialize");
    assert_eq!(row.id, "9");
}

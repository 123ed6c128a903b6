use super::*;

fn notif(id: &str, read: bool) -> Notification {
    Notification {
        id: id.to_owned(),
        user_id: "u1".to_owned(),
        body: "hello".to_owned(),
        is_read: read,
        read_at: read.then(|| "2026-01-01T00:00:00Z".to_owned()),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn unread_count_ignores_read_items() {
    let state = NotificationsState { items: vec![notif("n1", false), notif("n2", true), notif("n3", false)] };
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn mark_read_changes_only_the_named_notification() {
    let mut state = NotificationsState { items: vec![notif("n1", false), notif("n2", false)] };
    state.mark_read("n1", "2026-02-02T10:00:00Z");

    assert!(state.items[0].is_read);
    assert_eq!(state.items[0].read_at.as_deref(), Some("2026-02-02T10:00:00Z"));
    assert!(!state.items[1].is_read);
    assert_eq!(state.items[1].read_at, None);
}

#[test]
fn mark_read_with_unknown_id_is_a_no_op() {
    let mut state = NotificationsState { items: vec![notif("n1", false)] };
    state.mark_read("missing", "2026-02-02T10:00:00Z");
    assert_eq!(state.unread_count(), 1);
}

#[test]
fn mark_all_read_flags_every_notification() {
    let mut state = NotificationsState { items: vec![notif("n1", false), notif("n2", false), notif("n3", true)] };
    state.mark_all_read("2026-02-02T10:00:00Z");
    assert_eq!(state.unread_count(), 0);
    assert!(state.items.iter().all(|n| n.read_at.is_some()));
}

#[test]
fn replace_is_wholesale() {
    let mut state = NotificationsState { items: vec![notif("n1", false)] };
    state.replace(vec![notif("n2", true)]);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "n2");
}

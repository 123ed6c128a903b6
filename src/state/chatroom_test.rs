use super::*;

fn counts(pairs: &[(&str, i64)]) -> Vec<UnreadCount> {
    pairs
        .iter()
        .map(|(id, n)| UnreadCount { chatroom_id: (*id).to_owned(), unread_count: *n })
        .collect()
}

#[test]
fn replace_unread_counts_is_wholesale() {
    let mut state = ChatroomState::default();
    state.replace_unread_counts(&counts(&[("1", 3), ("2", 1)]));
    assert_eq!(state.unread_count("1"), 3);
    assert_eq!(state.unread_count("2"), 1);

    // A later poll that no longer mentions room 2 drops its stale count.
    state.replace_unread_counts(&counts(&[("1", 5)]));
    assert_eq!(state.unread_count("1"), 5);
    assert_eq!(state.unread_count("2"), 0);
}

#[test]
fn unknown_rooms_count_as_read() {
    let state = ChatroomState::default();
    assert_eq!(state.unread_count("nope"), 0);
}

#[test]
fn select_zeroes_that_rooms_count_only() {
    let mut state = ChatroomState::default();
    state.replace_unread_counts(&counts(&[("1", 3), ("2", 7)]));
    state.select("1".to_owned());
    assert_eq!(state.selected.as_deref(), Some("1"));
    assert_eq!(state.unread_count("1"), 0);
    assert_eq!(state.unread_count("2"), 7);
}

#[test]
fn clear_selection_keeps_counts() {
    let mut state = ChatroomState::default();
    state.replace_unread_counts(&counts(&[("1", 2)]));
    state.select("1".to_owned());
    state.clear_selection();
    assert_eq!(state.selected, None);
    assert_eq!(state.unread_count("1"), 0);
}

use super::*;
use crate::net::types::MessageParty;

fn msg(id: &str, body: &str) -> ChatMessage {
    ChatMessage {
        id: id.to_owned(),
        chatroom_id: "1".to_owned(),
        author: MessageParty {
            id: "u1".to_owned(),
            username: "ann".to_owned(),
            profile_pic: String::new(),
        },
        body: body.to_owned(),
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

#[test]
fn replace_overwrites_and_clears_loading() {
    let mut state = ChatState { messages: vec![msg("m1", "old")], loading: true };
    state.replace(vec![msg("m2", "new")]);
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].id, "m2");
    assert!(!state.loading);
}

#[test]
fn push_unique_appends_new_messages_in_order() {
    let mut state = ChatState::default();
    state.push_unique(msg("m1", "one"));
    state.push_unique(msg("m2", "two"));
    assert_eq!(state.messages.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), ["m1", "m2"]);
}

#[test]
fn push_unique_drops_duplicate_ids() {
    let mut state = ChatState::default();
    state.push_unique(msg("m1", "one"));
    state.push_unique(msg("m1", "echo of one"));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].body, "one");
}

#[test]
fn clear_empties_the_list() {
    let mut state = ChatState { messages: vec![msg("m1", "one")], loading: true };
    state.clear();
    assert!(state.messages.is_empty());
    assert!(!state.loading);
}

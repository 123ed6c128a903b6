use super::*;
use crate::net::types::User;

fn user(id: &str, username: &str) -> User {
    User {
        id: id.to_owned(),
        username: username.to_owned(),
        profile_pic: String::new(),
        friend_group: "1".to_owned(),
    }
}

#[test]
fn direct_pairing_reuses_existing_room() {
    assert_eq!(decide(false, Some("42".to_owned())), AddDecision::OpenExisting("42".to_owned()));
}

#[test]
fn direct_pairing_without_existing_room_creates() {
    assert_eq!(decide(false, None), AddDecision::CreateNew);
}

#[test]
fn group_title_collision_is_rejected() {
    assert_eq!(decide(true, Some("42".to_owned())), AddDecision::DuplicateTitle);
}

#[test]
fn group_without_collision_creates() {
    assert_eq!(decide(true, None), AddDecision::CreateNew);
}

#[test]
fn toggle_selection_adds_then_removes() {
    let mut selected = Vec::new();
    toggle_selection(&mut selected, "a");
    toggle_selection(&mut selected, "b");
    assert_eq!(selected, vec!["a".to_owned(), "b".to_owned()]);

    toggle_selection(&mut selected, "a");
    assert_eq!(selected, vec!["b".to_owned()]);
}

#[test]
fn default_title_sorts_all_member_names() {
    let zoe = user("1", "zoe");
    let amy = user("2", "amy");
    let picked = vec![&zoe, &amy];
    assert_eq!(default_group_title("mia", &picked), "amy, mia, zoe");
}

#[test]
fn default_title_is_order_insensitive() {
    let zoe = user("1", "zoe");
    let amy = user("2", "amy");
    let forward = default_group_title("mia", &[&zoe, &amy]);
    let backward = default_group_title("mia", &[&amy, &zoe]);
    assert_eq!(forward, backward);
}

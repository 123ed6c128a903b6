use super::*;
use crate::net::types::{ChatMessage, MessageParty};

fn sample_message() -> ChatMessage {
    ChatMessage {
        id: "m1".to_owned(),
        chatroom_id: "7".to_owned(),
        author: MessageParty {
            id: "u1".to_owned(),
            username: "alice".to_owned(),
            profile_pic: String::new(),
        },
        body: "hello".to_owned(),
        created_at: "2026-08-29T10:00:00Z".to_owned(),
    }
}

#[test]
fn topic_prefixes_chatroom_id() {
    assert_eq!(topic_for("7"), "ch7");
    assert_eq!(topic_for("42"), "ch42");
}

#[test]
fn join_envelope_carries_topic_and_ref() {
    let text = join_envelope("ch7", "ref-1");
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["topic"], "ch7");
    assert_eq!(value["event"], "join");
    assert_eq!(value["ref"], "ref-1");
}

#[test]
fn broadcast_envelope_nests_new_message_payload() {
    let text = broadcast_envelope("ch7", "ref-2", &sample_message());
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["event"], "broadcast");
    assert_eq!(value["payload"]["event"], "new-message");
    assert_eq!(value["payload"]["payload"]["message"], "hello");
}

#[test]
fn broadcast_round_trips_through_parse() {
    let message = sample_message();
    let text = broadcast_envelope("ch7", "ref-3", &message);
    assert_eq!(parse_incoming_message(&text, "ch7"), Some(message));
}

#[test]
fn parse_ignores_other_topics() {
    let text = broadcast_envelope("ch8", "ref-4", &sample_message());
    assert_eq!(parse_incoming_message(&text, "ch7"), None);
}

#[test]
fn parse_ignores_non_broadcast_events() {
    let text = join_envelope("ch7", "ref-5");
    assert_eq!(parse_incoming_message(&text, "ch7"), None);
}

#[test]
fn parse_ignores_other_payload_events() {
    let text = r#"{"topic":"ch7","event":"broadcast","ref":null,
        "payload":{"event":"presence","payload":{}}}"#;
    assert_eq!(parse_incoming_message(text, "ch7"), None);
}

#[test]
fn parse_ignores_malformed_frames() {
    assert_eq!(parse_incoming_message("not json", "ch7"), None);
    assert_eq!(parse_incoming_message("{}", "ch7"), None);
}

#[test]
fn ok_reply_requires_matching_ref_and_status() {
    let ok = r#"{"topic":"ch7","event":"reply","ref":"r1","payload":{"status":"ok"}}"#;
    assert!(is_ok_reply(ok, "r1"));
    assert!(!is_ok_reply(ok, "r2"));

    let error = r#"{"topic":"ch7","event":"reply","ref":"r1","payload":{"status":"error"}}"#;
    assert!(!is_ok_reply(error, "r1"));

    let broadcast = broadcast_envelope("ch7", "r1", &sample_message());
    assert!(!is_ok_reply(&broadcast, "r1"));
}

#[test]
fn websocket_url_targets_realtime_endpoint() {
    let url = websocket_url();
    assert!(url.contains("/realtime/v1/websocket"));
    assert!(url.contains("apikey="));
}

//! Realtime broadcast channel for chatroom messages.
//!
//! Each open chatroom subscribes to the topic `ch<chatroomId>` on the
//! hosted service's websocket endpoint; a send publishes the persisted
//! message on the same topic so other open clients receive it without a
//! poll. The channel is delivery glue only: the service remains the
//! writer of record, and clients that miss a broadcast converge on their
//! next fetch.
//!
//! ERROR HANDLING
//! ==============
//! Subscription sockets reconnect with capped backoff until the owning
//! view cancels the guard. Publishing is a one-shot send that reports
//! failure to the caller; the message is durably persisted by then and
//! recipients fall back to poll/refresh.

#[cfg(test)]
#[path = "realtime_test.rs"]
mod realtime_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::{Deserialize, Serialize};

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ChatMessage;
#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;

#[cfg(any(test, feature = "hydrate"))]
/// Broadcast event name carried inside the envelope payload.
const NEW_MESSAGE_EVENT: &str = "new-message";

/// Topic name for a chatroom's broadcast channel.
pub fn topic_for(chatroom_id: &str) -> String {
    format!("ch{chatroom_id}")
}

#[cfg(any(test, feature = "hydrate"))]
/// Wire envelope for the realtime channel.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct Envelope {
    topic: String,
    event: String,
    #[serde(rename = "ref", default)]
    reference: Option<String>,
    #[serde(default)]
    payload: serde_json::Value,
}

#[cfg(any(test, feature = "hydrate"))]
/// Serialized join envelope announcing interest in `topic`.
fn join_envelope(topic: &str, reference: &str) -> String {
    let envelope = Envelope {
        topic: topic.to_owned(),
        event: "join".to_owned(),
        reference: Some(reference.to_owned()),
        payload: serde_json::Value::Object(serde_json::Map::new()),
    };
    serde_json::to_string(&envelope).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
/// Serialized broadcast envelope carrying a persisted message.
fn broadcast_envelope(topic: &str, reference: &str, message: &ChatMessage) -> String {
    let envelope = Envelope {
        topic: topic.to_owned(),
        event: "broadcast".to_owned(),
        reference: Some(reference.to_owned()),
        payload: serde_json::json!({
            "event": NEW_MESSAGE_EVENT,
            "payload": message,
        }),
    };
    serde_json::to_string(&envelope).unwrap_or_default()
}

#[cfg(any(test, feature = "hydrate"))]
/// Parse an incoming frame into a chat message for `topic`.
///
/// Frames for other topics, non-broadcast events, and malformed payloads
/// all parse to `None` and are ignored by the subscription loop.
fn parse_incoming_message(text: &str, topic: &str) -> Option<ChatMessage> {
    let envelope: Envelope = serde_json::from_str(text).ok()?;
    if envelope.topic != topic || envelope.event != "broadcast" {
        return None;
    }
    if envelope.payload.get("event").and_then(|v| v.as_str()) != Some(NEW_MESSAGE_EVENT) {
        return None;
    }
    let payload = envelope.payload.get("payload")?;
    serde_json::from_value(payload.clone()).ok()
}

#[cfg(any(test, feature = "hydrate"))]
/// Whether a frame is the service's ok-acknowledgement for `reference`.
fn is_ok_reply(text: &str, reference: &str) -> bool {
    let Ok(envelope) = serde_json::from_str::<Envelope>(text) else {
        return false;
    };
    envelope.event == "reply"
        && envelope.reference.as_deref() == Some(reference)
        && envelope.payload.get("status").and_then(|v| v.as_str()) == Some("ok")
}

#[cfg(any(test, feature = "hydrate"))]
fn websocket_url() -> String {
    format!(
        "{}/realtime/v1/websocket?apikey={}",
        super::config::realtime_base(),
        super::config::anon_key()
    )
}

/// Handle to a running subscription; cancelling stops the reconnect loop.
#[derive(Clone, Debug)]
pub struct RealtimeGuard {
    alive: std::sync::Arc<std::sync::atomic::AtomicBool>,
}

impl RealtimeGuard {
    pub fn cancel(&self) {
        self.alive.store(false, std::sync::atomic::Ordering::Relaxed);
    }
}

/// Subscribe to a chatroom's topic, appending incoming messages to `chat`.
///
/// Reconnects with capped exponential backoff until the guard is
/// cancelled (room change or unmount).
#[cfg(feature = "hydrate")]
pub fn subscribe(chatroom_id: &str, chat: leptos::prelude::RwSignal<ChatState>) -> RealtimeGuard {
    use std::sync::atomic::Ordering;

    let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
    let alive_task = alive.clone();
    let topic = topic_for(chatroom_id);

    leptos::task::spawn_local(async move {
        let mut backoff_ms: u32 = 1000;
        let max_backoff_ms: u32 = 10_000;

        while alive_task.load(Ordering::Relaxed) {
            match run_subscription(&topic, chat, &alive_task).await {
                Ok(()) => {
                    backoff_ms = 1000;
                }
                Err(e) => {
                    leptos::logging::warn!("realtime subscription error on {topic}: {e}");
                }
            }
            if !alive_task.load(Ordering::Relaxed) {
                break;
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
            backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
        }
    });

    RealtimeGuard { alive }
}

/// Connect, join the topic, and process frames until disconnect or cancel.
#[cfg(feature = "hydrate")]
async fn run_subscription(
    topic: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    alive: &std::sync::Arc<std::sync::atomic::AtomicBool>,
) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    let mut ws = WebSocket::open(&websocket_url()).map_err(|e| e.to_string())?;
    let join_ref = uuid::Uuid::new_v4().to_string();
    ws.send(Message::Text(join_envelope(topic, &join_ref)))
        .await
        .map_err(|e| e.to_string())?;

    while let Some(frame) = ws.next().await {
        if !alive.load(std::sync::atomic::Ordering::Relaxed) {
            break;
        }
        match frame {
            Ok(Message::Text(text)) => {
                if let Some(message) = parse_incoming_message(&text, topic) {
                    chat.update(|c| c.push_unique(message));
                }
            }
            Ok(Message::Bytes(_)) => {}
            Err(e) => return Err(e.to_string()),
        }
    }
    Ok(())
}

/// Publish a persisted message on its chatroom's topic.
///
/// Resolves once the service acknowledges the broadcast; the caller
/// treats a send as successful only when both the insert and this
/// acknowledgement succeed.
///
/// # Errors
///
/// Returns an error string when the socket cannot be opened, the send
/// fails, or no ok-acknowledgement arrives within the timeout.
#[cfg(feature = "hydrate")]
pub async fn publish(chatroom_id: &str, message: &ChatMessage) -> Result<(), String> {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    const ACK_TIMEOUT_MS: u64 = 5000;

    let topic = topic_for(chatroom_id);
    let mut ws = WebSocket::open(&websocket_url()).map_err(|e| e.to_string())?;

    let join_ref = uuid::Uuid::new_v4().to_string();
    ws.send(Message::Text(join_envelope(&topic, &join_ref)))
        .await
        .map_err(|e| e.to_string())?;

    let send_ref = uuid::Uuid::new_v4().to_string();
    ws.send(Message::Text(broadcast_envelope(&topic, &send_ref, message)))
        .await
        .map_err(|e| e.to_string())?;

    let ack = async {
        while let Some(frame) = ws.next().await {
            match frame {
                Ok(Message::Text(text)) if is_ok_reply(&text, &send_ref) => return Ok(()),
                Ok(_) => {}
                Err(e) => return Err(e.to_string()),
            }
        }
        Err("connection closed before acknowledgement".to_owned())
    };
    let timeout = async {
        gloo_timers::future::sleep(std::time::Duration::from_millis(ACK_TIMEOUT_MS)).await;
        Err::<(), String>("broadcast acknowledgement timed out".to_owned())
    };

    match futures::future::select(Box::pin(ack), Box::pin(timeout)).await {
        futures::future::Either::Left((result, _)) | futures::future::Either::Right((result, _)) => result,
    }
}

//! Table-style REST calls against the hosted data service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side / native tests: stubs returning `None`/empty so logic code
//! compiles and degrades without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Reads return `Option`/empty collections and writes return
//! `bool`/`Option` so callers branch on outcome instead of unwinding;
//! failures log via `leptos::logging::warn!` and leave prior state to the
//! caller. There is no retry here; polling scopes simply pick up the next
//! tick.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config;
use super::types::{AuthUser, ChatMessage, Chatroom, DirectMessage, Notification, UnreadCount, User};
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;

/// Insert-returning rows only need the generated id.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Deserialize)]
struct InsertedRow {
    #[serde(deserialize_with = "super::types::deserialize_string_from_scalar")]
    id: String,
}

// =============================================================
// Endpoint builders (pure, unit-tested)
//
// Every interpolated value is percent-encoded so usernames or ids
// containing filter metacharacters cannot change the query shape.
// =============================================================

#[cfg(any(test, feature = "hydrate"))]
fn table_url(table: &str) -> String {
    format!("{}/rest/v1/{table}", config::rest_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn rpc_url(function: &str) -> String {
    format!("{}/rest/v1/rpc/{function}", config::rest_base())
}

#[cfg(any(test, feature = "hydrate"))]
fn user_by_username_url(username: &str) -> String {
    format!("{}?username=eq.{}&select=*", table_url("user"), urlencoding::encode(username))
}

/// Friends visible to `group`: same group or the everyone-group `0`,
/// never the viewer. A viewer in group `0` sees every user.
#[cfg(any(test, feature = "hydrate"))]
fn users_by_group_url(group: &str, username: &str) -> String {
    let username = urlencoding::encode(username);
    if group == "0" {
        format!("{}?username=neq.{username}&select=*", table_url("user"))
    } else {
        format!(
            "{}?or=(friend_group.eq.{},friend_group.eq.0)&username=neq.{username}&select=*",
            table_url("user"),
            urlencoding::encode(group)
        )
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn chatrooms_url(user_id: &str) -> String {
    format!("{}?user_id=eq.{}&select=*", table_url("v_chatroom"), urlencoding::encode(user_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn unread_counts_url(user_id: &str) -> String {
    format!("{}?user_id=eq.{}&select=*", table_url("v_unread_count"), urlencoding::encode(user_id))
}

#[cfg(any(test, feature = "hydrate"))]
fn member_row_url(chatroom_id: &str, user_id: &str) -> String {
    format!(
        "{}?chatroom_id=eq.{}&user_id=eq.{}",
        table_url("chatroom_member"),
        urlencoding::encode(chatroom_id),
        urlencoding::encode(user_id)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_messages_url(chatroom_id: &str) -> String {
    format!(
        "{}?chatroom_id=eq.{}&order=created_at.asc&select=*",
        table_url("v_chat"),
        urlencoding::encode(chatroom_id)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_by_id_url(id: &str) -> String {
    format!("{}?id=eq.{}&select=*", table_url("v_chat"), urlencoding::encode(id))
}

/// One user's direct-mail conversation, either direction.
#[cfg(any(test, feature = "hydrate"))]
fn direct_messages_url(user_id: &str) -> String {
    let user_id = urlencoding::encode(user_id);
    format!(
        "{}?or=(author_id.eq.{user_id},recipient_id.eq.{user_id})&order=created_at.asc&select=*",
        table_url("v_message")
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn all_direct_messages_url() -> String {
    format!("{}?order=created_at.asc&select=*", table_url("v_message"))
}

#[cfg(any(test, feature = "hydrate"))]
fn notifications_url(user_id: &str) -> String {
    format!(
        "{}?user_id=eq.{}&order=created_at.desc&select=*",
        table_url("notification"),
        urlencoding::encode(user_id)
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn notification_by_id_url(id: &str) -> String {
    format!("{}?id=eq.{}", table_url("notification"), urlencoding::encode(id))
}

#[cfg(any(test, feature = "hydrate"))]
fn unread_notifications_url(user_id: &str) -> String {
    format!(
        "{}?user_id=eq.{}&is_read=eq.false",
        table_url("notification"),
        urlencoding::encode(user_id)
    )
}

/// Direct mail without an explicit recipient routes to the admin inbox.
#[cfg(any(test, feature = "hydrate"))]
fn resolve_recipient(recipient_id: Option<&str>, admin_id: Option<&str>) -> Option<String> {
    recipient_id
        .map(str::to_owned)
        .or_else(|| admin_id.map(str::to_owned))
}

/// Parse the nullable scalar returned by the `find_chatroom` RPC.
#[cfg(any(test, feature = "hydrate"))]
fn parse_rpc_chatroom_id(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// =============================================================
// Request helpers (browser only)
// =============================================================

#[cfg(feature = "hydrate")]
fn authed(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    builder
        .header("apikey", config::anon_key())
        .header("Authorization", &format!("Bearer {}", config::anon_key()))
}

#[cfg(feature = "hydrate")]
async fn get_rows<T: DeserializeOwned>(url: &str) -> Option<Vec<T>> {
    let resp = authed(gloo_net::http::Request::get(url)).send().await.ok()?;
    if !resp.ok() {
        leptos::logging::warn!("service GET failed: {} {}", resp.status(), url);
        return None;
    }
    resp.json::<Vec<T>>().await.ok()
}

#[cfg(feature = "hydrate")]
async fn insert_rows<T: serde::Serialize>(url: &str, rows: &[T]) -> Option<Vec<InsertedRow>> {
    let resp = authed(gloo_net::http::Request::post(url))
        .header("Prefer", "return=representation")
        .json(rows)
        .ok()?
        .send()
        .await
        .ok()?;
    if !resp.ok() {
        leptos::logging::warn!("service insert failed: {} {}", resp.status(), url);
        return None;
    }
    resp.json::<Vec<InsertedRow>>().await.ok()
}

#[cfg(feature = "hydrate")]
async fn patch_rows(url: &str, body: &serde_json::Value) -> bool {
    let Ok(req) = authed(gloo_net::http::Request::patch(url)).json(body) else {
        return false;
    };
    match req.send().await {
        Ok(resp) if resp.ok() => true,
        Ok(resp) => {
            leptos::logging::warn!("service PATCH failed: {} {}", resp.status(), url);
            false
        }
        Err(e) => {
            leptos::logging::warn!("service PATCH error: {e}");
            false
        }
    }
}

/// Current time as an ISO 8601 string, for read timestamps.
#[cfg(feature = "hydrate")]
pub fn now_iso() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

// =============================================================
// Users
// =============================================================

/// Fetch a user row (including the PIN column) by exact username.
/// Returns `None` when no such user exists or the call fails.
pub async fn fetch_auth_user(username: &str) -> Option<AuthUser> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<AuthUser>(&user_by_username_url(username))
            .await?
            .into_iter()
            .next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        None
    }
}

/// Fetch every user visible to `group`, excluding the viewer.
pub async fn fetch_users_by_group(group: &str, username: &str) -> Vec<User> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<User>(&users_by_group_url(group, username))
            .await
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (group, username);
        Vec::new()
    }
}

// =============================================================
// Chatrooms
// =============================================================

/// Fetch the chatrooms the user is a member of.
pub async fn fetch_chatrooms(user_id: &str) -> Vec<Chatroom> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<Chatroom>(&chatrooms_url(user_id)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Vec::new()
    }
}

/// Fetch per-chatroom unread counts for the user.
pub async fn fetch_unread_counts(user_id: &str) -> Vec<UnreadCount> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<UnreadCount>(&unread_counts_url(user_id)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Vec::new()
    }
}

/// Mark a chatroom read by advancing the member's last-read timestamp.
pub async fn enter_chatroom(chatroom_id: &str, user_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "last_read_at": now_iso() });
        patch_rows(&member_row_url(chatroom_id, user_id), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chatroom_id, user_id);
        false
    }
}

/// Look up an existing chatroom with exactly this member set (and, for
/// groups, this title). Returns the chatroom id when one exists.
pub async fn find_existing_chatroom(member_ids: &[String], title: Option<&str>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "member_ids": member_ids, "title": title });
        let resp = authed(gloo_net::http::Request::post(&rpc_url("find_chatroom")))
            .json(&payload)
            .ok()?
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            leptos::logging::warn!("find_chatroom rpc failed: {}", resp.status());
            return None;
        }
        let value = resp.json::<serde_json::Value>().await.ok()?;
        parse_rpc_chatroom_id(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (member_ids, title);
        None
    }
}

/// Create a chatroom; DM pairings pass no title.
pub async fn insert_chatroom(title: Option<&str>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let rows = [serde_json::json!({ "title": title })];
        insert_rows(&table_url("chatroom"), &rows)
            .await?
            .into_iter()
            .next()
            .map(|row| row.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = title;
        None
    }
}

/// Add the member rows for a freshly created chatroom.
///
/// # Errors
///
/// Returns an error string when the insert fails; the chatroom row
/// already exists at that point and is left behind (service-side data is
/// never deleted by this client).
pub async fn insert_chatroom_members(chatroom_id: &str, member_ids: &[String]) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let rows: Vec<serde_json::Value> = member_ids
            .iter()
            .map(|user_id| serde_json::json!({ "chatroom_id": chatroom_id, "user_id": user_id }))
            .collect();
        let resp = authed(gloo_net::http::Request::post(&table_url("chatroom_member")))
            .json(&rows)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("member insert failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chatroom_id, member_ids);
        Err("not available on server".to_owned())
    }
}

// =============================================================
// Chat messages
// =============================================================

/// Fetch a chatroom's messages, oldest first.
pub async fn fetch_chat_messages(chatroom_id: &str) -> Vec<ChatMessage> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<ChatMessage>(&chat_messages_url(chatroom_id)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = chatroom_id;
        Vec::new()
    }
}

/// Fetch one message with its author join, for the broadcast payload.
pub async fn fetch_chat_by_id(id: &str) -> Option<ChatMessage> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<ChatMessage>(&chat_by_id_url(id)).await?.into_iter().next()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        None
    }
}

/// Persist a chat message; returns the generated row id.
pub async fn insert_chat(chatroom_id: &str, user_id: &str, body: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let rows = [serde_json::json!({
            "chatroom_id": chatroom_id,
            "user_id": user_id,
            "message": body,
        })];
        insert_rows(&table_url("chat"), &rows)
            .await?
            .into_iter()
            .next()
            .map(|row| row.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (chatroom_id, user_id, body);
        None
    }
}

// =============================================================
// Direct mail
// =============================================================

/// Fetch one user's direct-mail conversation, oldest first.
pub async fn fetch_direct_messages(user_id: &str) -> Vec<DirectMessage> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<DirectMessage>(&direct_messages_url(user_id)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Vec::new()
    }
}

/// Fetch the full direct-mail superset (admin view).
pub async fn fetch_all_direct_messages() -> Vec<DirectMessage> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<DirectMessage>(&all_direct_messages_url()).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Persist a direct message; without an explicit recipient it routes to
/// the configured admin identity. Returns the generated row id.
pub async fn insert_direct_message(author_id: &str, body: &str, recipient_id: Option<&str>) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let Some(recipient) = resolve_recipient(recipient_id, config::admin_user_id()) else {
            leptos::logging::warn!("no recipient and no admin identity configured; message dropped");
            return None;
        };
        let rows = [serde_json::json!({
            "author_id": author_id,
            "recipient_id": recipient,
            "message": body,
        })];
        insert_rows(&table_url("message"), &rows)
            .await?
            .into_iter()
            .next()
            .map(|row| row.id)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (author_id, body, recipient_id);
        None
    }
}

// =============================================================
// Notifications
// =============================================================

/// Fetch the user's notifications, newest first.
pub async fn fetch_notifications(user_id: &str) -> Vec<Notification> {
    #[cfg(feature = "hydrate")]
    {
        get_rows::<Notification>(&notifications_url(user_id)).await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Vec::new()
    }
}

/// Flag one notification read.
pub async fn mark_notification_read(id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "is_read": true, "read_at": now_iso() });
        patch_rows(&notification_by_id_url(id), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        false
    }
}

/// Flag every unread notification for the user read.
pub async fn mark_all_notifications_read(user_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "is_read": true, "read_at": now_iso() });
        patch_rows(&unread_notifications_url(user_id), &body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        false
    }
}

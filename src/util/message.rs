//! Message body validation shared by the chat and inbox send forms.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

/// Longest accepted message body, in characters after trimming.
pub const MESSAGE_MAX_LENGTH: usize = 500;

/// Validate and trim a message body before any network call.
///
/// # Errors
///
/// Returns an inline-display error when the trimmed body is empty or
/// longer than [`MESSAGE_MAX_LENGTH`].
pub fn validate_message(input: &str) -> Result<String, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("Enter a message first.");
    }
    if trimmed.chars().count() > MESSAGE_MAX_LENGTH {
        return Err("Message is too long.");
    }
    Ok(trimmed.to_owned())
}

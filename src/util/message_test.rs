use super::*;

#[test]
fn validate_message_trims_surrounding_whitespace() {
    assert_eq!(validate_message("  hello  "), Ok("hello".to_owned()));
}

#[test]
fn validate_message_rejects_empty_and_whitespace_only_input() {
    assert_eq!(validate_message(""), Err("Enter a message first."));
    assert_eq!(validate_message("   \n\t  "), Err("Enter a message first."));
}

#[test]
fn validate_message_accepts_exactly_max_length() {
    let body = "a".repeat(MESSAGE_MAX_LENGTH);
    assert_eq!(validate_message(&body), Ok(body.clone()));
}

#[test]
fn validate_message_rejects_over_max_length() {
    let body = "a".repeat(MESSAGE_MAX_LENGTH + 1);
    assert_eq!(validate_message(&body), Err("Message is too long."));
}

#[test]
fn validate_message_counts_characters_not_bytes() {
    // Multi-byte characters at the limit still pass.
    let body = "가".repeat(MESSAGE_MAX_LENGTH);
    assert!(validate_message(&body).is_ok());
}

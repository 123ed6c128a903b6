use super::*;

#[test]
fn is_admin_id_requires_configured_admin() {
    assert!(!is_admin_id(None, "u1"));
}

#[test]
fn is_admin_id_matches_exact_identity_only() {
    assert!(is_admin_id(Some("u1"), "u1"));
    assert!(!is_admin_id(Some("u1"), "u2"));
    assert!(!is_admin_id(Some("u1"), ""));
}

#[test]
fn rest_base_defaults_to_localhost() {
    // Built without service env vars, the dev defaults apply.
    assert!(rest_base().starts_with("http"));
    assert!(realtime_base().starts_with("ws"));
}

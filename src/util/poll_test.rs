use super::*;

#[test]
fn inert_guard_starts_cancelled() {
    let guard = PollGuard::inert();
    assert!(guard.is_cancelled());
}

#[test]
fn cancel_is_idempotent_and_visible_to_clones() {
    let guard = spawn_poll(std::time::Duration::from_secs(1), || {});
    let clone = guard.clone();
    guard.cancel();
    guard.cancel();
    assert!(clone.is_cancelled());
}
